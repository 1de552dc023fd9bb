use serde::{Deserialize, Serialize};

use opunit_core::{CompanyId, Entity, UserId};

/// A company within a multi-company deployment.
///
/// The intercompany operating user is an optional capability: when set, it is
/// the system identity used to create records in this company's context on
/// behalf of actors from another company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    intercompany_user: Option<UserId>,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            intercompany_user: None,
        }
    }

    pub fn with_intercompany_user(mut self, user: UserId) -> Self {
        self.intercompany_user = Some(user);
        self
    }

    pub fn id_typed(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intercompany_user(&self) -> Option<UserId> {
        self.intercompany_user
    }
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
