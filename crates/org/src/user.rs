use serde::{Deserialize, Serialize};

use opunit_core::{Entity, OperatingUnitId, UserId};

/// A system user (actor identity).
///
/// Carries the per-user configured default operating unit; new expense records
/// created by this user pick it up unless one is supplied explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    default_operating_unit: Option<OperatingUnitId>,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            default_operating_unit: None,
        }
    }

    pub fn with_default_operating_unit(mut self, unit: OperatingUnitId) -> Self {
        self.default_operating_unit = Some(unit);
        self
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn default_operating_unit(&self) -> Option<OperatingUnitId> {
        self.default_operating_unit
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
