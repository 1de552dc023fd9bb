use serde::{Deserialize, Serialize};

use opunit_core::{CompanyId, EmployeeId, Entity, UserId};

/// An employee record, optionally linked to a system user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    company_id: CompanyId,
    work_email: Option<String>,
    user_id: Option<UserId>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, company_id: CompanyId) -> Self {
        Self {
            id,
            name: name.into(),
            company_id,
            work_email: None,
            user_id: None,
        }
    }

    pub fn with_work_email(mut self, email: impl Into<String>) -> Self {
        self.work_email = Some(email.into());
        self
    }

    pub fn with_user(mut self, user: UserId) -> Self {
        self.user_id = Some(user);
        self
    }

    pub fn id_typed(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn work_email(&self) -> Option<&str> {
        self.work_email.as_deref()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
