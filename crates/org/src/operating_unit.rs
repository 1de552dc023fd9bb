use serde::{Deserialize, Serialize};

use opunit_core::{CompanyId, Entity, OperatingUnitId};

/// An operating unit: a sub-company grouping used to partition financial and
/// operational records. Belongs to exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingUnit {
    id: OperatingUnitId,
    code: String,
    name: String,
    company_id: CompanyId,
}

impl OperatingUnit {
    pub fn new(
        id: OperatingUnitId,
        code: impl Into<String>,
        name: impl Into<String>,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            company_id,
        }
    }

    pub fn id_typed(&self) -> OperatingUnitId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Invariant helper: whether this unit belongs to `company`.
    pub fn belongs_to(&self, company: CompanyId) -> bool {
        self.company_id == company
    }
}

impl Entity for OperatingUnit {
    type Id = OperatingUnitId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
