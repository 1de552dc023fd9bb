use std::collections::HashMap;

use opunit_core::{CompanyId, OperatingUnitId, UserId};

use crate::{Company, Employee, OperatingUnit, User};

/// In-memory registry of organizational master data.
///
/// Stands in for the host framework's record lookups: the extension modules
/// resolve companies, operating units, users and employees through it.
/// Employees keep insertion order so address matching is deterministic.
#[derive(Debug, Default, Clone)]
pub struct OrgDirectory {
    companies: HashMap<CompanyId, Company>,
    units: HashMap<OperatingUnitId, OperatingUnit>,
    users: HashMap<UserId, User>,
    employees: Vec<Employee>,
}

impl OrgDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_company(&mut self, company: Company) {
        self.companies.insert(company.id_typed(), company);
    }

    pub fn add_operating_unit(&mut self, unit: OperatingUnit) {
        self.units.insert(unit.id_typed(), unit);
    }

    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.id_typed(), user);
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(&id)
    }

    pub fn operating_unit(&self, id: OperatingUnitId) -> Option<&OperatingUnit> {
        self.units.get(&id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Default-value resolution keyed by acting user: the operating unit a new
    /// record created by `user` should default to.
    pub fn default_operating_unit(&self, user: UserId) -> Option<OperatingUnitId> {
        self.users.get(&user)?.default_operating_unit()
    }

    /// Resolve an employee from a sender address.
    ///
    /// Case-insensitive substring match of `address` against the employee's
    /// work email or their linked user account's email; the first employee
    /// matching either wins (insertion order).
    pub fn find_employee_by_address(&self, address: &str) -> Option<&Employee> {
        let needle = address.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.employees.iter().find(|employee| {
            let work_match = employee
                .work_email()
                .is_some_and(|email| email.to_lowercase().contains(&needle));
            let user_match = employee
                .user_id()
                .and_then(|id| self.users.get(&id))
                .is_some_and(|user| user.email().to_lowercase().contains(&needle));
            work_match || user_match
        })
    }
}
