use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opunit_core::{
    AccountId, CompanyId, ConfigurationError, EmployeeId, Entity, ExpenseId, ExpenseSheetId,
    OperatingUnitId, OuResult, UserId,
};
use opunit_org::OrgDirectory;

/// Expense lifecycle (host framework's generic flow; this module only gates
/// the submission transition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseState {
    Draft,
    Submitted,
    Approved,
    Posted,
}

/// Field values for creating a draft expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub id: ExpenseId,
    pub description: String,
    pub employee_id: EmployeeId,
    pub company_id: CompanyId,
    pub expense_account: AccountId,
    /// Amount in smallest currency unit (e.g., cents).
    pub total_amount: u64,
    pub date: DateTime<Utc>,
    /// Explicit operating unit; when `None`, the creating user's configured
    /// default applies.
    pub operating_unit_id: Option<OperatingUnitId>,
}

/// An individual expense record, optionally tagged with an operating unit and
/// optionally owned by an expense sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    employee_id: EmployeeId,
    company_id: CompanyId,
    operating_unit_id: Option<OperatingUnitId>,
    sheet_id: Option<ExpenseSheetId>,
    expense_account: AccountId,
    total_amount: u64,
    date: DateTime<Utc>,
    state: ExpenseState,
    created_by: UserId,
}

impl Expense {
    /// Create a draft expense.
    ///
    /// The operating unit defaults to the creating user's configured default
    /// when not supplied; the company/operating-unit guard runs before the
    /// record exists.
    pub fn create(new: NewExpense, created_by: UserId, dir: &OrgDirectory) -> OuResult<Self> {
        let operating_unit_id = new
            .operating_unit_id
            .or_else(|| dir.default_operating_unit(created_by));
        check_company_operating_unit("expense", new.company_id, operating_unit_id, dir)?;
        Ok(Self {
            id: new.id,
            description: new.description,
            employee_id: new.employee_id,
            company_id: new.company_id,
            operating_unit_id,
            sheet_id: None,
            expense_account: new.expense_account,
            total_amount: new.total_amount,
            date: new.date,
            state: ExpenseState::Draft,
            created_by,
        })
    }

    pub fn id_typed(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn operating_unit_id(&self) -> Option<OperatingUnitId> {
        self.operating_unit_id
    }

    pub fn sheet_id(&self) -> Option<ExpenseSheetId> {
        self.sheet_id
    }

    pub fn expense_account(&self) -> AccountId {
        self.expense_account
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn state(&self) -> ExpenseState {
        self.state
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Operating-unit and company fields stay editable until submission.
    pub fn is_editable(&self) -> bool {
        self.state == ExpenseState::Draft
    }

    /// Change the owning company; re-runs the company/operating-unit guard.
    pub fn set_company(&mut self, company_id: CompanyId, dir: &OrgDirectory) -> OuResult<()> {
        check_company_operating_unit("expense", company_id, self.operating_unit_id, dir)?;
        self.company_id = company_id;
        Ok(())
    }

    /// Change the operating unit; re-runs both guards. Pass the owning sheet
    /// when the expense is attached to one.
    pub fn set_operating_unit(
        &mut self,
        unit: Option<OperatingUnitId>,
        sheet: Option<&ExpenseSheet>,
        dir: &OrgDirectory,
    ) -> OuResult<()> {
        check_company_operating_unit("expense", self.company_id, unit, dir)?;
        if let Some(sheet) = sheet {
            check_sheet_operating_unit(unit, sheet.operating_unit_id())?;
        }
        self.operating_unit_id = unit;
        Ok(())
    }

    /// Attach this expense to a sheet; the sheet's and the expense's operating
    /// units must agree when both are set.
    pub fn attach_to_sheet(&mut self, sheet: &ExpenseSheet) -> OuResult<()> {
        check_sheet_operating_unit(self.operating_unit_id, sheet.operating_unit_id())?;
        self.sheet_id = Some(sheet.id_typed());
        Ok(())
    }

    pub fn detach_from_sheet(&mut self) {
        self.sheet_id = None;
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.state = ExpenseState::Submitted;
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// An expense sheet (report): batch container aggregating expenses for
/// approval and posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSheet {
    id: ExpenseSheetId,
    name: String,
    company_id: CompanyId,
    operating_unit_id: Option<OperatingUnitId>,
    expense_ids: Vec<ExpenseId>,
    state: ExpenseState,
}

impl ExpenseSheet {
    /// Create a draft sheet; same defaulting and company guard as the expense.
    pub fn create(
        id: ExpenseSheetId,
        name: impl Into<String>,
        company_id: CompanyId,
        operating_unit_id: Option<OperatingUnitId>,
        created_by: UserId,
        dir: &OrgDirectory,
    ) -> OuResult<Self> {
        let operating_unit_id =
            operating_unit_id.or_else(|| dir.default_operating_unit(created_by));
        check_company_operating_unit("expense sheet", company_id, operating_unit_id, dir)?;
        Ok(Self {
            id,
            name: name.into(),
            company_id,
            operating_unit_id,
            expense_ids: Vec::new(),
            state: ExpenseState::Draft,
        })
    }

    pub fn id_typed(&self) -> ExpenseSheetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn operating_unit_id(&self) -> Option<OperatingUnitId> {
        self.operating_unit_id
    }

    pub fn expense_ids(&self) -> &[ExpenseId] {
        &self.expense_ids
    }

    pub fn state(&self) -> ExpenseState {
        self.state
    }

    pub fn set_company(&mut self, company_id: CompanyId, dir: &OrgDirectory) -> OuResult<()> {
        check_company_operating_unit("expense sheet", company_id, self.operating_unit_id, dir)?;
        self.company_id = company_id;
        Ok(())
    }

    pub fn set_operating_unit(
        &mut self,
        unit: Option<OperatingUnitId>,
        dir: &OrgDirectory,
    ) -> OuResult<()> {
        check_company_operating_unit("expense sheet", self.company_id, unit, dir)?;
        self.operating_unit_id = unit;
        Ok(())
    }

    /// Record an expense on this sheet; its operating unit must agree with the
    /// sheet's when both are set.
    pub fn register_expense(&mut self, expense: &Expense) -> OuResult<()> {
        check_sheet_operating_unit(expense.operating_unit_id(), self.operating_unit_id)?;
        if !self.expense_ids.contains(&expense.id_typed()) {
            self.expense_ids.push(expense.id_typed());
        }
        Ok(())
    }
}

impl Entity for ExpenseSheet {
    type Id = ExpenseSheetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Guard: a record with both a company and an operating unit must reference a
/// unit belonging to that same company.
///
/// Dangling unit references are the host framework's concern (its relational
/// fields always resolve) and pass through here unchecked.
pub fn check_company_operating_unit(
    record: &'static str,
    company_id: CompanyId,
    unit: Option<OperatingUnitId>,
    dir: &OrgDirectory,
) -> OuResult<()> {
    if let Some(unit) = unit.and_then(|id| dir.operating_unit(id)) {
        if !unit.belongs_to(company_id) {
            return Err(ConfigurationError::company_mismatch(record));
        }
    }
    Ok(())
}

/// Guard: when an expense and its sheet both carry an operating unit, the two
/// must be identical.
pub fn check_sheet_operating_unit(
    expense_unit: Option<OperatingUnitId>,
    sheet_unit: Option<OperatingUnitId>,
) -> OuResult<()> {
    match (expense_unit, sheet_unit) {
        (Some(own), Some(of_sheet)) if own != of_sheet => {
            Err(ConfigurationError::OperatingUnitMismatch)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opunit_org::{Company, OperatingUnit, User};

    struct Fixture {
        dir: OrgDirectory,
        pub company: CompanyId,
        pub other_company: CompanyId,
        pub unit: OperatingUnitId,
        pub other_unit: OperatingUnitId,
        pub foreign_unit: OperatingUnitId,
        pub user: UserId,
    }

    fn fixture() -> Fixture {
        let mut dir = OrgDirectory::new();
        let company = CompanyId::new();
        let other_company = CompanyId::new();
        dir.add_company(Company::new(company, "Acme"));
        dir.add_company(Company::new(other_company, "Globex"));

        let unit = OperatingUnitId::new();
        let other_unit = OperatingUnitId::new();
        let foreign_unit = OperatingUnitId::new();
        dir.add_operating_unit(OperatingUnit::new(unit, "OU-A", "Alpha", company));
        dir.add_operating_unit(OperatingUnit::new(other_unit, "OU-B", "Beta", company));
        dir.add_operating_unit(OperatingUnit::new(foreign_unit, "OU-X", "Foreign", other_company));

        let user = User::new(UserId::new(), "submitter@acme.example");
        let user_id = user.id_typed();
        dir.add_user(user);

        Fixture {
            dir,
            company,
            other_company,
            unit,
            other_unit,
            foreign_unit,
            user: user_id,
        }
    }

    fn draft_expense(fx: &Fixture, unit: Option<OperatingUnitId>) -> Expense {
        Expense::create(
            NewExpense {
                id: ExpenseId::new(),
                description: "Taxi".to_string(),
                employee_id: EmployeeId::new(),
                company_id: fx.company,
                expense_account: AccountId::new(),
                total_amount: 4_200,
                date: Utc::now(),
                operating_unit_id: unit,
            },
            fx.user,
            &fx.dir,
        )
        .unwrap()
    }

    #[test]
    fn expense_with_matching_company_passes_guard() {
        let fx = fixture();
        let expense = draft_expense(&fx, Some(fx.unit));
        assert_eq!(expense.operating_unit_id(), Some(fx.unit));
        assert_eq!(expense.state(), ExpenseState::Draft);
        assert!(expense.is_editable());
    }

    #[test]
    fn expense_with_foreign_unit_fails_company_guard() {
        let fx = fixture();
        let err = Expense::create(
            NewExpense {
                id: ExpenseId::new(),
                description: "Hotel".to_string(),
                employee_id: EmployeeId::new(),
                company_id: fx.company,
                expense_account: AccountId::new(),
                total_amount: 10_000,
                date: Utc::now(),
                operating_unit_id: Some(fx.foreign_unit),
            },
            fx.user,
            &fx.dir,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::CompanyMismatch { record: "expense" }
        );
    }

    #[test]
    fn changing_company_reruns_the_guard() {
        let fx = fixture();
        let mut expense = draft_expense(&fx, Some(fx.unit));
        let err = expense.set_company(fx.other_company, &fx.dir).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::CompanyMismatch { record: "expense" }
        );
        // Rejected change leaves the record untouched.
        assert_eq!(expense.company_id(), fx.company);
    }

    #[test]
    fn expense_unit_defaults_from_user_configuration() {
        let fx = fixture();
        let mut dir = fx.dir.clone();
        let user = User::new(UserId::new(), "defaulted@acme.example")
            .with_default_operating_unit(fx.unit);
        let user_id = user.id_typed();
        dir.add_user(user);

        let expense = Expense::create(
            NewExpense {
                id: ExpenseId::new(),
                description: "Lunch".to_string(),
                employee_id: EmployeeId::new(),
                company_id: fx.company,
                expense_account: AccountId::new(),
                total_amount: 1_500,
                date: Utc::now(),
                operating_unit_id: None,
            },
            user_id,
            &dir,
        )
        .unwrap();
        assert_eq!(expense.operating_unit_id(), Some(fx.unit));
    }

    #[test]
    fn attaching_to_sheet_with_conflicting_unit_fails() {
        let fx = fixture();
        let mut expense = draft_expense(&fx, Some(fx.unit));
        let sheet = ExpenseSheet::create(
            ExpenseSheetId::new(),
            "March report",
            fx.company,
            Some(fx.other_unit),
            fx.user,
            &fx.dir,
        )
        .unwrap();

        let err = expense.attach_to_sheet(&sheet).unwrap_err();
        assert_eq!(err, ConfigurationError::OperatingUnitMismatch);
        assert_eq!(expense.sheet_id(), None);
    }

    #[test]
    fn attaching_to_sheet_without_unit_is_allowed() {
        let fx = fixture();
        let mut expense = draft_expense(&fx, Some(fx.unit));
        let mut sheet = ExpenseSheet::create(
            ExpenseSheetId::new(),
            "March report",
            fx.company,
            None,
            fx.user,
            &fx.dir,
        )
        .unwrap();

        expense.attach_to_sheet(&sheet).unwrap();
        sheet.register_expense(&expense).unwrap();
        assert_eq!(expense.sheet_id(), Some(sheet.id_typed()));
        assert_eq!(sheet.expense_ids(), &[expense.id_typed()]);
    }

    #[test]
    fn unit_change_on_attached_expense_checks_the_sheet() {
        let fx = fixture();
        let sheet = ExpenseSheet::create(
            ExpenseSheetId::new(),
            "March report",
            fx.company,
            Some(fx.unit),
            fx.user,
            &fx.dir,
        )
        .unwrap();
        let mut expense = draft_expense(&fx, Some(fx.unit));
        expense.attach_to_sheet(&sheet).unwrap();

        let err = expense
            .set_operating_unit(Some(fx.other_unit), Some(&sheet), &fx.dir)
            .unwrap_err();
        assert_eq!(err, ConfigurationError::OperatingUnitMismatch);
        assert_eq!(expense.operating_unit_id(), Some(fx.unit));
    }

    #[test]
    fn sheet_company_guard_applies_independently() {
        let fx = fixture();
        let err = ExpenseSheet::create(
            ExpenseSheetId::new(),
            "Cross-company report",
            fx.company,
            Some(fx.foreign_unit),
            fx.user,
            &fx.dir,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::CompanyMismatch {
                record: "expense sheet"
            }
        );

        let mut sheet = ExpenseSheet::create(
            ExpenseSheetId::new(),
            "Report",
            fx.company,
            Some(fx.unit),
            fx.user,
            &fx.dir,
        )
        .unwrap();
        let err = sheet
            .set_operating_unit(Some(fx.foreign_unit), &fx.dir)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::CompanyMismatch {
                record: "expense sheet"
            }
        );
    }
}
