use serde::{Deserialize, Serialize};

use opunit_core::{ConfigurationError, OperatingUnitId, OuResult};

use crate::expense::Expense;

/// Defaults propagated to records derived from a submission (e.g. the
/// auto-created expense sheet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionContext {
    pub default_operating_unit: Option<OperatingUnitId>,
}

/// Result of advancing a batch of expenses to submitted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub expenses: Vec<Expense>,
    pub context: SubmissionContext,
}

/// Advance a batch of expenses to submitted state.
///
/// The base transition runs first and produces the derived-record context;
/// the operating-unit gate then requires the batch to resolve to exactly one
/// distinct, non-empty operating unit and stamps it as the context default.
/// On failure the transitioned copies are dropped and the caller keeps its
/// original records, which stands in for the enclosing transaction rollback.
pub fn submit_expenses(expenses: Vec<Expense>) -> OuResult<Submission> {
    // Base behavior: status transition + empty context.
    let mut submitted = expenses;
    for expense in &mut submitted {
        expense.mark_submitted();
    }
    let mut context = SubmissionContext::default();

    // Gate: exactly one distinct operating unit, none of them empty.
    let mut distinct: Vec<OperatingUnitId> = Vec::new();
    for expense in &submitted {
        match expense.operating_unit_id() {
            None => return Err(ConfigurationError::MixedOrMissingOperatingUnit),
            Some(unit) => {
                if !distinct.contains(&unit) {
                    distinct.push(unit);
                }
            }
        }
    }
    if distinct.len() != 1 {
        return Err(ConfigurationError::MixedOrMissingOperatingUnit);
    }
    let unit = distinct[0];

    context.default_operating_unit = Some(unit);
    tracing::debug!(
        operating_unit = %unit,
        expenses = submitted.len(),
        "expense batch submitted"
    );
    Ok(Submission {
        expenses: submitted,
        context,
    })
}
