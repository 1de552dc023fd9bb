use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use opunit_core::{AccountId, ExpenseId, OperatingUnitId};

use crate::expense::Expense;

/// Field values for one accounting move line, pending persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLineValues {
    pub name: String,
    pub account_id: AccountId,
    /// Amounts in smallest currency unit (e.g., cents). Exactly one side of a
    /// line is non-zero.
    pub debit: u64,
    pub credit: u64,
    pub operating_unit_id: Option<OperatingUnitId>,
}

/// Debit/credit field-set pair generated for one expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLinePair {
    pub debit: MoveLineValues,
    pub credit: MoveLineValues,
}

/// Base framework computation: debit the expense account, credit the payable
/// counterpart. Carries no operating unit yet.
pub fn base_move_line_values(
    expenses: &[Expense],
    payable_account: AccountId,
) -> HashMap<ExpenseId, MoveLinePair> {
    expenses
        .iter()
        .map(|expense| {
            let pair = MoveLinePair {
                debit: MoveLineValues {
                    name: expense.description().to_string(),
                    account_id: expense.expense_account(),
                    debit: expense.total_amount(),
                    credit: 0,
                    operating_unit_id: None,
                },
                credit: MoveLineValues {
                    name: expense.description().to_string(),
                    account_id: payable_account,
                    debit: 0,
                    credit: expense.total_amount(),
                    operating_unit_id: None,
                },
            };
            (expense.id_typed(), pair)
        })
        .collect()
}

/// Stamp both sides of each expense's line pair with the owning expense's
/// operating unit. Pure enrichment; never fails.
pub fn stamp_operating_unit(
    expenses: &[Expense],
    lines: &mut HashMap<ExpenseId, MoveLinePair>,
) {
    for expense in expenses {
        if let Some(pair) = lines.get_mut(&expense.id_typed()) {
            pair.debit.operating_unit_id = expense.operating_unit_id();
            pair.credit.operating_unit_id = expense.operating_unit_id();
        }
    }
}

/// Composed entry point: base computation first, operating-unit enrichment
/// second.
pub fn account_move_line_values(
    expenses: &[Expense],
    payable_account: AccountId,
) -> HashMap<ExpenseId, MoveLinePair> {
    let mut lines = base_move_line_values(expenses, payable_account);
    stamp_operating_unit(expenses, &mut lines);
    lines
}
