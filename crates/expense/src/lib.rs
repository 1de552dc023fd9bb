//! Expense operating-unit extension.
//!
//! Adds the operating-unit dimension to expenses and expense sheets and
//! enforces the consistency rules between an expense, its company, its sheet,
//! and their operating units:
//!
//! - company/operating-unit consistency on both record kinds;
//! - a submission gate requiring a batch to resolve to exactly one distinct,
//!   non-empty operating unit;
//! - operating-unit stamping of the generated debit/credit move-line values;
//! - inbound-mail record creation in the correct multi-company context.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod account_move;
pub mod expense;
pub mod intake;
pub mod submit;

pub use account_move::{account_move_line_values, stamp_operating_unit, MoveLinePair, MoveLineValues};
pub use expense::{
    check_company_operating_unit, check_sheet_operating_unit, Expense, ExpenseSheet, ExpenseState,
    NewExpense,
};
pub use intake::{create_from_message, email_split, CreationContext, CustomValues, InboundMessage, MessageExpense};
pub use submit::{submit_expenses, Submission, SubmissionContext};

use opunit_core::ModuleManifest;

/// Module metadata for this extension.
pub const MANIFEST: ModuleManifest = ModuleManifest {
    name: "expense-operating-unit",
    summary: "Operating-unit dimension for expenses and expense sheets",
    version: "1.0.0",
    depends: &["expense", "operating-unit"],
};
