use chrono::Utc;
use serde::{Deserialize, Serialize};

use opunit_core::{
    AccountId, CompanyId, ConfigurationError, ExpenseId, OperatingUnitId, OuResult, UserId,
};
use opunit_org::OrgDirectory;

use crate::expense::{Expense, NewExpense};

/// Parsed inbound message payload, as handed over by the mail pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Raw `From` header (may carry a display name and/or multiple addresses).
    pub email_from: String,
    pub subject: String,
    pub body: String,
}

/// Pre-supplied field values taking precedence over the parsed message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomValues {
    pub description: Option<String>,
    pub total_amount: Option<u64>,
    pub operating_unit_id: Option<OperatingUnitId>,
    pub expense_account: Option<AccountId>,
}

/// Identity and company context the record creation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationContext {
    pub acting_user: UserId,
    pub company_id: CompanyId,
}

/// Outcome of inbound-mail record creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageExpense {
    pub expense: Expense,
    pub context: CreationContext,
}

/// Extract the bare addresses from an address-list header.
///
/// Handles `Display Name <addr>` forms and comma-separated lists; anything
/// without an `@` is discarded.
pub fn email_split(header: &str) -> Vec<String> {
    header
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            let addr = match (part.find('<'), part.rfind('>')) {
                (Some(start), Some(end)) if start < end => &part[start + 1..end],
                _ => part,
            };
            let addr = addr.trim();
            addr.contains('@').then(|| addr.to_string())
        })
        .collect()
}

/// Create a draft expense from an inbound message.
///
/// The sender must resolve to a registered employee (work email or linked user
/// email, case-insensitive substring, first match). When the employee's
/// company designates an intercompany operating user, the creation
/// impersonates it and forces the company context to the employee's company;
/// otherwise it runs as `acting_user`. The base creation then consumes the
/// resolved context.
pub fn create_from_message(
    msg: &InboundMessage,
    custom_values: Option<CustomValues>,
    acting_user: UserId,
    default_account: AccountId,
    dir: &OrgDirectory,
) -> OuResult<MessageExpense> {
    let Some(address) = email_split(&msg.email_from).into_iter().next() else {
        return Err(ConfigurationError::unknown_sender(msg.email_from.clone()));
    };
    let employee = dir
        .find_employee_by_address(&address)
        .ok_or_else(|| ConfigurationError::unknown_sender(address.clone()))?;

    let company_id = employee.company_id();
    let context = match dir.company(company_id).and_then(|c| c.intercompany_user()) {
        Some(intercompany) => {
            tracing::debug!(
                %company_id,
                acting_user = %intercompany,
                "impersonating intercompany operating user for inbound expense"
            );
            CreationContext {
                acting_user: intercompany,
                company_id,
            }
        }
        None => CreationContext {
            acting_user,
            company_id,
        },
    };

    let custom = custom_values.unwrap_or_default();
    let expense = Expense::create(
        NewExpense {
            id: ExpenseId::new(),
            description: custom.description.unwrap_or_else(|| msg.subject.clone()),
            employee_id: employee.id_typed(),
            company_id: context.company_id,
            expense_account: custom.expense_account.unwrap_or(default_account),
            total_amount: custom.total_amount.unwrap_or(0),
            date: Utc::now(),
            operating_unit_id: custom.operating_unit_id,
        },
        context.acting_user,
        dir,
    )?;

    Ok(MessageExpense { expense, context })
}
