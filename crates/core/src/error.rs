//! Domain error model.

use thiserror::Error;

/// Result type used across the operating-unit extension crates.
pub type OuResult<T> = Result<T, ConfigurationError>;

/// Configuration error raised by the operating-unit consistency rules.
///
/// Every failure is terminal for the current user action: the caller aborts
/// the enclosing write and surfaces the message as-is. Keep variants focused
/// on deterministic rule violations; infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The record's company and its operating unit's company differ.
    #[error("configuration error: the company in the {record} and in the operating unit must be the same")]
    CompanyMismatch { record: &'static str },

    /// An expense and its sheet carry different operating units.
    #[error("configuration error: the operating unit in the expense sheet and in the expense must be the same")]
    OperatingUnitMismatch,

    /// A submitted batch resolves to zero, or more than one, operating unit.
    #[error("you cannot submit expenses having different operating units or with no operating unit")]
    MixedOrMissingOperatingUnit,

    /// An inbound message's sender matches no registered employee.
    #[error("expenses must come from an employee registered as an hr employee (sender: {email})")]
    UnknownSenderEmployee { email: String },

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl ConfigurationError {
    pub fn company_mismatch(record: &'static str) -> Self {
        Self::CompanyMismatch { record }
    }

    pub fn unknown_sender(email: impl Into<String>) -> Self {
        Self::UnknownSenderEmployee {
            email: email.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
