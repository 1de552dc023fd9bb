//! Organizational master data for the operating-unit extensions.
//!
//! Companies, operating units, users, and employees, plus the in-memory
//! [`OrgDirectory`] the extension modules resolve cross-record references
//! through. Pure domain logic only: no IO, no persistence concerns.

pub mod company;
pub mod directory;
pub mod employee;
pub mod operating_unit;
pub mod user;

pub use company::Company;
pub use directory::OrgDirectory;
pub use employee::Employee;
pub use operating_unit::OperatingUnit;
pub use user::User;
