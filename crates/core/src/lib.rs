//! `opunit-core` — shared building blocks for the operating-unit extensions.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod manifest;

pub use entity::Entity;
pub use error::{ConfigurationError, OuResult};
pub use id::{AccountId, CompanyId, EmployeeId, ExpenseId, ExpenseSheetId, OperatingUnitId, UserId};
pub use manifest::ModuleManifest;
