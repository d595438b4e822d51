//! # django-salesforce-core
//!
//! Foundation types for django-salesforce: errors, settings, logging,
//! diagnostic check messages, and text helpers.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Settings struct and the global [`SETTINGS`] instance
//! - [`settings_loader`] - TOML/JSON/environment settings loading
//! - [`logging`] - Tracing-based logging integration
//! - [`checks`] - Diagnostic messages for model declarations
//! - [`utils`] - Text helpers used by column naming

pub mod checks;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use checks::{CheckLevel, CheckMessage};
pub use error::{SalesforceError, SalesforceResult, ValidationError};
pub use settings::{Settings, SETTINGS};
