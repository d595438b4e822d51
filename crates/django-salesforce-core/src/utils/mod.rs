//! Utility helpers shared across django-salesforce crates.

pub mod text;

pub use text::{capfirst, is_lower, title_case};
