//! # django-salesforce-db
//!
//! Model fields that map Django-style model attributes onto Salesforce
//! record fields. Attribute names are translated into Salesforce API names
//! (`last_name` -> `LastName`, custom fields get `__c`), each field carries
//! its Salesforce write eligibility, and primary keys and foreign keys follow
//! Salesforce's record ID model.
//!
//! ## Module Overview
//!
//! - [`fields`] - The [`Field`](fields::Field) hooks and the Salesforce field types
//! - [`model`] - [`ModelBuilder`](model::ModelBuilder) and [`ModelMeta`](model::ModelMeta)
//! - [`value`] - The [`Value`](value::Value) enum field values are coerced into
//! - [`validators`] - Field validators

// These clippy lints are intentionally allowed for the fields crate:
// - struct_excessive_bools: FieldOptions mirrors Django's field API which uses many booleans
// - result_large_err: SalesforceError is the framework error type and should be used consistently
// - doc_markdown: backtick requirements for documentation items are too strict
// - return_self_not_must_use: builder pattern methods are self-documenting
// - module_name_repetitions: field type names follow Django's
// - missing_const_for_fn: accessors stay non-const so field types can grow non-const state
// - option_if_let_else: if-let/else reads clearer than map_or_else for the model checks
// - match_same_arms: the ScalarKind tables keep one arm per kind for readability
// - cast_possible_truncation: integer coercion converts integral floats to i64
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::result_large_err)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_possible_truncation)]

pub mod fields;
pub mod model;
pub mod validators;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use fields::{
    AutoField, BooleanField, CharField, DateField, DateTimeField, DecimalField, EmailField, Field,
    FieldOptions, ForeignKey, IntegerField, OnDelete, SalesforceAutoField, SfMeta, SfReadOnly,
    SmallIntegerField, TextField, TimeField, UrlField, FULL_WRITABLE, NOT_CREATEABLE,
    NOT_UPDATEABLE, READ_ONLY,
};
pub use model::{ModelBuilder, ModelMeta, ModelState};
pub use validators::Validator;
pub use value::Value;
