//! Salesforce-aware model fields.
//!
//! Every field type implements [`Field`], the set of hooks the model
//! registry calls while a model is declared: attribute and column naming,
//! value coercion, validation, form generation, and registration on the
//! model. Salesforce-specific behavior lives in:
//!
//! - [`naming`] - attribute name to Salesforce column name mapping
//! - [`meta`] - `sf_read_only` / `custom` / `db_column` metadata
//! - [`scalar`] - the typed scalar fields (`CharField`, `DecimalField`, ...)
//! - [`auto`] - the Salesforce record ID primary key
//! - [`related`] - foreign keys to other Salesforce objects

pub mod auto;
pub mod form;
pub mod meta;
pub mod naming;
pub mod related;
pub mod scalar;

use std::fmt;

use django_salesforce_core::{CheckMessage, SalesforceError, ValidationError};

use crate::model::ModelState;
use crate::value::Value;

pub use auto::{AutoField, SalesforceAutoField};
pub use form::{FormField, FormFieldType};
pub use meta::{SfMeta, SfReadOnly, FULL_WRITABLE, NOT_CREATEABLE, NOT_UPDATEABLE, READ_ONLY};
pub use related::{ForeignKey, OnDelete};
pub use scalar::{
    BooleanField, CharField, DateField, DateTimeField, DecimalField, EmailField, IntegerField,
    ScalarKind, ScalarType, SfField, SmallIntegerField, TextField, TimeField, UrlField,
};

/// Options shared by all field types, mirroring Django's field keyword
/// arguments. Salesforce options live in [`SfMeta`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    /// Whether this field is the primary key.
    pub primary_key: bool,
    /// Whether a missing value is allowed.
    pub null: bool,
    /// Whether the field may be left blank in forms.
    pub blank: bool,
    /// Default value for new records.
    pub default: Option<Value>,
    /// Whether values must be unique.
    pub unique: bool,
    /// Whether an index is expected on the column.
    pub db_index: bool,
    /// Maximum character length.
    pub max_length: Option<usize>,
    /// Maximum total digits (decimal fields).
    pub max_digits: Option<u32>,
    /// Digits after the decimal point (decimal fields).
    pub decimal_places: Option<u32>,
    /// Human-readable name; derived from the attribute name when unset.
    pub verbose_name: Option<String>,
    /// Human-readable help text.
    pub help_text: String,
    /// Whether the field is editable in forms.
    pub editable: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            primary_key: false,
            null: false,
            blank: false,
            default: None,
            unique: false,
            db_index: false,
            max_length: None,
            max_digits: None,
            decimal_places: None,
            verbose_name: None,
            help_text: String::new(),
            editable: true,
        }
    }
}

impl FieldOptions {
    /// Creates options with Django's defaults (required, non-null, editable).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allows missing values.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Allows blank values in forms.
    #[must_use]
    pub const fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Marks the field as unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the field as indexed.
    #[must_use]
    pub const fn db_index(mut self) -> Self {
        self.db_index = true;
        self
    }

    /// Sets the maximum character length.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets decimal precision.
    #[must_use]
    pub const fn decimal(mut self, max_digits: u32, decimal_places: u32) -> Self {
        self.max_digits = Some(max_digits);
        self.decimal_places = Some(decimal_places);
        self
    }

    /// Sets the verbose (human-readable) name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = Some(name.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    /// Excludes the field from forms.
    #[must_use]
    pub const fn not_editable(mut self) -> Self {
        self.editable = false;
        self
    }
}

/// The hooks a model field provides to the model registry.
///
/// Names follow Django's field API:
///
/// - `name`: the attribute as declared.
/// - `attname`: the attribute holding the raw value; differs from `name`
///   only for relations (`owner` -> `owner_id`).
/// - `column`: the Salesforce API name of the field.
pub trait Field: fmt::Debug + Send + Sync {
    /// The attribute name as declared.
    fn name(&self) -> &str;

    /// The shared field options.
    fn options(&self) -> &FieldOptions;

    /// The Salesforce metadata of this field.
    fn sf_meta(&self) -> &SfMeta;

    /// The host framework's internal type name (e.g. "CharField").
    fn internal_type(&self) -> &'static str;

    /// A human-readable description of the field type.
    fn description(&self) -> String;

    /// The attribute holding the raw value.
    fn attname(&self) -> String {
        self.name().to_string()
    }

    /// Returns `(attname, column)`.
    fn attname_column(&self) -> (String, String) {
        let attname = self.attname();
        let column = self
            .sf_meta()
            .db_column
            .clone()
            .unwrap_or_else(|| attname.clone());
        (attname, column)
    }

    /// The Salesforce column name.
    fn column(&self) -> String {
        self.attname_column().1
    }

    /// The human-readable name of the field.
    fn display_name(&self) -> String {
        self.options()
            .verbose_name
            .clone()
            .unwrap_or_else(|| self.name().replace('_', " "))
    }

    /// Whether the empty string is a legal value.
    fn empty_strings_allowed(&self) -> bool {
        true
    }

    /// Coerces a raw value into this field's value type.
    fn to_python(&self, value: &Value) -> Result<Value, SalesforceError>;

    /// Converts a value into the form sent to Salesforce.
    fn get_prep_value(&self, value: &Value) -> Result<Value, SalesforceError> {
        self.to_python(value)
    }

    /// Validates an already coerced value.
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        validate_presence(self.options(), value)
    }

    /// Coerces and validates a raw value.
    fn clean(&self, value: &Value) -> Result<Value, SalesforceError> {
        let value = self.to_python(value)?;
        self.validate(&value)?;
        Ok(value)
    }

    /// The form field for model forms, or `None` if never user-entered.
    fn formfield(&self) -> Option<FormField>;

    /// Registers the field on the model being declared.
    fn contribute_to_class(&self, model: &mut ModelState) -> Result<(), SalesforceError> {
        if self.options().primary_key {
            model.set_primary_key(self.name())?;
        }
        Ok(())
    }

    /// Whether this field references another model.
    fn is_relation(&self) -> bool {
        false
    }

    /// The referenced model for relation fields.
    fn related_model(&self) -> Option<&str> {
        None
    }

    /// Non-fatal problems detected when the field was constructed.
    fn warnings(&self) -> &[CheckMessage] {
        &[]
    }

    /// Static checks of the field declaration.
    fn check(&self) -> Vec<CheckMessage> {
        self.warnings().to_vec()
    }
}

/// The null and blank checks of Django's `Field.validate`.
pub fn validate_presence(options: &FieldOptions, value: &Value) -> Result<(), SalesforceError> {
    if value.is_null() && !options.null {
        return Err(ValidationError::new("This field cannot be null.", "null").into());
    }
    let empty = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if empty && !options.blank {
        return Err(ValidationError::new("This field cannot be blank.", "blank").into());
    }
    Ok(())
}
