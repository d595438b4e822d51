//! The Salesforce record ID primary key.
//!
//! Salesforce assigns every record an opaque 15/18 character ID. The
//! [`SalesforceAutoField`] maps it onto the model's primary key: it is
//! required to be declared as the primary key, never null, never blank,
//! never defaulted, never validated, and never shown in forms.

use django_salesforce_core::{SalesforceError, SalesforceResult};

use super::form::FormField;
use super::meta::SfMeta;
use super::{Field, FieldOptions};
use crate::model::ModelState;
use crate::value::Value;

/// A primary key holding the Salesforce record ID.
///
/// # Examples
///
/// ```
/// use django_salesforce_db::fields::{Field, FieldOptions, SalesforceAutoField};
///
/// let id = SalesforceAutoField::new("Id", FieldOptions::new().primary_key()).unwrap();
/// assert_eq!(id.column(), "Id");
/// assert!(id.formfield().is_none());
///
/// assert!(SalesforceAutoField::new("Id", FieldOptions::new()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SalesforceAutoField {
    name: String,
    options: FieldOptions,
    sf: SfMeta,
}

/// Alias matching Django's field name.
pub type AutoField = SalesforceAutoField;

impl SalesforceAutoField {
    /// Creates the ID field. `options` must mark it as the primary key;
    /// `null`, `blank`, and `default` are overridden.
    pub fn new(name: impl Into<String>, mut options: FieldOptions) -> SalesforceResult<Self> {
        if !options.primary_key {
            return Err(SalesforceError::ImproperlyConfigured(
                "SalesforceAutoFields must have primary_key=True.".to_string(),
            ));
        }
        options.null = false;
        options.blank = false;
        options.default = None;
        Ok(Self {
            name: name.into(),
            options,
            sf: SfMeta::default(),
        })
    }

    /// Creates the ID field with default options.
    pub fn primary_key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: FieldOptions::new().primary_key(),
            sf: SfMeta::default(),
        }
    }

    /// Sets an explicit column name.
    #[must_use]
    pub fn db_column(mut self, column: impl Into<String>) -> Self {
        self.sf.db_column = Some(column.into());
        self
    }
}

impl Field for SalesforceAutoField {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn sf_meta(&self) -> &SfMeta {
        &self.sf
    }

    fn internal_type(&self) -> &'static str {
        "AutoField"
    }

    fn description(&self) -> String {
        "Text".to_string()
    }

    fn to_python(&self, value: &Value) -> Result<Value, SalesforceError> {
        Ok(match value {
            Value::Null | Value::String(_) => value.clone(),
            other => Value::String(other.to_string()),
        })
    }

    fn validate(&self, _value: &Value) -> Result<(), SalesforceError> {
        Ok(())
    }

    fn formfield(&self) -> Option<FormField> {
        None
    }

    fn contribute_to_class(&self, model: &mut ModelState) -> Result<(), SalesforceError> {
        if model.has_auto_field() {
            return Err(SalesforceError::ImproperlyConfigured(
                "A model can't have more than one AutoField.".to_string(),
            ));
        }
        model.set_primary_key(&self.name)?;
        model.set_auto_field(&self.name);
        Ok(())
    }
}
