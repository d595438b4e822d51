//! Model registry for Salesforce objects.
//!
//! A model is declared by feeding fields to a [`ModelBuilder`]. Each field's
//! [`Field::contribute_to_class`] hook runs against the builder's
//! [`ModelState`], which records the primary key and the Salesforce ID field
//! for that one model. [`ModelBuilder::build`] freezes the result into a
//! [`ModelMeta`], the equivalent of Django's `Model._meta`.

use std::collections::HashMap;

use django_salesforce_core::logging::model_span;
use django_salesforce_core::{CheckMessage, SalesforceError, SalesforceResult, Settings, SETTINGS};

use crate::fields::Field;
use crate::value::Value;

/// Per-model registration state shared with fields during declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    primary_key: Option<String>,
    auto_field: Option<String>,
}

impl ModelState {
    /// Registers `name` as the primary key. Fails if one is already set.
    pub fn set_primary_key(&mut self, name: &str) -> SalesforceResult<()> {
        if let Some(existing) = &self.primary_key {
            return Err(SalesforceError::ImproperlyConfigured(format!(
                "A model can't have more than one primary key: '{existing}' is already the primary key, cannot add '{name}'."
            )));
        }
        self.primary_key = Some(name.to_string());
        Ok(())
    }

    /// Records `name` as the Salesforce ID field.
    pub fn set_auto_field(&mut self, name: &str) {
        self.auto_field = Some(name.to_string());
    }

    /// Whether a Salesforce ID field has been registered.
    pub const fn has_auto_field(&self) -> bool {
        self.auto_field.is_some()
    }

    /// The name of the Salesforce ID field.
    pub fn auto_field(&self) -> Option<&str> {
        self.auto_field.as_deref()
    }

    /// The name of the primary key field.
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }
}

/// Collects the fields of one Salesforce object.
///
/// # Examples
///
/// ```
/// use django_salesforce_db::fields::{CharField, SalesforceAutoField, READ_ONLY};
/// use django_salesforce_db::model::ModelBuilder;
///
/// let meta = ModelBuilder::new("Contact")
///     .field(SalesforceAutoField::primary_key("Id")).unwrap()
///     .field(CharField::new("last_name").max_length(80)).unwrap()
///     .field(CharField::new("name").max_length(121).sf_read_only(READ_ONLY)).unwrap()
///     .build();
///
/// assert_eq!(meta.columns(), vec!["Id", "LastName", "Name"]);
/// assert_eq!(meta.creatable_fields().len(), 1);
/// ```
#[derive(Debug)]
pub struct ModelBuilder {
    object_name: String,
    db_table: Option<String>,
    strict_foreign_keys: bool,
    state: ModelState,
    fields: Vec<Box<dyn Field>>,
}

impl ModelBuilder {
    /// Starts declaring `object_name`. Strict relation checking follows the
    /// global settings when they are configured.
    pub fn new(object_name: impl Into<String>) -> Self {
        let strict = SETTINGS
            .try_get()
            .is_some_and(|settings| settings.strict_foreign_keys);
        Self {
            object_name: object_name.into(),
            db_table: None,
            strict_foreign_keys: strict,
            state: ModelState::default(),
            fields: Vec::new(),
        }
    }

    /// Starts declaring `object_name` with options taken from `settings`.
    pub fn from_settings(object_name: impl Into<String>, settings: &Settings) -> Self {
        Self::new(object_name).strict_foreign_keys(settings.strict_foreign_keys)
    }

    /// Sets the Salesforce object API name. Defaults to the object name.
    #[must_use]
    pub fn db_table(mut self, db_table: impl Into<String>) -> Self {
        self.db_table = Some(db_table.into());
        self
    }

    /// Rejects relations whose `on_delete` policy is unsupported instead of
    /// only warning.
    #[must_use]
    pub const fn strict_foreign_keys(mut self, strict: bool) -> Self {
        self.strict_foreign_keys = strict;
        self
    }

    /// Adds a field.
    pub fn field(self, field: impl Field + 'static) -> SalesforceResult<Self> {
        self.add_field(Box::new(field))
    }

    /// Adds a boxed field.
    pub fn add_field(mut self, field: Box<dyn Field>) -> SalesforceResult<Self> {
        let _span = model_span(&self.object_name).entered();
        let name = field.name().to_string();

        if self
            .fields
            .iter()
            .any(|f| f.name() == name || f.attname() == field.attname())
        {
            return Err(SalesforceError::ImproperlyConfigured(format!(
                "Field '{name}' is already declared on {}.",
                self.object_name
            )));
        }

        if self.strict_foreign_keys {
            if let Some(warning) = field.warnings().iter().find(|w| w.is_serious()) {
                return Err(SalesforceError::ImproperlyConfigured(format!(
                    "{}.{name}: {}",
                    self.object_name, warning.msg
                )));
            }
        }

        field.contribute_to_class(&mut self.state)?;

        let (attname, column) = field.attname_column();
        tracing::debug!(
            field = %name,
            attname = %attname,
            column = %column,
            sf_read_only = field.sf_meta().sf_read_only.code(),
            "registered field"
        );
        self.fields.push(field);
        Ok(self)
    }

    /// Finishes the declaration.
    pub fn build(self) -> ModelMeta {
        let db_table = self.db_table.unwrap_or_else(|| self.object_name.clone());
        tracing::debug!(
            object = %self.object_name,
            db_table = %db_table,
            fields = self.fields.len(),
            "built Salesforce model"
        );
        ModelMeta {
            object_name: self.object_name,
            db_table,
            state: self.state,
            fields: self.fields,
        }
    }
}

/// The frozen field registry of one Salesforce object.
#[derive(Debug)]
pub struct ModelMeta {
    object_name: String,
    db_table: String,
    state: ModelState,
    fields: Vec<Box<dyn Field>>,
}

impl ModelMeta {
    /// The model name.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// The Salesforce object API name.
    pub fn db_table(&self) -> &str {
        &self.db_table
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &dyn Field> {
        self.fields.iter().map(|f| &**f as &dyn Field)
    }

    /// Looks a field up by name or attname.
    pub fn get_field(&self, name: &str) -> SalesforceResult<&dyn Field> {
        self.fields()
            .find(|f| f.name() == name || f.attname() == name)
            .ok_or_else(|| {
                SalesforceError::FieldDoesNotExist(format!(
                    "{} has no field named '{name}'",
                    self.object_name
                ))
            })
    }

    /// Looks a field up by its Salesforce column.
    pub fn get_field_by_column(&self, column: &str) -> Option<&dyn Field> {
        self.fields().find(|f| f.column() == column)
    }

    /// The primary key field.
    pub fn pk(&self) -> Option<&dyn Field> {
        let name = self.state.primary_key()?;
        self.fields().find(|f| f.name() == name)
    }

    /// Whether the model has a Salesforce ID field.
    pub const fn has_auto_field(&self) -> bool {
        self.state.has_auto_field()
    }

    /// Salesforce columns in declaration order.
    pub fn columns(&self) -> Vec<String> {
        self.fields().map(|f| f.column()).collect()
    }

    /// Fields sent when a record is created.
    pub fn creatable_fields(&self) -> Vec<&dyn Field> {
        self.fields()
            .filter(|f| !self.is_auto_field(*f) && f.sf_meta().sf_read_only.is_creatable())
            .collect()
    }

    /// Fields sent when a record is updated.
    pub fn updatable_fields(&self) -> Vec<&dyn Field> {
        self.fields()
            .filter(|f| {
                !f.options().primary_key && f.sf_meta().sf_read_only.is_updatable()
            })
            .collect()
    }

    /// Maps attribute values to Salesforce columns for an insert, dropping
    /// fields Salesforce does not accept on create.
    pub fn prepare_insert(&self, values: &[(&str, Value)]) -> SalesforceResult<Vec<(String, Value)>> {
        self.prepare(values, |f| {
            !self.is_auto_field(f) && f.sf_meta().sf_read_only.is_creatable()
        })
    }

    /// Maps attribute values to Salesforce columns for an update, dropping
    /// fields Salesforce does not accept on update.
    pub fn prepare_update(&self, values: &[(&str, Value)]) -> SalesforceResult<Vec<(String, Value)>> {
        self.prepare(values, |f| {
            !f.options().primary_key && f.sf_meta().sf_read_only.is_updatable()
        })
    }

    fn prepare(
        &self,
        values: &[(&str, Value)],
        writable: impl Fn(&dyn Field) -> bool,
    ) -> SalesforceResult<Vec<(String, Value)>> {
        let mut prepared = Vec::with_capacity(values.len());
        for (name, value) in values {
            let field = self.get_field(name)?;
            if !writable(field) {
                tracing::debug!(object = %self.object_name, field = %name, "skipping non-writable field");
                continue;
            }
            prepared.push((field.column(), field.get_prep_value(value)?));
        }
        Ok(prepared)
    }

    fn is_auto_field(&self, field: &dyn Field) -> bool {
        self.state.auto_field() == Some(field.name())
    }

    /// Runs the declaration checks of every field plus model-level checks.
    pub fn check(&self) -> Vec<CheckMessage> {
        let mut messages: Vec<CheckMessage> = self.fields().flat_map(|f| f.check()).collect();

        let mut seen: HashMap<String, &str> = HashMap::new();
        for field in self.fields() {
            let column = field.column();
            if let Some(other) = seen.get(&column) {
                messages.push(CheckMessage::error(
                    format!(
                        "Field '{}' has column name '{column}' that is used by another field ('{other}').",
                        field.name()
                    ),
                    Some("Specify a 'db_column' for the field."),
                    Some(&format!("{}.{}", self.object_name, field.name())),
                    Some("models.E007"),
                ));
            } else {
                seen.insert(column, field.name());
            }
        }

        if self.state.primary_key().is_none() {
            messages.push(CheckMessage::error(
                format!("{} does not declare a primary key.", self.object_name),
                Some("Add a SalesforceAutoField with primary_key set, usually named 'Id'."),
                Some(&self.object_name),
                Some("salesforce.E001"),
            ));
        }
        messages
    }
}
