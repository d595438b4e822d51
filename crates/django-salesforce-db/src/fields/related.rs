//! Foreign keys between Salesforce objects.
//!
//! A Salesforce lookup stores the related record's ID. The attribute that
//! holds the raw ID follows the naming style of the declaration (`owner` ->
//! `owner_id`, `Owner` -> `OwnerId`) and the column gets the `Id` suffix of
//! standard relations unless the relation is custom (`__c`) or its column is
//! explicit.

use std::fmt;

use django_salesforce_core::utils::text::capfirst;
use django_salesforce_core::{CheckMessage, SalesforceError};

use super::form::{FormField, FormFieldType};
use super::meta::{SfMeta, SfReadOnly};
use super::{naming, validate_presence, Field, FieldOptions};
use crate::value::Value;

/// Check id of the unsupported `on_delete` warning.
pub const UNSUPPORTED_ON_DELETE: &str = "salesforce.W001";

/// Behavior requested when a referenced record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OnDelete {
    /// Delete all related records.
    Cascade,
    /// Prevent deletion while related records exist.
    Protect,
    /// Prevent deletion, checked at the database level.
    Restrict,
    /// Set the reference to null.
    SetNull,
    /// Set the reference to its default value.
    SetDefault,
    /// Leave related records alone.
    DoNothing,
}

impl OnDelete {
    /// Whether the policy can be honored against Salesforce.
    ///
    /// Salesforce does not cascade deletes for most standard relations
    /// (`Owner`, `CreatedBy`, ...) and deletes some children on its own
    /// (`CampaignMember`), so only the policies that leave the decision to
    /// Salesforce are supported.
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Protect | Self::DoNothing)
    }
}

impl fmt::Display for OnDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cascade => "CASCADE",
            Self::Protect => "PROTECT",
            Self::Restrict => "RESTRICT",
            Self::SetNull => "SET_NULL",
            Self::SetDefault => "SET_DEFAULT",
            Self::DoNothing => "DO_NOTHING",
        };
        f.write_str(name)
    }
}

/// A reference to another Salesforce object.
///
/// # Examples
///
/// ```
/// use django_salesforce_db::fields::{Field, ForeignKey, OnDelete};
///
/// let owner = ForeignKey::new("owner", "User", OnDelete::DoNothing);
/// assert_eq!(owner.attname_column(), ("owner_id".to_string(), "OwnerId".to_string()));
/// assert!(owner.warnings().is_empty());
///
/// let account = ForeignKey::new("account", "Account", OnDelete::Cascade);
/// assert_eq!(account.warnings().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ForeignKey {
    name: String,
    to: String,
    on_delete: OnDelete,
    related_name: Option<String>,
    options: FieldOptions,
    sf: SfMeta,
    warnings: Vec<CheckMessage>,
}

impl ForeignKey {
    /// Creates a foreign key to `to`.
    ///
    /// Policies other than PROTECT and DO_NOTHING are accepted as given but
    /// produce one warning, logged and kept in [`Field::warnings`].
    pub fn new(name: impl Into<String>, to: impl Into<String>, on_delete: OnDelete) -> Self {
        let name = name.into();
        let to = to.into();
        let mut warnings = Vec::new();
        if !on_delete.is_supported() {
            let msg = format!(
                "Only foreign keys with on_delete = PROTECT or DO_NOTHING are currently supported, not {on_delete} related to {to}"
            );
            tracing::warn!(field = %name, related_model = %to, %on_delete, "{msg}");
            warnings.push(CheckMessage::warning(
                msg,
                Some("Use on_delete=PROTECT or DO_NOTHING; Salesforce decides which related records are deleted."),
                Some(&name),
                Some(UNSUPPORTED_ON_DELETE),
            ));
        }
        Self {
            name,
            to,
            on_delete,
            related_name: None,
            options: FieldOptions::new(),
            sf: SfMeta::default(),
            warnings,
        }
    }

    /// The referenced model.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The requested deletion policy.
    pub const fn on_delete(&self) -> OnDelete {
        self.on_delete
    }

    /// The reverse accessor name, if set.
    pub fn related_name(&self) -> Option<&str> {
        self.related_name.as_deref()
    }

    /// Sets the reverse accessor name.
    #[must_use]
    pub fn with_related_name(mut self, related_name: impl Into<String>) -> Self {
        self.related_name = Some(related_name.into());
        self
    }

    /// Sets the verbose (human-readable) name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.options.verbose_name = Some(name.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.options.help_text = text.into();
        self
    }

    /// Sets the write eligibility.
    #[must_use]
    pub fn sf_read_only(mut self, sf_read_only: SfReadOnly) -> Self {
        self.sf.sf_read_only = sf_read_only;
        self
    }

    /// Marks the relation as a Salesforce custom relation (`__c`).
    #[must_use]
    pub fn custom(mut self) -> Self {
        self.sf.sf_custom = true;
        self
    }

    /// Sets an explicit column name.
    #[must_use]
    pub fn db_column(mut self, column: impl Into<String>) -> Self {
        self.sf.db_column = Some(column.into());
        self
    }

    /// Allows a missing reference.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.options.null = true;
        self.options.blank = true;
        self
    }
}

impl Field for ForeignKey {
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
        "ForeignKey"
    }

    fn description(&self) -> String {
        format!("Foreign Key (type determined by related field) to {}", self.to)
    }

    fn attname(&self) -> String {
        naming::relation_attname(&self.name)
    }

    fn attname_column(&self) -> (String, String) {
        let column =
            naming::relation_column_name(&self.name, self.sf.db_column.as_deref(), self.sf.sf_custom);
        tracing::trace!(field = %self.name, column = %column, "computed Salesforce relation column");
        (self.attname(), column)
    }

    fn empty_strings_allowed(&self) -> bool {
        false
    }

    fn to_python(&self, value: &Value) -> Result<Value, SalesforceError> {
        Ok(match value {
            Value::Null | Value::String(_) => value.clone(),
            other => Value::String(other.to_string()),
        })
    }

    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        validate_presence(&self.options, value)
    }

    fn formfield(&self) -> Option<FormField> {
        Some(
            FormField::new(
                FormFieldType::ModelChoice {
                    to: self.to.clone(),
                },
                capfirst(&self.display_name()),
            )
            .required(!self.options.blank)
            .help_text(self.options.help_text.clone()),
        )
    }

    fn is_relation(&self) -> bool {
        true
    }

    fn related_model(&self) -> Option<&str> {
        Some(&self.to)
    }

    fn warnings(&self) -> &[CheckMessage] {
        &self.warnings
    }
}
