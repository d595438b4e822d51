//! # django-salesforce
//!
//! Salesforce model fields for the django-rs ORM.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Declare a model by feeding Salesforce-aware fields to a
//! [`ModelBuilder`](db::ModelBuilder):
//!
//! ```
//! use django_salesforce::prelude::*;
//!
//! let contact = ModelBuilder::new("Contact")
//!     .field(SalesforceAutoField::primary_key("Id"))?
//!     .field(CharField::new("last_name").max_length(80))?
//!     .field(CharField::new("favorite_color").max_length(40).custom())?
//!     .field(ForeignKey::new("owner", "User", OnDelete::DoNothing))?
//!     .build();
//!
//! assert_eq!(
//!     contact.columns(),
//!     vec!["Id", "LastName", "FavoriteColor__c", "OwnerId"]
//! );
//! # Ok::<(), SalesforceError>(())
//! ```

/// Errors, settings, logging, and check messages.
pub use django_salesforce_core as core;

/// Salesforce fields, values, validators, and the model registry.
pub use django_salesforce_db as db;

// Third-party re-exports for user convenience
pub use chrono;
pub use serde_json;
pub use tracing;

use django_salesforce_core::{Settings, SETTINGS};

/// Configures the global settings and installs the logging subscriber.
///
/// Subsequent calls keep the first settings and are logged.
pub fn setup(settings: Settings) {
    django_salesforce_core::logging::setup_logging(&settings);
    if SETTINGS.try_configure(settings).is_err() {
        tracing::warn!("django-salesforce settings are already configured; ignoring new settings");
        return;
    }
    tracing::debug!("django-salesforce configured");
}

/// The types needed to declare Salesforce models.
pub mod prelude {
    pub use django_salesforce_core::{CheckMessage, SalesforceError, SalesforceResult, Settings};
    pub use django_salesforce_db::fields::{
        AutoField, BooleanField, CharField, DateField, DateTimeField, DecimalField, EmailField,
        Field, FieldOptions, ForeignKey, IntegerField, OnDelete, SalesforceAutoField, SfMeta,
        SfReadOnly, SmallIntegerField, TextField, TimeField, UrlField, FULL_WRITABLE,
        NOT_CREATEABLE, NOT_UPDATEABLE, READ_ONLY,
    };
    pub use django_salesforce_db::model::{ModelBuilder, ModelMeta};
    pub use django_salesforce_db::value::Value;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_setup_is_idempotent() {
        super::setup(Settings::default());
        super::setup(Settings {
            strict_foreign_keys: true,
            ..Settings::default()
        });
        assert!(!super::SETTINGS.get().strict_foreign_keys);
    }

    #[test]
    fn test_prelude_declares_models() {
        let meta = ModelBuilder::new("Lead")
            .field(SalesforceAutoField::primary_key("Id"))
            .unwrap()
            .field(CharField::new("company").max_length(255))
            .unwrap()
            .build();
        assert_eq!(meta.get_field("company").unwrap().column(), "Company");
    }
}
