//! Integration tests for Salesforce model declarations.
//!
//! These tests declare realistic Salesforce objects and cover:
//! 1. Column naming for standard, custom, and explicit columns
//! 2. Foreign key attribute and column naming
//! 3. Salesforce ID primary keys
//! 4. Write eligibility and insert/update preparation
//! 5. Unsupported `on_delete` warnings

use django_salesforce_core::{CheckLevel, SalesforceError};
use django_salesforce_db::fields::{
    BooleanField, CharField, DateField, DateTimeField, DecimalField, EmailField, Field,
    FieldOptions, ForeignKey, FormFieldType, IntegerField, OnDelete, SalesforceAutoField,
    SfReadOnly, TextField, TimeField, UrlField, NOT_CREATEABLE, NOT_UPDATEABLE, READ_ONLY,
};
use django_salesforce_db::model::{ModelBuilder, ModelMeta};
use django_salesforce_db::value::Value;

// ============================================================================
// Shared models
// ============================================================================

fn contact() -> ModelMeta {
    ModelBuilder::new("Contact")
        .field(SalesforceAutoField::primary_key("Id"))
        .unwrap()
        .field(CharField::new("first_name").max_length(40).blank())
        .unwrap()
        .field(CharField::new("last_name").max_length(80))
        .unwrap()
        .field(CharField::new("Name").max_length(121).sf_read_only(READ_ONLY))
        .unwrap()
        .field(EmailField::new("email").nullable())
        .unwrap()
        .field(TextField::new("email_bounced_reason").nullable().sf_read_only(NOT_CREATEABLE))
        .unwrap()
        .field(CharField::new("favorite_color").max_length(40).custom().nullable())
        .unwrap()
        .field(ForeignKey::new("account", "Account", OnDelete::DoNothing).nullable())
        .unwrap()
        .field(ForeignKey::new("owner", "User", OnDelete::DoNothing))
        .unwrap()
        .field(
            ForeignKey::new("CreatedBy", "User", OnDelete::DoNothing).sf_read_only(READ_ONLY),
        )
        .unwrap()
        .field(DateTimeField::new("last_modified_date").sf_read_only(READ_ONLY))
        .unwrap()
        .build()
}

fn lead() -> ModelMeta {
    ModelBuilder::new("Lead")
        .field(SalesforceAutoField::primary_key("Id"))
        .unwrap()
        .field(CharField::new("company").max_length(255))
        .unwrap()
        .field(CharField::new("last_name").max_length(80))
        .unwrap()
        .field(IntegerField::new("number_of_employees").nullable())
        .unwrap()
        .field(DecimalField::new("annual_revenue").decimal(18, 0).nullable())
        .unwrap()
        .field(BooleanField::new("is_converted").sf_read_only(NOT_UPDATEABLE))
        .unwrap()
        .field(DateField::new("converted_date").nullable().sf_read_only(READ_ONLY))
        .unwrap()
        .field(UrlField::new("website").nullable())
        .unwrap()
        .field(TimeField::new("call_time").nullable().custom())
        .unwrap()
        .field(
            ForeignKey::new("my_lookup", "Account", OnDelete::Protect)
                .custom()
                .nullable(),
        )
        .unwrap()
        .build()
}

fn columns(meta: &ModelMeta) -> Vec<(String, String)> {
    meta.fields().map(|f| f.attname_column()).collect()
}

// ============================================================================
// 1. Column naming
// ============================================================================

#[test]
fn test_lower_case_names_are_title_cased() {
    let meta = contact();
    assert_eq!(meta.get_field("email_bounced_reason").unwrap().column(), "EmailBouncedReason");
    assert_eq!(meta.get_field("first_name").unwrap().column(), "FirstName");
    assert_eq!(meta.get_field("email").unwrap().column(), "Email");
}

#[test]
fn test_salesforce_names_are_kept() {
    let meta = contact();
    assert_eq!(meta.get_field("Name").unwrap().column(), "Name");
    assert_eq!(CharField::new("LastName").max_length(80).column(), "LastName");
    assert_eq!(CharField::new("Some_Name").max_length(80).column(), "Some_Name");
}

#[test]
fn test_custom_suffix() {
    let meta = contact();
    assert_eq!(meta.get_field("favorite_color").unwrap().column(), "FavoriteColor__c");
    assert_eq!(CharField::new("my_field").max_length(10).custom().column(), "MyField__c");
    assert_eq!(CharField::new("MyField").max_length(10).custom().column(), "MyField__c");
}

#[test]
fn test_explicit_column_wins() {
    let field = CharField::new("my_field").max_length(10).custom().db_column("Other_Name__c");
    assert_eq!(field.column(), "Other_Name__c");
    let field = CharField::new("LastName").max_length(10).db_column("lastname");
    assert_eq!(field.column(), "lastname");
}

#[test]
fn test_attnames_are_unchanged_for_scalars() {
    let meta = contact();
    let pairs = columns(&meta);
    assert!(pairs.contains(&("last_name".to_string(), "LastName".to_string())));
    assert!(pairs.contains(&("Name".to_string(), "Name".to_string())));
}

#[test]
fn test_digits_start_words() {
    assert_eq!(CharField::new("field2x").max_length(5).column(), "Field2X");
    assert_eq!(CharField::new("address_line_2").max_length(5).column(), "AddressLine2");
}

// ============================================================================
// 2. Foreign keys
// ============================================================================

#[test]
fn test_standard_relations() {
    let meta = contact();
    let owner = meta.get_field("owner").unwrap();
    assert_eq!(owner.attname_column(), ("owner_id".to_string(), "OwnerId".to_string()));
    let created_by = meta.get_field("CreatedBy").unwrap();
    assert_eq!(
        created_by.attname_column(),
        ("CreatedById".to_string(), "CreatedById".to_string())
    );
    assert_eq!(meta.get_field("account_id").unwrap().column(), "AccountId");
}

#[test]
fn test_custom_relation_column() {
    let meta = lead();
    let lookup = meta.get_field("my_lookup").unwrap();
    assert_eq!(lookup.column(), "MyLookup__c");
    assert!(!lookup.column().ends_with("Id"));
    assert_eq!(lookup.attname(), "my_lookup_id");
    assert_eq!(lookup.related_model(), Some("Account"));
}

#[test]
fn test_relation_lookup_by_column() {
    let meta = contact();
    assert_eq!(meta.get_field_by_column("OwnerId").unwrap().name(), "owner");
    assert!(meta.get_field_by_column("Owner").is_none());
}

// ============================================================================
// 3. Salesforce ID primary keys
// ============================================================================

#[test]
fn test_id_requires_primary_key() {
    let err = SalesforceAutoField::new("Id", FieldOptions::new()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_second_id_field_is_rejected() {
    let err = ModelBuilder::new("Contact")
        .field(SalesforceAutoField::primary_key("Id"))
        .unwrap()
        .field(
            SalesforceAutoField::new("LegacyId", FieldOptions::new().primary_key()).unwrap(),
        )
        .unwrap_err();
    assert!(matches!(err, SalesforceError::ImproperlyConfigured(_)));
}

#[test]
fn test_id_field_metadata() {
    let meta = contact();
    let pk = meta.pk().unwrap();
    assert_eq!(pk.column(), "Id");
    assert_eq!(pk.internal_type(), "AutoField");
    assert!(pk.formfield().is_none());
    assert_eq!(pk.clean(&Value::Int(1)).unwrap(), Value::String("1".into()));
    assert!(meta.has_auto_field());
}

// ============================================================================
// 4. Write eligibility
// ============================================================================

#[test]
fn test_read_only_codes() {
    assert_eq!(SfReadOnly::from_code(3).unwrap(), READ_ONLY);
    assert!(SfReadOnly::from_code(4).is_err());
    assert!(!READ_ONLY.is_creatable() && !READ_ONLY.is_updatable());
}

#[test]
fn test_contact_write_sets() {
    let meta = contact();
    let creatable: Vec<_> = meta.creatable_fields().iter().map(|f| f.column()).collect();
    assert_eq!(
        creatable,
        vec!["FirstName", "LastName", "Email", "FavoriteColor__c", "AccountId", "OwnerId"]
    );
    let updatable: Vec<_> = meta.updatable_fields().iter().map(|f| f.column()).collect();
    assert_eq!(
        updatable,
        vec![
            "FirstName",
            "LastName",
            "Email",
            "EmailBouncedReason",
            "FavoriteColor__c",
            "AccountId",
            "OwnerId"
        ]
    );
}

#[test]
fn test_prepare_lead_insert() {
    let meta = lead();
    let prepared = meta
        .prepare_insert(&[
            ("company", Value::from("Acme")),
            ("last_name", Value::from("Smith")),
            ("number_of_employees", Value::from("250")),
            ("annual_revenue", Value::from("1500000")),
            ("is_converted", Value::from("false")),
            ("converted_date", Value::from("2024-01-15")),
            ("call_time", Value::from("12:30:00.000Z")),
            ("my_lookup_id", Value::from("001000000000001AAA")),
        ])
        .unwrap();
    let cols: Vec<_> = prepared.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        cols,
        vec![
            "Company",
            "LastName",
            "NumberOfEmployees",
            "AnnualRevenue",
            "IsConverted",
            "CallTime__c",
            "MyLookup__c"
        ]
    );
    assert_eq!(prepared[2].1, Value::Int(250));
    assert_eq!(prepared[4].1, Value::Bool(false));
}

#[test]
fn test_prepare_lead_update_skips_not_updateable() {
    let meta = lead();
    let prepared = meta
        .prepare_update(&[("is_converted", Value::Bool(true)), ("company", Value::from("Acme"))])
        .unwrap();
    assert_eq!(prepared, vec![("Company".to_string(), Value::from("Acme"))]);
}

#[test]
fn test_typed_validation() {
    let meta = lead();
    let revenue = meta.get_field("annual_revenue").unwrap();
    assert!(revenue.clean(&Value::from("12.5")).is_err());
    assert!(revenue.clean(&Value::from("125")).is_ok());

    let website = meta.get_field("website").unwrap();
    assert!(website.clean(&Value::from("https://example.com")).is_ok());
    assert!(website.clean(&Value::from("not a url")).is_err());

    let contact = contact();
    let email = contact.get_field("email").unwrap();
    assert!(email.clean(&Value::from("someone@example.com")).is_ok());
    assert!(email.clean(&Value::from("someone")).is_err());

    let modified = contact.get_field("last_modified_date").unwrap();
    assert!(matches!(
        modified.clean(&Value::from("2024-01-15T10:30:00.000+0000")).unwrap(),
        Value::DateTime(_)
    ));
}

#[test]
fn test_form_fields() {
    let meta = lead();
    let company = meta.get_field("company").unwrap().formfield().unwrap();
    assert_eq!(company.field_type, FormFieldType::Char { max_length: Some(255) });
    assert_eq!(company.label, "Company");
    assert!(company.required);

    let lookup = meta.get_field("my_lookup").unwrap().formfield().unwrap();
    assert_eq!(lookup.field_type, FormFieldType::ModelChoice { to: "Account".into() });
    assert!(!lookup.required);
}

// ============================================================================
// 5. Unsupported on_delete
// ============================================================================

#[test]
fn test_unsupported_on_delete_warns_once() {
    let fk = ForeignKey::new("account", "Account", OnDelete::Cascade);
    assert_eq!(fk.warnings().len(), 1);
    let warning = &fk.warnings()[0];
    assert_eq!(warning.level, CheckLevel::Warning);
    assert!(warning.msg.contains("CASCADE"));
    assert!(warning.msg.contains("Account"));

    let meta = ModelBuilder::new("Contact")
        .strict_foreign_keys(false)
        .field(SalesforceAutoField::primary_key("Id"))
        .unwrap()
        .field(fk)
        .unwrap()
        .build();
    assert_eq!(meta.check().len(), 1);
    let account = meta.get_field("account").unwrap();
    assert_eq!(account.column(), "AccountId");
}

#[test]
fn test_strict_mode_rejects_unsupported_on_delete() {
    let err = ModelBuilder::new("Contact")
        .strict_foreign_keys(true)
        .field(ForeignKey::new("account", "Account", OnDelete::SetDefault))
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_declared_models_pass_checks() {
    assert!(contact().check().is_empty());
    assert!(lead().check().is_empty());
}
