//! Salesforce column naming.
//!
//! Attribute names are mapped onto Salesforce API names:
//!
//! 1. An explicit `db_column` is used verbatim.
//! 2. A name that is not entirely lower-case (`LastName`) is already a
//!    Salesforce name and is kept.
//! 3. A lower-case name (`last_name`) is title-cased and its underscores are
//!    removed (`LastName`).
//! 4. Custom fields get the `__c` suffix after step 2 or 3.
//!
//! Foreign keys additionally get an `Id` suffix on the column, unless the
//! column is explicit or the relation is custom.

use django_salesforce_core::utils::text::{is_lower, title_case};

/// Suffix Salesforce uses for user-defined fields and relations.
pub const CUSTOM_SUFFIX: &str = "__c";

/// Suffix for standard relation columns (`Owner` -> `OwnerId`).
pub const RELATION_SUFFIX: &str = "Id";

/// Derives the Salesforce base column name from an attribute name.
///
/// # Examples
///
/// ```
/// use django_salesforce_db::fields::naming::base_column_name;
///
/// assert_eq!(base_column_name("email_bounced_reason"), "EmailBouncedReason");
/// assert_eq!(base_column_name("LastName"), "LastName");
/// ```
pub fn base_column_name(name: &str) -> String {
    if is_lower(name) {
        title_case(name).replace('_', "")
    } else {
        name.to_string()
    }
}

/// Computes the column name of a scalar field.
///
/// # Examples
///
/// ```
/// use django_salesforce_db::fields::naming::column_name;
///
/// assert_eq!(column_name("my_field", None, true), "MyField__c");
/// assert_eq!(column_name("my_field", Some("Other__c"), false), "Other__c");
/// ```
pub fn column_name(name: &str, db_column: Option<&str>, custom: bool) -> String {
    if let Some(column) = db_column {
        return column.to_string();
    }
    let mut column = base_column_name(name);
    if custom {
        column.push_str(CUSTOM_SUFFIX);
    }
    column
}

/// Computes the model attribute that holds a relation's raw identifier.
///
/// Lower-case names follow the `_id` convention, Salesforce-style names the
/// `Id` convention (`Owner` -> `OwnerId`).
pub fn relation_attname(name: &str) -> String {
    if is_lower(name) {
        format!("{name}_id")
    } else {
        format!("{name}{RELATION_SUFFIX}")
    }
}

/// Computes the column name of a relation field.
pub fn relation_column_name(name: &str, db_column: Option<&str>, custom: bool) -> String {
    let mut column = column_name(name, db_column, custom);
    if db_column.is_none() && !custom {
        column.push_str(RELATION_SUFFIX);
    }
    column
}
