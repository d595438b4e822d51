//! Typed scalar fields with Salesforce metadata.
//!
//! Each scalar field is an [`SfField`] parameterized by a kind marker from
//! [`kinds`]. The marker selects the parsing, validation, and form behavior
//! of the matching host-framework field through the [`ScalarKind`] table; the
//! Salesforce behavior (column naming, `sf_read_only`, `custom`) is shared.
//!
//! ```
//! use django_salesforce_db::fields::{CharField, Field, NOT_CREATEABLE};
//!
//! let reason = CharField::new("email_bounced_reason")
//!     .max_length(255)
//!     .sf_read_only(NOT_CREATEABLE);
//! assert_eq!(reason.column(), "EmailBouncedReason");
//! ```

use std::fmt;
use std::marker::PhantomData;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use django_salesforce_core::utils::text::capfirst;
use django_salesforce_core::{CheckMessage, SalesforceError, ValidationError};

use super::form::{FormField, FormFieldType};
use super::meta::{SfMeta, SfReadOnly};
use super::{naming, validate_presence, Field, FieldOptions};
use crate::validators::{
    DecimalValidator, EmailValidator, MaxLengthValidator, MaxValueValidator, MinValueValidator,
    UrlValidator, Validator,
};
use crate::value::Value;

/// The scalar value kinds a Salesforce field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Short text with a maximum length.
    Char,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Long text.
    Text,
    /// 32-bit integer.
    Integer,
    /// 16-bit integer.
    SmallInteger,
    /// Checkbox.
    Boolean,
    /// Fixed-point number (also used for currency and percent).
    Decimal,
    /// Date and time.
    DateTime,
    /// Date.
    Date,
    /// Time of day.
    Time,
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

impl ScalarKind {
    /// The host framework's internal type name.
    pub const fn internal_type(self) -> &'static str {
        match self {
            Self::Char => "CharField",
            Self::Email => "EmailField",
            Self::Url => "URLField",
            Self::Text => "TextField",
            Self::Integer => "IntegerField",
            Self::SmallInteger => "SmallIntegerField",
            Self::Boolean => "BooleanField",
            Self::Decimal => "DecimalField",
            Self::DateTime => "DateTimeField",
            Self::Date => "DateField",
            Self::Time => "TimeField",
        }
    }

    /// A human-readable description of the kind.
    pub fn description(self, options: &FieldOptions) -> String {
        match self {
            Self::Char => match options.max_length {
                Some(n) => format!("String (up to {n})"),
                None => "String (unlimited)".to_string(),
            },
            Self::Email => "Email address".to_string(),
            Self::Url => "URL".to_string(),
            Self::Text => "Text".to_string(),
            Self::Integer => "Integer".to_string(),
            Self::SmallInteger => "Small integer".to_string(),
            Self::Boolean => "Boolean (Either True or False)".to_string(),
            Self::Decimal => "Decimal number".to_string(),
            Self::DateTime => "Date (with time)".to_string(),
            Self::Date => "Date (without time)".to_string(),
            Self::Time => "Time".to_string(),
        }
    }

    /// The `max_length` used when none is given.
    pub const fn default_max_length(self) -> Option<usize> {
        match self {
            Self::Email => Some(254),
            Self::Url => Some(200),
            _ => None,
        }
    }

    /// Whether the empty string is a legal value of this kind.
    pub const fn empty_strings_allowed(self) -> bool {
        matches!(self, Self::Char | Self::Email | Self::Url | Self::Text)
    }

    /// The integer range of the kind, if it is an integer kind.
    pub fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            Self::Integer => Some((i64::from(i32::MIN), i64::from(i32::MAX))),
            Self::SmallInteger => Some((i64::from(i16::MIN), i64::from(i16::MAX))),
            _ => None,
        }
    }

    /// Coerces a raw value into this kind. `Null` always passes through.
    pub fn to_python(self, value: &Value) -> Result<Value, SalesforceError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match self {
            Self::Char | Self::Email | Self::Url | Self::Text => Ok(match value {
                Value::String(_) => value.clone(),
                other => Value::String(other.to_string()),
            }),
            Self::Integer | Self::SmallInteger => to_integer(value),
            Self::Boolean => to_boolean(value),
            Self::Decimal => to_decimal(value),
            Self::DateTime => to_datetime(value),
            Self::Date => to_date(value),
            Self::Time => to_time(value),
        }
    }

    /// The validators every field of this kind runs.
    pub fn default_validators(self, options: &FieldOptions) -> Vec<Box<dyn Validator>> {
        let mut validators: Vec<Box<dyn Validator>> = Vec::new();
        if matches!(self, Self::Char | Self::Email | Self::Url) {
            if let Some(max_length) = options.max_length {
                validators.push(Box::new(MaxLengthValidator::new(max_length)));
            }
        }
        match self {
            Self::Email => validators.push(Box::new(EmailValidator)),
            Self::Url => validators.push(Box::new(UrlValidator)),
            Self::Decimal => validators.push(Box::new(DecimalValidator::new(
                options.max_digits,
                options.decimal_places,
            ))),
            _ => {}
        }
        if let Some((min, max)) = self.integer_range() {
            validators.push(Box::new(MinValueValidator::new(min)));
            validators.push(Box::new(MaxValueValidator::new(max)));
        }
        validators
    }

    /// The form input used for this kind.
    pub fn formfield_type(self, options: &FieldOptions) -> FormFieldType {
        match self {
            Self::Char => FormFieldType::Char {
                max_length: options.max_length,
            },
            Self::Email => FormFieldType::Email {
                max_length: options.max_length,
            },
            Self::Url => FormFieldType::Url {
                max_length: options.max_length,
            },
            Self::Text => FormFieldType::Text,
            Self::Integer | Self::SmallInteger => {
                let range = self.integer_range();
                FormFieldType::Integer {
                    min_value: range.map(|(min, _)| min),
                    max_value: range.map(|(_, max)| max),
                }
            }
            Self::Boolean if options.null => FormFieldType::NullBoolean,
            Self::Boolean => FormFieldType::Boolean,
            Self::Decimal => FormFieldType::Decimal {
                max_digits: options.max_digits,
                decimal_places: options.decimal_places,
            },
            Self::DateTime => FormFieldType::DateTime,
            Self::Date => FormFieldType::Date,
            Self::Time => FormFieldType::Time,
        }
    }
}

fn invalid(value: &Value, message: String) -> SalesforceError {
    ValidationError::new(message, "invalid")
        .with_param("value", value.to_string())
        .into()
}

fn to_integer(value: &Value) -> Result<Value, SalesforceError> {
    let parsed = match value {
        Value::Int(i) => Some(*i),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
        Value::String(s) | Value::Decimal(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .map(Value::Int)
        .ok_or_else(|| invalid(value, format!("“{value}” value must be an integer.")))
}

fn to_boolean(value: &Value) -> Result<Value, SalesforceError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Int(1) => Some(true),
        Value::Int(0) => Some(false),
        Value::String(s) => match s.as_str() {
            "t" | "True" | "true" | "1" => Some(true),
            "f" | "False" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.map(Value::Bool).ok_or_else(|| {
        invalid(
            value,
            format!("“{value}” value must be either True or False."),
        )
    })
}

/// Returns the trimmed text if it is a plain decimal literal (`-12.50`, `.5`, `3.`).
fn parse_decimal(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix(['-', '+'])
        .unwrap_or(trimmed);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    (all_digits(whole) && all_digits(fraction)).then(|| trimmed.to_string())
}

fn to_decimal(value: &Value) -> Result<Value, SalesforceError> {
    let parsed = match value {
        Value::Decimal(_) => return Ok(value.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) if f.is_finite() => Some(f.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    };
    parsed
        .map(Value::Decimal)
        .ok_or_else(|| invalid(value, format!("“{value}” value must be a decimal number.")))
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    // Salesforce API format, e.g. 2024-01-15T12:30:00.000+0000
    if let Ok(dt) = chrono::DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn to_datetime(value: &Value) -> Result<Value, SalesforceError> {
    let parsed = match value {
        Value::DateTime(_) => return Ok(value.clone()),
        Value::Date(d) => d.and_hms_opt(0, 0, 0),
        Value::String(s) => parse_datetime(s),
        _ => None,
    };
    parsed.map(Value::DateTime).ok_or_else(|| {
        invalid(
            value,
            format!(
                "“{value}” value has an invalid format. It must be in YYYY-MM-DD HH:MM[:ss[.uuuuuu]][TZ] format."
            ),
        )
    })
}

fn to_date(value: &Value) -> Result<Value, SalesforceError> {
    let parsed = match value {
        Value::Date(_) => return Ok(value.clone()),
        Value::DateTime(dt) => Some(dt.date()),
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    };
    parsed.map(Value::Date).ok_or_else(|| {
        invalid(
            value,
            format!(
                "“{value}” value has an invalid date format. It must be in YYYY-MM-DD format."
            ),
        )
    })
}

fn to_time(value: &Value) -> Result<Value, SalesforceError> {
    let parsed = match value {
        Value::Time(_) => return Ok(value.clone()),
        Value::DateTime(dt) => Some(dt.time()),
        Value::String(s) => {
            // Salesforce sends times as 12:30:00.000Z
            let text = s.trim();
            let text = text.strip_suffix('Z').unwrap_or(text);
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
        }
        _ => None,
    };
    parsed.map(Value::Time).ok_or_else(|| {
        invalid(
            value,
            format!(
                "“{value}” value has an invalid format. It must be in HH:MM[:ss[.uuuuuu]] format."
            ),
        )
    })
}

/// Tags a marker type with its [`ScalarKind`].
pub trait ScalarType: fmt::Debug + Send + Sync + 'static {
    /// The kind this marker selects.
    const KIND: ScalarKind;
}

/// Kind markers for [`SfField`].
pub mod kinds {
    use super::{ScalarKind, ScalarType};

    macro_rules! scalar_kinds {
        ($($marker:ident => $kind:ident),* $(,)?) => {
            $(
                #[doc = concat!("Marker selecting [`ScalarKind::", stringify!($kind), "`].")]
                #[derive(Debug, Clone, Copy, Default)]
                pub struct $marker;

                impl ScalarType for $marker {
                    const KIND: ScalarKind = ScalarKind::$kind;
                }
            )*
        };
    }

    scalar_kinds! {
        Char => Char,
        Email => Email,
        Url => Url,
        Text => Text,
        Integer => Integer,
        SmallInteger => SmallInteger,
        Boolean => Boolean,
        Decimal => Decimal,
        DateTime => DateTime,
        Date => Date,
        Time => Time,
    }
}

/// Text field.
pub type CharField = SfField<kinds::Char>;
/// Email address field.
pub type EmailField = SfField<kinds::Email>;
/// URL field.
pub type UrlField = SfField<kinds::Url>;
/// Long text area field.
pub type TextField = SfField<kinds::Text>;
/// 32-bit integer field.
pub type IntegerField = SfField<kinds::Integer>;
/// 16-bit integer field.
pub type SmallIntegerField = SfField<kinds::SmallInteger>;
/// Checkbox field.
pub type BooleanField = SfField<kinds::Boolean>;
/// Number, currency, or percent field.
pub type DecimalField = SfField<kinds::Decimal>;
/// Date/time field.
pub type DateTimeField = SfField<kinds::DateTime>;
/// Date field.
pub type DateField = SfField<kinds::Date>;
/// Time field.
pub type TimeField = SfField<kinds::Time>;

/// A scalar model field mapped onto a Salesforce column.
#[derive(Debug)]
pub struct SfField<K: ScalarType> {
    name: String,
    options: FieldOptions,
    sf: SfMeta,
    validators: Vec<Box<dyn Validator>>,
    kind: PhantomData<K>,
}

impl<K: ScalarType> SfField<K> {
    /// Creates a fully writable standard field with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, FieldOptions::new())
    }

    /// Creates a field from explicit options.
    pub fn with_options(name: impl Into<String>, mut options: FieldOptions) -> Self {
        if options.max_length.is_none() {
            options.max_length = K::KIND.default_max_length();
        }
        Self {
            name: name.into(),
            options,
            sf: SfMeta::default(),
            validators: Vec::new(),
            kind: PhantomData,
        }
    }

    /// The scalar kind of this field.
    pub const fn kind(&self) -> ScalarKind {
        K::KIND
    }

    /// Sets the Salesforce metadata in one go.
    #[must_use]
    pub fn salesforce(mut self, sf: SfMeta) -> Self {
        self.sf = sf;
        self
    }

    /// Sets the write eligibility.
    #[must_use]
    pub fn sf_read_only(mut self, sf_read_only: SfReadOnly) -> Self {
        self.sf.sf_read_only = sf_read_only;
        self
    }

    /// Marks the field as a Salesforce custom field (`__c` suffix).
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

    /// Sets the maximum character length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.options.max_length = Some(max_length);
        self
    }

    /// Sets decimal precision.
    #[must_use]
    pub fn decimal(mut self, max_digits: u32, decimal_places: u32) -> Self {
        self.options = self.options.decimal(max_digits, decimal_places);
        self
    }

    /// Allows missing values.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.options.null = true;
        self
    }

    /// Allows blank values in forms.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.options.blank = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.options.default = Some(value.into());
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

    /// Adds a validator run after the kind's own validators.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl<K: ScalarType> Field for SfField<K> {
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
        K::KIND.internal_type()
    }

    fn description(&self) -> String {
        K::KIND.description(&self.options)
    }

    fn attname_column(&self) -> (String, String) {
        let column = naming::column_name(&self.name, self.sf.db_column.as_deref(), self.sf.sf_custom);
        tracing::trace!(field = %self.name, column = %column, "computed Salesforce column");
        (self.attname(), column)
    }

    fn empty_strings_allowed(&self) -> bool {
        K::KIND.empty_strings_allowed()
    }

    fn to_python(&self, value: &Value) -> Result<Value, SalesforceError> {
        K::KIND.to_python(value)
    }

    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        validate_presence(&self.options, value)?;
        if matches!(value, Value::Null) || value.as_str() == Some("") {
            return Ok(());
        }
        for validator in K::KIND
            .default_validators(&self.options)
            .iter()
            .chain(self.validators.iter())
        {
            if let Err(err) = validator.validate(value) {
                tracing::debug!(
                    field = %self.name,
                    validator = validator.name(),
                    "value rejected by validator"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    fn formfield(&self) -> Option<FormField> {
        let required = !self.options.blank && K::KIND != ScalarKind::Boolean;
        Some(
            FormField::new(
                K::KIND.formfield_type(&self.options),
                capfirst(&self.display_name()),
            )
            .required(required)
            .help_text(self.options.help_text.clone()),
        )
    }

    fn check(&self) -> Vec<CheckMessage> {
        let mut messages = self.warnings().to_vec();
        let obj = Some(self.name.as_str());
        match K::KIND {
            ScalarKind::Char if self.options.max_length.is_none() => {
                messages.push(CheckMessage::error(
                    "CharFields must define a 'max_length' attribute.",
                    None,
                    obj,
                    Some("fields.E120"),
                ));
            }
            ScalarKind::Decimal => {
                if self.options.max_digits.is_none() {
                    messages.push(CheckMessage::error(
                        "DecimalFields must define a 'max_digits' attribute.",
                        None,
                        obj,
                        Some("fields.E132"),
                    ));
                }
                if self.options.decimal_places.is_none() {
                    messages.push(CheckMessage::error(
                        "DecimalFields must define a 'decimal_places' attribute.",
                        None,
                        obj,
                        Some("fields.E130"),
                    ));
                }
                if let (Some(digits), Some(places)) =
                    (self.options.max_digits, self.options.decimal_places)
                {
                    if places > digits {
                        messages.push(CheckMessage::error(
                            "'max_digits' must be greater or equal to 'decimal_places'.",
                            None,
                            obj,
                            Some("fields.E134"),
                        ));
                    }
                }
            }
            _ => {}
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{NOT_CREATEABLE, READ_ONLY};

    fn error_code(result: Result<impl fmt::Debug, SalesforceError>) -> String {
        match result {
            Err(SalesforceError::ValidationError(e)) => e.code,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_column_from_lower_case_name() {
        let f = CharField::new("email_bounced_reason").max_length(255);
        assert_eq!(f.attname_column(), ("email_bounced_reason".into(), "EmailBouncedReason".into()));
    }

    #[test]
    fn test_column_from_salesforce_name() {
        let f = CharField::new("LastName").max_length(80);
        assert_eq!(f.column(), "LastName");
        assert_eq!(f.attname(), "LastName");
    }

    #[test]
    fn test_custom_column() {
        let f = DecimalField::new("my_field").decimal(18, 2).custom();
        assert_eq!(f.column(), "MyField__c");
        assert!(f.sf_meta().sf_custom);
    }

    #[test]
    fn test_explicit_column() {
        let f = TextField::new("notes").custom().db_column("Notes_Legacy__c");
        assert_eq!(f.column(), "Notes_Legacy__c");
    }

    #[test]
    fn test_sf_read_only_default_and_set() {
        let f = IntegerField::new("n");
        assert_eq!(f.sf_meta().sf_read_only, SfReadOnly::FullWritable);
        let f = DateTimeField::new("LastModifiedDate").sf_read_only(READ_ONLY);
        assert_eq!(f.sf_meta().sf_read_only, READ_ONLY);
        let f = CharField::new("x").salesforce(SfMeta::new().sf_read_only(NOT_CREATEABLE));
        assert_eq!(f.sf_meta().sf_read_only, NOT_CREATEABLE);
    }

    #[test]
    fn test_internal_types() {
        assert_eq!(CharField::new("a").internal_type(), "CharField");
        assert_eq!(EmailField::new("a").internal_type(), "EmailField");
        assert_eq!(UrlField::new("a").internal_type(), "URLField");
        assert_eq!(TextField::new("a").internal_type(), "TextField");
        assert_eq!(IntegerField::new("a").internal_type(), "IntegerField");
        assert_eq!(SmallIntegerField::new("a").internal_type(), "SmallIntegerField");
        assert_eq!(BooleanField::new("a").internal_type(), "BooleanField");
        assert_eq!(DecimalField::new("a").internal_type(), "DecimalField");
        assert_eq!(DateTimeField::new("a").internal_type(), "DateTimeField");
        assert_eq!(DateField::new("a").internal_type(), "DateField");
        assert_eq!(TimeField::new("a").internal_type(), "TimeField");
    }

    #[test]
    fn test_default_max_lengths() {
        assert_eq!(EmailField::new("email").options().max_length, Some(254));
        assert_eq!(UrlField::new("website").options().max_length, Some(200));
        assert_eq!(CharField::new("name").options().max_length, None);
        let f = EmailField::with_options("email", FieldOptions::new().max_length(80));
        assert_eq!(f.options().max_length, Some(80));
    }

    #[test]
    fn test_char_to_python() {
        let f = CharField::new("name").max_length(10);
        assert_eq!(f.to_python(&Value::Int(42)).unwrap(), Value::String("42".into()));
        assert_eq!(f.to_python(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_char_validation() {
        let f = CharField::new("name").max_length(5);
        assert!(f.clean(&Value::from("Acme")).is_ok());
        assert_eq!(error_code(f.clean(&Value::from("Acme Corp"))), "max_length");
        assert_eq!(error_code(f.clean(&Value::from(""))), "blank");
        assert!(CharField::new("name").max_length(5).blank().clean(&Value::from("")).is_ok());
    }

    #[test]
    fn test_email_and_url_validation() {
        let email = EmailField::new("email");
        assert!(email.clean(&Value::from("jane@example.com")).is_ok());
        assert_eq!(error_code(email.clean(&Value::from("jane"))), "invalid");

        let url = UrlField::new("website");
        assert!(url.clean(&Value::from("https://example.com")).is_ok());
        assert_eq!(error_code(url.clean(&Value::from("example"))), "invalid");
    }

    #[test]
    fn test_integer_to_python() {
        let f = IntegerField::new("employees");
        assert_eq!(f.to_python(&Value::from(" 42 ")).unwrap(), Value::Int(42));
        assert_eq!(f.to_python(&Value::Float(3.0)).unwrap(), Value::Int(3));
        assert_eq!(f.to_python(&Value::Bool(true)).unwrap(), Value::Int(1));
        assert_eq!(error_code(f.to_python(&Value::Float(3.5))), "invalid");
        assert_eq!(error_code(f.to_python(&Value::from("many"))), "invalid");
    }

    #[test]
    fn test_integer_ranges() {
        let f = IntegerField::new("n");
        assert!(f.clean(&Value::Int(2_147_483_647)).is_ok());
        assert_eq!(error_code(f.clean(&Value::Int(2_147_483_648))), "max_value");

        let f = SmallIntegerField::new("n");
        assert!(f.clean(&Value::Int(-32_768)).is_ok());
        assert_eq!(error_code(f.clean(&Value::Int(40_000))), "max_value");
    }

    #[test]
    fn test_boolean_to_python() {
        let f = BooleanField::new("IsDeleted");
        assert_eq!(f.to_python(&Value::from("true")).unwrap(), Value::Bool(true));
        assert_eq!(f.to_python(&Value::from("f")).unwrap(), Value::Bool(false));
        assert_eq!(f.to_python(&Value::Int(1)).unwrap(), Value::Bool(true));
        assert_eq!(error_code(f.to_python(&Value::Int(2))), "invalid");
        assert_eq!(error_code(f.to_python(&Value::from("yes please"))), "invalid");
    }

    #[test]
    fn test_decimal_to_python() {
        let f = DecimalField::new("amount").decimal(18, 2);
        assert_eq!(f.to_python(&Value::from(" 12.50 ")).unwrap(), Value::Decimal("12.50".into()));
        assert_eq!(f.to_python(&Value::Int(7)).unwrap(), Value::Decimal("7".into()));
        assert_eq!(f.to_python(&Value::Float(0.25)).unwrap(), Value::Decimal("0.25".into()));
        assert_eq!(error_code(f.to_python(&Value::from("1e5"))), "invalid");
        assert_eq!(error_code(f.to_python(&Value::from("."))), "invalid");
        assert_eq!(error_code(f.clean(&Value::from("1.234"))), "max_decimal_places");
    }

    #[test]
    fn test_datetime_to_python() {
        let f = DateTimeField::new("CreatedDate");
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(
            f.to_python(&Value::from("2024-01-15T12:30:00.000+0000")).unwrap(),
            Value::DateTime(expected)
        );
        assert_eq!(
            f.to_python(&Value::from("2024-01-15T14:30:00+02:00")).unwrap(),
            Value::DateTime(expected)
        );
        assert_eq!(
            f.to_python(&Value::from("2024-01-15 12:30")).unwrap(),
            Value::DateTime(expected)
        );
        assert!(f.to_python(&Value::from("yesterday")).is_err());
    }

    #[test]
    fn test_date_and_time_to_python() {
        let d = DateField::new("Birthdate");
        assert_eq!(
            d.to_python(&Value::from("1990-05-17")).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap())
        );
        assert!(d.to_python(&Value::from("17/05/1990")).is_err());

        let t = TimeField::new("StartTime");
        let expected = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        assert_eq!(t.to_python(&Value::from("12:30:00.000Z")).unwrap(), Value::Time(expected));
        assert_eq!(t.to_python(&Value::from("12:30")).unwrap(), Value::Time(expected));
    }

    #[test]
    fn test_null_handling() {
        let f = DateField::new("Birthdate").nullable().blank();
        assert_eq!(f.clean(&Value::Null).unwrap(), Value::Null);
        assert_eq!(error_code(DateField::new("d").clean(&Value::Null)), "null");
    }

    #[test]
    fn test_extra_validator() {
        let f = IntegerField::new("score").validator(MaxValueValidator::new(100));
        assert!(f.clean(&Value::Int(100)).is_ok());
        assert_eq!(error_code(f.clean(&Value::Int(101))), "max_value");
    }

    #[test]
    fn test_formfield() {
        let f = CharField::new("first_name").max_length(40).help_text("Given name");
        let form = f.formfield().unwrap();
        assert_eq!(form.field_type, FormFieldType::Char { max_length: Some(40) });
        assert_eq!(form.label, "First name");
        assert!(form.required);
        assert_eq!(form.help_text, "Given name");

        let flag = BooleanField::new("do_not_call").formfield().unwrap();
        assert_eq!(flag.field_type, FormFieldType::Boolean);
        assert!(!flag.required);

        let maybe = BooleanField::new("opt_in").nullable().formfield().unwrap();
        assert_eq!(maybe.field_type, FormFieldType::NullBoolean);
    }

    #[test]
    fn test_description() {
        assert_eq!(CharField::new("a").max_length(80).description(), "String (up to 80)");
        assert_eq!(DateTimeField::new("a").description(), "Date (with time)");
    }

    #[test]
    fn test_checks() {
        fn ids(f: &dyn Field) -> Vec<String> {
            f.check().into_iter().filter_map(|m| m.id).collect()
        }
        assert_eq!(ids(&CharField::new("name")), vec!["fields.E120"]);
        assert!(ids(&CharField::new("name").max_length(80)).is_empty());
        assert_eq!(ids(&DecimalField::new("amount")), vec!["fields.E132", "fields.E130"]);
        assert_eq!(ids(&DecimalField::new("amount").decimal(2, 3)), vec!["fields.E134"]);
        assert!(ids(&DecimalField::new("amount").decimal(18, 2)).is_empty());
    }
}
