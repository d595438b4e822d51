//! Field validators.
//!
//! Each scalar field kind attaches the validators its host-framework
//! counterpart uses (length limits, integer ranges, email and URL syntax,
//! decimal digit counts). Validators ignore values of a type they do not
//! understand; type errors are the job of `to_python`.

use std::fmt;
use std::sync::OnceLock;

use django_salesforce_core::{SalesforceError, ValidationError};
use regex::Regex;

use crate::value::Value;

/// A trait for validating field values.
///
/// # Examples
///
/// ```
/// use django_salesforce_db::validators::{Validator, MaxLengthValidator};
/// use django_salesforce_db::value::Value;
///
/// let v = MaxLengthValidator::new(5);
/// assert!(v.validate(&Value::String("hi".into())).is_ok());
/// assert!(v.validate(&Value::String("toolong".into())).is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the given value, returning an error if invalid.
    fn validate(&self, value: &Value) -> Result<(), SalesforceError>;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

fn invalid(message: String, code: &str) -> SalesforceError {
    SalesforceError::ValidationError(ValidationError::new(message, code))
}

/// Validates that a string value does not exceed a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    /// The maximum allowed length.
    pub max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator` with the given maximum length.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        if let Value::String(s) = value {
            let len = s.chars().count();
            if len > self.max_length {
                return Err(invalid(
                    format!(
                        "Ensure this value has at most {} characters (it has {len}).",
                        self.max_length
                    ),
                    "max_length",
                ));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MaxLengthValidator"
    }
}

/// Validates that an integer value is not below a minimum.
#[derive(Debug, Clone)]
pub struct MinValueValidator {
    /// The minimum allowed value.
    pub min_value: i64,
}

impl MinValueValidator {
    /// Creates a new `MinValueValidator` with the given minimum.
    pub const fn new(min_value: i64) -> Self {
        Self { min_value }
    }
}

impl Validator for MinValueValidator {
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        if let Value::Int(n) = value {
            if *n < self.min_value {
                return Err(invalid(
                    format!(
                        "Ensure this value is greater than or equal to {}.",
                        self.min_value
                    ),
                    "min_value",
                ));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MinValueValidator"
    }
}

/// Validates that an integer value does not exceed a maximum.
#[derive(Debug, Clone)]
pub struct MaxValueValidator {
    /// The maximum allowed value.
    pub max_value: i64,
}

impl MaxValueValidator {
    /// Creates a new `MaxValueValidator` with the given maximum.
    pub const fn new(max_value: i64) -> Self {
        Self { max_value }
    }
}

impl Validator for MaxValueValidator {
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        if let Value::Int(n) = value {
            if *n > self.max_value {
                return Err(invalid(
                    format!(
                        "Ensure this value is less than or equal to {}.",
                        self.max_value
                    ),
                    "max_value",
                ));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MaxValueValidator"
    }
}

/// Validates email address syntax.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
        let re = EMAIL_RE.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
                .expect("valid regex")
        });
        match value {
            Value::String(s) if !s.is_empty() && !re.is_match(s) => Err(invalid(
                "Enter a valid email address.".to_string(),
                "invalid",
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "EmailValidator"
    }
}

/// Validates http(s)/ftp(s) URL syntax.
#[derive(Debug, Clone, Default)]
pub struct UrlValidator;

impl Validator for UrlValidator {
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        static URL_RE: OnceLock<Regex> = OnceLock::new();
        let re = URL_RE
            .get_or_init(|| Regex::new(r"^(?i)(https?|ftps?)://[^\s/$.?#][^\s]*$").expect("valid regex"));
        match value {
            Value::String(s) if !s.is_empty() && !re.is_match(s) => {
                Err(invalid("Enter a valid URL.".to_string(), "invalid"))
            }
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "UrlValidator"
    }
}

/// Validates the digit counts of a decimal value.
#[derive(Debug, Clone)]
pub struct DecimalValidator {
    /// Maximum total digits, if limited.
    pub max_digits: Option<u32>,
    /// Maximum digits after the decimal point, if limited.
    pub decimal_places: Option<u32>,
}

impl DecimalValidator {
    /// Creates a new `DecimalValidator`.
    pub const fn new(max_digits: Option<u32>, decimal_places: Option<u32>) -> Self {
        Self {
            max_digits,
            decimal_places,
        }
    }
}

impl Validator for DecimalValidator {
    fn validate(&self, value: &Value) -> Result<(), SalesforceError> {
        let Value::Decimal(text) = value else {
            return Ok(());
        };
        let unsigned = text.trim_start_matches(['-', '+']);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let whole = whole.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');
        let digits = whole.len() + fraction.len();

        if let Some(max_digits) = self.max_digits {
            if digits > max_digits as usize {
                return Err(invalid(
                    format!("Ensure that there are no more than {max_digits} digits in total."),
                    "max_digits",
                ));
            }
        }
        if let Some(decimal_places) = self.decimal_places {
            if fraction.len() > decimal_places as usize {
                return Err(invalid(
                    format!(
                        "Ensure that there are no more than {decimal_places} decimal places."
                    ),
                    "max_decimal_places",
                ));
            }
            if let Some(max_digits) = self.max_digits {
                let whole_limit = max_digits.saturating_sub(decimal_places) as usize;
                if whole.len() > whole_limit {
                    return Err(invalid(
                        format!(
                            "Ensure that there are no more than {whole_limit} digits before the decimal point."
                        ),
                        "max_whole_digits",
                    ));
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "DecimalValidator"
    }
}
