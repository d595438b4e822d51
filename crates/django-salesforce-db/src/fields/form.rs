//! Form representations of Salesforce fields.
//!
//! `Field::formfield` returns a [`FormField`] describing how a model form
//! should render and parse the field, or `None` for fields that are never
//! user-entered (the Salesforce record ID).

/// The kind of form input a field maps onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFieldType {
    /// Single-line text input.
    Char {
        /// Maximum length (characters).
        max_length: Option<usize>,
    },
    /// Email address input.
    Email {
        /// Maximum length (characters).
        max_length: Option<usize>,
    },
    /// URL input.
    Url {
        /// Maximum length (characters).
        max_length: Option<usize>,
    },
    /// Multi-line text area.
    Text,
    /// Integer input with optional bounds.
    Integer {
        /// Minimum allowed value.
        min_value: Option<i64>,
        /// Maximum allowed value.
        max_value: Option<i64>,
    },
    /// A checkbox.
    Boolean,
    /// A true/false/unknown select.
    NullBoolean,
    /// Fixed-precision decimal input.
    Decimal {
        /// Maximum total digits.
        max_digits: Option<u32>,
        /// Digits after the decimal point.
        decimal_places: Option<u32>,
    },
    /// Date and time input.
    DateTime,
    /// Date input.
    Date,
    /// Time input.
    Time,
    /// A select listing records of the related Salesforce object.
    ModelChoice {
        /// The related model.
        to: String,
    },
}

/// A form field generated from a model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// The input kind.
    pub field_type: FormFieldType,
    /// Whether a value must be entered.
    pub required: bool,
    /// The label shown next to the input.
    pub label: String,
    /// Help text shown below the input.
    pub help_text: String,
}

impl FormField {
    /// Creates a required form field with the given label.
    pub fn new(field_type: FormFieldType, label: impl Into<String>) -> Self {
        Self {
            field_type,
            required: true,
            label: label.into(),
            help_text: String::new(),
        }
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }
}
