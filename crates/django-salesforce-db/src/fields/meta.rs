//! Salesforce write-permission metadata shared by every field type.

use django_salesforce_core::{SalesforceError, SalesforceResult};

/// Which write operations Salesforce accepts for a field.
///
/// The numeric codes match the `sf_read_only` option: `ReadOnly` (3) is the
/// combination of `NotUpdateable` (1) and `NotCreateable` (2).
///
/// | Code | Variant | Example |
/// |---|---|---|
/// | 0 | `FullWritable` | `LastName` |
/// | 1 | `NotUpdateable` | `User.ContactId` |
/// | 2 | `NotCreateable` | `Lead.EmailBouncedReason` |
/// | 3 | `ReadOnly` | `LastModifiedDate` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum SfReadOnly {
    /// Writable on insert and update.
    #[default]
    FullWritable = 0,
    /// Can be set on insert but never modified afterwards.
    NotUpdateable = 1,
    /// Cannot be set on insert but can be modified later.
    NotCreateable = 2,
    /// Can be set neither on insert nor on update.
    ReadOnly = 3,
}

/// `sf_read_only = 0`
pub const FULL_WRITABLE: SfReadOnly = SfReadOnly::FullWritable;
/// `sf_read_only = 1`
pub const NOT_UPDATEABLE: SfReadOnly = SfReadOnly::NotUpdateable;
/// `sf_read_only = 2`
pub const NOT_CREATEABLE: SfReadOnly = SfReadOnly::NotCreateable;
/// `sf_read_only = 3`
pub const READ_ONLY: SfReadOnly = SfReadOnly::ReadOnly;

impl SfReadOnly {
    /// Parses an `sf_read_only` code.
    pub fn from_code(code: u8) -> SalesforceResult<Self> {
        match code {
            0 => Ok(Self::FullWritable),
            1 => Ok(Self::NotUpdateable),
            2 => Ok(Self::NotCreateable),
            3 => Ok(Self::ReadOnly),
            other => Err(SalesforceError::ImproperlyConfigured(format!(
                "sf_read_only must be one of 0, 1, 2 or 3, not {other}."
            ))),
        }
    }

    /// Returns the numeric `sf_read_only` code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the field may be given a value on insert.
    pub const fn is_creatable(self) -> bool {
        self.code() & Self::NotCreateable.code() == 0
    }

    /// Returns `true` if the field may be changed on update.
    pub const fn is_updatable(self) -> bool {
        self.code() & Self::NotUpdateable.code() == 0
    }
}

impl TryFrom<u8> for SfReadOnly {
    type Error = SalesforceError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<SfReadOnly> for u8 {
    fn from(value: SfReadOnly) -> Self {
        value.code()
    }
}

/// The Salesforce-specific options every field carries.
///
/// - `sf_read_only`: write eligibility, see [`SfReadOnly`].
/// - `sf_custom`: append `__c` to the derived column name.
/// - `db_column`: explicit column name; disables all renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SfMeta {
    /// Write eligibility of the field.
    pub sf_read_only: SfReadOnly,
    /// Whether this is a Salesforce custom field.
    pub sf_custom: bool,
    /// Explicit column name override.
    pub db_column: Option<String>,
}

impl SfMeta {
    /// Creates metadata for a fully writable standard field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the write eligibility.
    #[must_use]
    pub const fn sf_read_only(mut self, sf_read_only: SfReadOnly) -> Self {
        self.sf_read_only = sf_read_only;
        self
    }

    /// Marks the field as a Salesforce custom field.
    #[must_use]
    pub const fn custom(mut self, custom: bool) -> Self {
        self.sf_custom = custom;
        self
    }

    /// Sets an explicit column name.
    #[must_use]
    pub fn db_column(mut self, column: impl Into<String>) -> Self {
        self.db_column = Some(column.into());
        self
    }
}
