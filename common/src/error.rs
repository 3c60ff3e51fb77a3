//! Error types shared by every concord crate.
//!
//! Each variant names one way caller input can be rejected. Hosts surface the
//! failure as either a `RangeError` or a `TypeError`; [`IntlError::kind`]
//! performs that mapping so call sites never have to match on variants.

use thiserror::Error;

/// Result alias used throughout concord.
pub type IntlResult<T> = Result<T, IntlError>;

/// The host-level error class an [`IntlError`] should be raised as.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed or out-of-bounds input (`RangeError`).
    Range,
    /// Input of the wrong shape or type (`TypeError`).
    Type,
}

/// Errors raised while validating caller-supplied locale input and options.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IntlError {
    /// A language tag failed the structural grammar check.
    #[error("invalid language tag: \"{tag}\"")]
    InvalidLanguageTag {
        /// The offending tag as supplied.
        tag: String,
    },

    /// A language tag exceeded the configured length cap.
    #[error("language tag is {length} characters long; the limit is {limit}")]
    TagTooLong {
        /// Length of the rejected tag.
        length: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A requested locale list exceeded the configured entry cap.
    #[error("locale list has more than {limit} entries")]
    ListTooLong {
        /// Configured maximum.
        limit: usize,
    },

    /// An option value was not one of the permitted values.
    #[error("{value} is not a valid value for option {property}")]
    InvalidOptionValue {
        /// Name of the option property.
        property: String,
        /// The rejected value, after string conversion.
        value: String,
    },

    /// A numeric option was NaN or outside its permitted bounds.
    #[error("value {value} is outside of range [{minimum}, {maximum}] for option {property}")]
    NumberOutOfRange {
        /// Name of the option property.
        property: String,
        /// The rejected value, rendered as a string.
        value: String,
        /// Inclusive lower bound.
        minimum: i32,
        /// Inclusive upper bound.
        maximum: i32,
    },

    /// The caller omitted an options argument the service requires.
    #[error("an options object is required")]
    OptionsRequired,

    /// The options argument was neither undefined nor an object.
    #[error("options argument must be an object or undefined")]
    OptionsNotObject,

    /// A value could not be converted to an object (`null` or `undefined`).
    #[error("cannot convert {value} to object")]
    NotCoercible {
        /// Rendering of the rejected value.
        value: &'static str,
    },

    /// A locale list element was neither a string nor an object.
    #[error("locale identifier must be a string or an object")]
    InvalidLocaleValue,
}

impl IntlError {
    /// Returns the host error class this error should be raised as.
    ///
    /// ```
    /// use concord_common::{ErrorKind, IntlError};
    ///
    /// assert_eq!(IntlError::OptionsRequired.kind(), ErrorKind::Type);
    /// let error = IntlError::InvalidLanguageTag { tag: "en-u".to_owned() };
    /// assert_eq!(error.kind(), ErrorKind::Range);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLanguageTag { .. }
            | Self::TagTooLong { .. }
            | Self::ListTooLong { .. }
            | Self::InvalidOptionValue { .. }
            | Self::NumberOutOfRange { .. } => ErrorKind::Range,
            Self::OptionsRequired
            | Self::OptionsNotObject
            | Self::NotCoercible { .. }
            | Self::InvalidLocaleValue => ErrorKind::Type,
        }
    }

    pub(crate) fn invalid_tag(tag: &str) -> Self {
        Self::InvalidLanguageTag {
            tag: tag.to_owned(),
        }
    }
}
