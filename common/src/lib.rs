//! Leaf building blocks for locale negotiation: the language tag grammar and
//! canonicaliser, identifier validators, the shared error type, and the
//! capability traits through which host locale data is queried.

pub mod error;
pub mod identifiers;
pub mod provider;
pub mod tag;
pub mod test_support;

pub use error::{ErrorKind, IntlError, IntlResult};
pub use identifiers::{
    TimeZoneIdentifier, canonicalize_currency_code, find_time_zone,
    is_well_formed_currency_code, is_well_formed_unit_identifier,
};
pub use provider::{AliasData, ExtensionKey, LanguageAlias, LocaleData, NoAliases};
pub use tag::{
    Keyword, LocaleId, UnicodeExtension, canonicalize_unicode_locale_id,
    is_structurally_valid_language_tag,
};
