//! Locale negotiation for Intl-style services.
//!
//! A [`Negotiator`] binds a [`LocaleData`] provider to a
//! [`NegotiatorConfig`] and answers the questions every Intl constructor
//! asks before formatting anything: which of the requested locales are
//! supported, which supported locale best serves the request, and which
//! calendar, collation, hour cycle, or numbering system applies.
//!
//! ```
//! use concord::{IntlService, Negotiator, SpecialBehaviors, Value};
//!
//! let negotiator = Negotiator::bundled();
//! let resolved = negotiator.resolve_options(
//!     IntlService::NumberFormat,
//!     &Value::from(["fa-IR", "en"]),
//!     Value::Undefined,
//!     SpecialBehaviors::NONE,
//!     |_| {},
//! )?;
//! assert_eq!(resolved.resolved_locale.locale, "fa");
//! assert_eq!(resolved.resolved_locale.nu.as_deref(), Some("arabext"));
//! # Ok::<(), concord::IntlError>(())
//! ```

pub mod config;
pub mod extension;
mod filter;
pub mod getters;
pub mod locale_list;
pub mod matcher;
mod negotiator;
pub mod options;
mod registry;
pub mod resolver;
pub mod value;

pub use concord_common::{
    ErrorKind, ExtensionKey, IntlError, IntlResult, LocaleData, TimeZoneIdentifier,
    canonicalize_currency_code, canonicalize_unicode_locale_id,
    is_structurally_valid_language_tag, is_well_formed_currency_code,
    is_well_formed_unit_identifier,
};
pub use config::{ConfigError, LimitsConfig, NegotiatorConfig};
pub use matcher::{LocaleMatcher, MatchedLocale, UnknownLocaleMatcher};
pub use negotiator::Negotiator;
pub use options::{IntlService, ResolvedOptions, SpecialBehaviors, UnknownIntlService};
pub use resolver::{LocaleKey, LocaleOptions, ResolvedLocale};
pub use value::{OptionsObject, PropertyBag, Value};

#[cfg(feature = "bundled-data")]
pub use concord_data;
