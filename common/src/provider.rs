//! Capability contracts for host locale data.
//!
//! The resolver never owns locale data. It queries a provider through these
//! traits so the same code runs against the bundled snapshot or a small fake
//! table in tests.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::identifiers::TimeZoneIdentifier;
use crate::tag::LocaleId;

/// Replacement for a deprecated language subtag.
///
/// `script` and `region` are only applied when the tag being canonicalised
/// does not already carry one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LanguageAlias<'a> {
    /// Replacement language subtag.
    pub language: &'a str,
    /// Script contributed by the alias, e.g. `Latn` for `sh`.
    pub script: Option<&'a str>,
    /// Region contributed by the alias.
    pub region: Option<&'a str>,
}

/// Alias tables consulted during canonicalisation.
///
/// Every method receives case-normalised input and must return canonical,
/// case-normalised output that is not itself an alias, otherwise
/// canonicalisation stops being idempotent.
pub trait AliasData {
    /// Replacement for a deprecated language subtag.
    fn language_alias(&self, language: &str) -> Option<LanguageAlias<'_>>;

    /// Replacement for a deprecated region subtag.
    fn region_alias(&self, region: &str) -> Option<&str>;

    /// Replacement for a deprecated variant subtag.
    fn variant_alias(&self, variant: &str) -> Option<&str>;

    /// Replacement for a deprecated `-u-` keyword value under `key`.
    fn keyword_value_alias(&self, key: &str, value: &str) -> Option<&str>;
}

/// Alias provider that knows no aliases; canonicalisation only fixes case
/// and ordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoAliases;

impl AliasData for NoAliases {
    fn language_alias(&self, _language: &str) -> Option<LanguageAlias<'_>> {
        None
    }

    fn region_alias(&self, _region: &str) -> Option<&str> {
        None
    }

    fn variant_alias(&self, _variant: &str) -> Option<&str> {
        None
    }

    fn keyword_value_alias(&self, _key: &str, _value: &str) -> Option<&str> {
        None
    }
}

/// The Unicode extension keys the resolver knows how to negotiate.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ExtensionKey {
    /// `ca`, the calendar.
    Calendar,
    /// `co`, the collation.
    Collation,
    /// `hc`, the hour cycle.
    HourCycle,
    /// `kf`, upper- or lower-case first collation.
    CaseFirst,
    /// `kn`, numeric collation.
    Numeric,
    /// `nu`, the numbering system.
    NumberingSystem,
}

impl ExtensionKey {
    /// Every key, in `-u-` serialisation order.
    pub const ALL: [Self; 6] = [
        Self::Calendar,
        Self::Collation,
        Self::HourCycle,
        Self::CaseFirst,
        Self::Numeric,
        Self::NumberingSystem,
    ];

    /// The two-character key used in tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "ca",
            Self::Collation => "co",
            Self::HourCycle => "hc",
            Self::CaseFirst => "kf",
            Self::Numeric => "kn",
            Self::NumberingSystem => "nu",
        }
    }
}

impl fmt::Display for ExtensionKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when parsing a key the resolver does not negotiate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown extension key `{0}`")]
pub struct UnknownExtensionKey(pub String);

impl FromStr for ExtensionKey {
    type Err = UnknownExtensionKey;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| UnknownExtensionKey(input.to_owned()))
    }
}

/// Read-only view of the host's locale, currency, and time-zone data.
///
/// Implementations must be immutable once constructed; resolution may run
/// concurrently against a shared provider.
pub trait LocaleData: AliasData {
    /// Canonical tags of every supported locale, in the provider's preferred
    /// order. Best-fit ties resolve to the earliest entry.
    fn available_locales(&self) -> &[String];

    /// Whether `locale` (canonical, extension-free) is supported.
    fn is_available(&self, locale: &str) -> bool {
        self.available_locales()
            .iter()
            .any(|candidate| candidate == locale)
    }

    /// The locale used when nothing requested matches.
    fn default_locale(&self) -> &str;

    /// The data-defined default for `key` in `locale`; `None` means the key
    /// has no default (e.g. collation).
    fn keyword_default(&self, locale: &str, key: ExtensionKey) -> Option<&str>;

    /// Every value `locale` supports for `key`.
    fn keyword_values(&self, locale: &str, key: ExtensionKey) -> &[String];

    /// Whether a well-formed currency code names a registered currency.
    fn is_known_currency(&self, code: &str) -> bool;

    /// The named time-zone table, sorted by identifier.
    fn time_zones(&self) -> &[TimeZoneIdentifier];

    /// The identifier downstream data queries use for `locale`.
    fn internal_identifier(&self, locale: &LocaleId) -> String {
        locale.to_internal_identifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ca", Ok(ExtensionKey::Calendar))]
    #[case("KN", Ok(ExtensionKey::Numeric))]
    #[case("nu", Ok(ExtensionKey::NumberingSystem))]
    #[case("tz", Err(UnknownExtensionKey("tz".to_owned())))]
    fn parses_extension_keys(
        #[case] input: &str,
        #[case] expected: Result<ExtensionKey, UnknownExtensionKey>,
    ) {
        assert_eq!(input.parse::<ExtensionKey>(), expected);
    }

    #[rstest]
    fn no_aliases_leaves_everything_alone() {
        assert!(NoAliases.language_alias("iw").is_none());
        assert!(NoAliases.region_alias("DD").is_none());
        assert!(NoAliases.keyword_value_alias("co", "phonebook").is_none());
    }
}
