//! Shared test helpers for concord crates.
//!
//! [`FakeLocaleData`] is a small in-memory provider that unit and
//! integration tests configure per scenario, so resolver behaviour can be
//! pinned down without the bundled snapshot.

use crate::identifiers::TimeZoneIdentifier;
use crate::provider::{AliasData, ExtensionKey, LanguageAlias, LocaleData};

#[derive(Clone, Debug)]
struct KeywordRow {
    locale: String,
    key: ExtensionKey,
    default: Option<String>,
    values: Vec<String>,
}

#[derive(Clone, Debug)]
struct LanguageAliasRow {
    alias: String,
    language: String,
    script: Option<String>,
    region: Option<String>,
}

/// Builder-configured [`LocaleData`] for tests.
///
/// # Examples
///
/// ```
/// use concord_common::test_support::FakeLocaleData;
/// use concord_common::{ExtensionKey, LocaleData};
///
/// let data = FakeLocaleData::new(&["en", "en-GB"], "en")
///     .with_keyword_everywhere(ExtensionKey::Calendar, Some("gregory"), &["gregory", "islamic"]);
///
/// assert!(data.is_available("en-GB"));
/// assert_eq!(data.keyword_default("en", ExtensionKey::Calendar), Some("gregory"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FakeLocaleData {
    locales: Vec<String>,
    default_locale: String,
    keywords: Vec<KeywordRow>,
    language_aliases: Vec<LanguageAliasRow>,
    region_aliases: Vec<(String, String)>,
    variant_aliases: Vec<(String, String)>,
    keyword_value_aliases: Vec<(String, String, String)>,
    currencies: Vec<String>,
    time_zones: Vec<TimeZoneIdentifier>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

impl FakeLocaleData {
    /// A provider supporting `locales`, in that order.
    #[must_use]
    pub fn new(locales: &[&str], default_locale: &str) -> Self {
        Self {
            locales: owned(locales),
            default_locale: default_locale.to_owned(),
            ..Self::default()
        }
    }

    /// Declares `key` data for one locale, replacing earlier declarations.
    #[must_use]
    pub fn with_keyword(
        mut self,
        locale: &str,
        key: ExtensionKey,
        default: Option<&str>,
        values: &[&str],
    ) -> Self {
        self.keywords
            .retain(|row| !(row.locale == locale && row.key == key));
        self.keywords.push(KeywordRow {
            locale: locale.to_owned(),
            key,
            default: default.map(str::to_owned),
            values: owned(values),
        });
        self
    }

    /// Declares the same `key` data for every supported locale.
    #[must_use]
    pub fn with_keyword_everywhere(
        self,
        key: ExtensionKey,
        default: Option<&str>,
        values: &[&str],
    ) -> Self {
        let locales = self.locales.clone();
        locales.iter().fold(self, |data, locale| {
            data.with_keyword(locale, key, default, values)
        })
    }

    /// Registers a language alias.
    #[must_use]
    pub fn with_language_alias(
        mut self,
        alias: &str,
        language: &str,
        script: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        self.language_aliases.push(LanguageAliasRow {
            alias: alias.to_owned(),
            language: language.to_owned(),
            script: script.map(str::to_owned),
            region: region.map(str::to_owned),
        });
        self
    }

    /// Registers a region alias.
    #[must_use]
    pub fn with_region_alias(mut self, alias: &str, replacement: &str) -> Self {
        self.region_aliases
            .push((alias.to_owned(), replacement.to_owned()));
        self
    }

    /// Registers a variant alias.
    #[must_use]
    pub fn with_variant_alias(mut self, alias: &str, replacement: &str) -> Self {
        self.variant_aliases
            .push((alias.to_owned(), replacement.to_owned()));
        self
    }

    /// Registers a keyword value alias under `key`.
    #[must_use]
    pub fn with_keyword_value_alias(mut self, key: &str, alias: &str, replacement: &str) -> Self {
        self.keyword_value_aliases
            .push((key.to_owned(), alias.to_owned(), replacement.to_owned()));
        self
    }

    /// Registers currency codes, stored uppercase.
    #[must_use]
    pub fn with_currencies(mut self, codes: &[&str]) -> Self {
        self.currencies
            .extend(codes.iter().map(|code| code.to_ascii_uppercase()));
        self
    }

    /// Registers a named time zone.
    #[must_use]
    pub fn with_time_zone(mut self, identifier: &str, aliases: &[&str]) -> Self {
        self.time_zones
            .push(TimeZoneIdentifier::new(identifier, aliases));
        self.time_zones
            .sort_by(|left, right| left.identifier().cmp(right.identifier()));
        self
    }

    fn keyword(&self, locale: &str, key: ExtensionKey) -> Option<&KeywordRow> {
        self.keywords
            .iter()
            .find(|row| row.locale == locale && row.key == key)
    }
}

fn lookup_pair<'a>(table: &'a [(String, String)], key: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(alias, _)| alias == key)
        .map(|(_, replacement)| replacement.as_str())
}

impl AliasData for FakeLocaleData {
    fn language_alias(&self, language: &str) -> Option<LanguageAlias<'_>> {
        self.language_aliases
            .iter()
            .find(|row| row.alias == language)
            .map(|row| LanguageAlias {
                language: &row.language,
                script: row.script.as_deref(),
                region: row.region.as_deref(),
            })
    }

    fn region_alias(&self, region: &str) -> Option<&str> {
        lookup_pair(&self.region_aliases, region)
    }

    fn variant_alias(&self, variant: &str) -> Option<&str> {
        lookup_pair(&self.variant_aliases, variant)
    }

    fn keyword_value_alias(&self, key: &str, value: &str) -> Option<&str> {
        self.keyword_value_aliases
            .iter()
            .find(|(row_key, alias, _)| row_key == key && alias == value)
            .map(|(.., replacement)| replacement.as_str())
    }
}

impl LocaleData for FakeLocaleData {
    fn available_locales(&self) -> &[String] {
        &self.locales
    }

    fn default_locale(&self) -> &str {
        &self.default_locale
    }

    fn keyword_default(&self, locale: &str, key: ExtensionKey) -> Option<&str> {
        self.keyword(locale, key)
            .and_then(|row| row.default.as_deref())
    }

    fn keyword_values(&self, locale: &str, key: ExtensionKey) -> &[String] {
        self.keyword(locale, key)
            .map(|row| row.values.as_slice())
            .unwrap_or_default()
    }

    fn is_known_currency(&self, code: &str) -> bool {
        self.currencies
            .iter()
            .any(|known| known.eq_ignore_ascii_case(code))
    }

    fn time_zones(&self) -> &[TimeZoneIdentifier] {
        &self.time_zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn later_keyword_declarations_replace_earlier_ones() {
        let data = FakeLocaleData::new(&["en"], "en")
            .with_keyword("en", ExtensionKey::HourCycle, Some("h23"), &["h23"])
            .with_keyword("en", ExtensionKey::HourCycle, Some("h12"), &["h12", "h23"]);

        assert_eq!(data.keyword_default("en", ExtensionKey::HourCycle), Some("h12"));
        assert_eq!(data.keyword_values("en", ExtensionKey::HourCycle).len(), 2);
    }

    #[rstest]
    fn answers_alias_queries() {
        let data = FakeLocaleData::new(&["sr-Latn"], "sr-Latn")
            .with_language_alias("sh", "sr", Some("Latn"), None)
            .with_keyword_value_alias("co", "phonebook", "phonebk");

        assert_eq!(
            data.language_alias("sh").and_then(|alias| alias.script),
            Some("Latn")
        );
        assert_eq!(data.keyword_value_alias("co", "phonebook"), Some("phonebk"));
        assert!(data.keyword_value_alias("ca", "phonebook").is_none());
    }
}
