//! Bundled host data snapshot for concord.
//!
//! The snapshot covers supported locales with their `-u-` keyword defaults and
//! valid values, deprecated-subtag alias tables, registered currencies, and
//! named time zones. It is built once on first access and never mutated, so a
//! single `&'static` instance is shared by every resolution call.

mod aliases;
mod currencies;
mod locales;
mod time_zones;

use std::collections::HashMap;

use concord_common::{
    AliasData, ExtensionKey, LanguageAlias, LocaleData, TimeZoneIdentifier, find_time_zone,
};
use log::debug;
use once_cell::sync::Lazy;

use locales::LocaleKeywords;

static BUNDLED: Lazy<BundledData> = Lazy::new(BundledData::build);

/// Returns the process-wide bundled snapshot.
///
/// ```
/// use concord_common::LocaleData;
///
/// let data = concord_data::bundled();
/// assert!(data.is_available("zh-Hant-TW"));
/// assert_eq!(data.default_locale(), "en-US");
/// ```
#[must_use]
pub fn bundled() -> &'static BundledData {
    &BUNDLED
}

/// Every named time zone in the snapshot, sorted by identifier.
#[must_use]
pub fn available_named_time_zone_identifiers() -> &'static [TimeZoneIdentifier] {
    BUNDLED.time_zones()
}

/// Resolves `name` (case-insensitively, aliases included) to its time zone.
///
/// ```
/// let zone = concord_data::get_available_named_time_zone_identifier("asia/calcutta");
/// assert_eq!(zone.map(|zone| zone.identifier()), Some("Asia/Kolkata"));
/// ```
#[must_use]
pub fn get_available_named_time_zone_identifier(
    name: &str,
) -> Option<&'static TimeZoneIdentifier> {
    find_time_zone(available_named_time_zone_identifiers(), name)
}

/// The bundled implementation of [`LocaleData`].
#[derive(Debug)]
pub struct BundledData {
    available: Vec<String>,
    keywords: HashMap<String, LocaleKeywords>,
    time_zones: Vec<TimeZoneIdentifier>,
}

impl BundledData {
    fn build() -> Self {
        let available = locales::SUPPORTED_LOCALES
            .iter()
            .map(|locale| (*locale).to_owned())
            .collect::<Vec<_>>();
        let keywords = available
            .iter()
            .map(|locale| (locale.clone(), locales::resolve_keywords(locale)))
            .collect::<HashMap<_, _>>();
        let time_zones = time_zones::build();
        debug!(
            target: "concord_data",
            "bundled snapshot ready: {} locales, {} time zones",
            available.len(),
            time_zones.len(),
        );
        Self {
            available,
            keywords,
            time_zones,
        }
    }

    fn keyword(&self, locale: &str, key: ExtensionKey) -> Option<&locales::KeywordData> {
        self.keywords.get(locale).and_then(|keys| keys.get(&key))
    }
}

impl AliasData for BundledData {
    fn language_alias(&self, language: &str) -> Option<LanguageAlias<'_>> {
        aliases::language(language)
    }

    fn region_alias(&self, region: &str) -> Option<&str> {
        aliases::region(region)
    }

    fn variant_alias(&self, variant: &str) -> Option<&str> {
        aliases::variant(variant)
    }

    fn keyword_value_alias(&self, key: &str, value: &str) -> Option<&str> {
        aliases::keyword_value(key, value)
    }
}

impl LocaleData for BundledData {
    fn available_locales(&self) -> &[String] {
        &self.available
    }

    fn is_available(&self, locale: &str) -> bool {
        self.keywords.contains_key(locale)
    }

    fn default_locale(&self) -> &str {
        locales::DEFAULT_LOCALE
    }

    fn keyword_default(&self, locale: &str, key: ExtensionKey) -> Option<&str> {
        self.keyword(locale, key)
            .and_then(|data| data.default.as_deref())
    }

    fn keyword_values(&self, locale: &str, key: ExtensionKey) -> &[String] {
        self.keyword(locale, key)
            .map(|data| data.values.as_slice())
            .unwrap_or_default()
    }

    fn is_known_currency(&self, code: &str) -> bool {
        currencies::is_known(code)
    }

    fn time_zones(&self) -> &[TimeZoneIdentifier] {
        &self.time_zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_common::canonicalize_unicode_locale_id;
    use rstest::{fixture, rstest};

    #[fixture]
    fn data() -> &'static BundledData {
        bundled()
    }

    #[rstest]
    fn default_locale_is_supported(data: &BundledData) {
        assert!(data.is_available(data.default_locale()));
    }

    #[rstest]
    fn supported_locales_are_canonical(data: &BundledData) {
        for locale in data.available_locales() {
            assert_eq!(
                canonicalize_unicode_locale_id(locale, data).as_deref(),
                Ok(locale.as_str())
            );
        }
    }

    #[rstest]
    #[case("zh-Hant-TW", ExtensionKey::Calendar, Some("gregory"))]
    #[case("zh-Hant-TW", ExtensionKey::NumberingSystem, Some("latn"))]
    #[case("th", ExtensionKey::Calendar, Some("buddhist"))]
    #[case("de", ExtensionKey::Collation, None)]
    #[case("xx", ExtensionKey::Calendar, None)]
    fn answers_keyword_defaults(
        data: &BundledData,
        #[case] locale: &str,
        #[case] key: ExtensionKey,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(data.keyword_default(locale, key), expected);
    }

    #[rstest]
    fn unsupported_locales_have_no_values(data: &BundledData) {
        assert!(data.keyword_values("xx", ExtensionKey::Calendar).is_empty());
    }

    #[rstest]
    #[case("iw-IL", "he-IL")]
    #[case("cnr", "sr-ME")]
    #[case("en-u-ca-islamicc-kn-yes", "en-u-ca-islamic-civil-kn")]
    fn canonicalizes_with_bundled_aliases(
        data: &BundledData,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            canonicalize_unicode_locale_id(input, data).as_deref(),
            Ok(expected)
        );
    }

    #[rstest]
    fn resolves_time_zone_aliases() {
        assert_eq!(
            get_available_named_time_zone_identifier("US/Pacific")
                .map(TimeZoneIdentifier::identifier),
            Some("America/Los_Angeles")
        );
        assert!(get_available_named_time_zone_identifier("Mars/Olympus").is_none());
    }
}
