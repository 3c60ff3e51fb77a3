//! The negotiation context shared by every operation.

use concord_common::{LocaleData, LocaleId, canonicalize_unicode_locale_id};
use log::{debug, warn};

use crate::config::NegotiatorConfig;

/// Binds a locale data provider to a configuration.
///
/// Every operation that consults host data is a method on this type. The
/// provider is only borrowed and never mutated, so one negotiator can serve
/// concurrent calls.
#[derive(Clone, Debug)]
pub struct Negotiator<'d, D> {
    data: &'d D,
    config: NegotiatorConfig,
    default_locale: String,
}

impl<'d, D: LocaleData> Negotiator<'d, D> {
    /// A negotiator over `data` with the default configuration.
    #[must_use]
    pub fn new(data: &'d D) -> Self {
        Self::with_config(data, NegotiatorConfig::default())
    }

    /// A negotiator over `data` with `config`.
    ///
    /// A configured default locale is canonicalised and used only when the
    /// provider supports it; otherwise the provider's own default applies.
    #[must_use]
    pub fn with_config(data: &'d D, config: NegotiatorConfig) -> Self {
        let default_locale = select_default_locale(data, &config);
        Self {
            data,
            config,
            default_locale,
        }
    }

    /// The locale data provider.
    #[must_use]
    pub const fn data(&self) -> &'d D {
        self.data
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &NegotiatorConfig {
        &self.config
    }

    /// The locale substituted when nothing requested matches.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }
}

fn select_default_locale<D: LocaleData>(data: &D, config: &NegotiatorConfig) -> String {
    let fallback = data.default_locale();
    let Some(candidate) = config.default_locale() else {
        return fallback.to_owned();
    };

    let canonical = canonicalize_unicode_locale_id(candidate, data)
        .ok()
        .and_then(|tag| LocaleId::parse(&tag))
        .map(|locale| locale.base_name());
    match canonical {
        Some(locale) if data.is_available(&locale) => {
            debug!(
                target: "negotiator",
                "using configured default locale `{locale}`",
            );
            locale
        }
        _ => {
            warn!(
                target: "negotiator",
                "skipping unsupported default locale `{candidate}`; falling back to `{fallback}`",
            );
            fallback.to_owned()
        }
    }
}

#[cfg(feature = "bundled-data")]
impl Negotiator<'static, concord_data::BundledData> {
    /// A negotiator over the bundled data snapshot.
    ///
    /// ```
    /// let negotiator = concord::Negotiator::bundled();
    /// assert_eq!(negotiator.default_locale(), "en-US");
    /// ```
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(concord_data::bundled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_common::test_support::FakeLocaleData;
    use rstest::{fixture, rstest};

    #[fixture]
    fn data() -> FakeLocaleData {
        FakeLocaleData::new(&["en", "fr", "sr-Latn"], "en")
            .with_language_alias("sh", "sr", Some("Latn"), None)
    }

    fn config_with_default(locale: &str) -> NegotiatorConfig {
        NegotiatorConfig {
            default_locale: Some(locale.to_owned()),
            ..NegotiatorConfig::default()
        }
    }

    #[rstest]
    fn defaults_to_the_provider_locale(data: FakeLocaleData) {
        assert_eq!(Negotiator::new(&data).default_locale(), "en");
    }

    #[rstest]
    #[case("fr", "fr")]
    #[case(" FR ", "fr")]
    #[case("sh", "sr-Latn")]
    #[case("fr-u-ca-gregory", "fr")]
    #[case("de", "en")]
    #[case("not a tag", "en")]
    #[case("   ", "en")]
    fn honours_supported_configured_defaults(
        data: FakeLocaleData,
        #[case] configured: &str,
        #[case] expected: &str,
    ) {
        let negotiator = Negotiator::with_config(&data, config_with_default(configured));

        assert_eq!(negotiator.default_locale(), expected);
    }
}
