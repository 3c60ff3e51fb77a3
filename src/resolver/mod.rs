//! Locale resolution: matching plus per-key `-u-` extension negotiation.

use std::fmt;

use concord_common::{ExtensionKey, Keyword, LocaleData, LocaleId};
use log::debug;

use crate::extension::insert_unicode_extension_and_canonicalize;
use crate::matcher::{LocaleMatcher, MatchedLocale, find_matching_locale};
use crate::negotiator::Negotiator;

const TRUE_VALUE: &str = "true";

/// A resolved or requested extension key value.
///
/// `Unset` means nobody asked for, or the data defines no value for, the key.
/// It is distinct from an empty string.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum LocaleKey {
    /// No value.
    #[default]
    Unset,
    /// A keyword value such as `gregory` or `true`.
    Value(String),
}

impl LocaleKey {
    /// Wraps a value.
    #[must_use]
    pub fn value(value: &str) -> Self {
        Self::Value(value.to_owned())
    }

    /// The value, if set.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Whether the key has no value.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Option<&str>> for LocaleKey {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Unset, Self::value)
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => formatter.write_str("<unset>"),
            Self::Value(value) => formatter.write_str(value),
        }
    }
}

/// Options steering [`Negotiator::resolve_locale`].
///
/// A per-key field of `None` means the caller passed no option; `Some(Unset)`
/// means an option was passed but did not survive validation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocaleOptions {
    /// Matching strategy.
    pub locale_matcher: LocaleMatcher,
    /// Calendar (`ca`).
    pub ca: Option<LocaleKey>,
    /// Collation (`co`).
    pub co: Option<LocaleKey>,
    /// Hour cycle (`hc`).
    pub hc: Option<LocaleKey>,
    /// Case-first collation (`kf`).
    pub kf: Option<LocaleKey>,
    /// Numeric collation (`kn`).
    pub kn: Option<LocaleKey>,
    /// Numbering system (`nu`).
    pub nu: Option<LocaleKey>,
    /// The `hour12` option, when the service reads one.
    pub hour12: Option<bool>,
}

impl LocaleOptions {
    /// The option supplied for `key`.
    #[must_use]
    pub const fn key(&self, key: ExtensionKey) -> Option<&LocaleKey> {
        match key {
            ExtensionKey::Calendar => self.ca.as_ref(),
            ExtensionKey::Collation => self.co.as_ref(),
            ExtensionKey::HourCycle => self.hc.as_ref(),
            ExtensionKey::CaseFirst => self.kf.as_ref(),
            ExtensionKey::Numeric => self.kn.as_ref(),
            ExtensionKey::NumberingSystem => self.nu.as_ref(),
        }
    }

    /// Mutable access to the option slot for `key`.
    pub const fn key_mut(&mut self, key: ExtensionKey) -> &mut Option<LocaleKey> {
        match key {
            ExtensionKey::Calendar => &mut self.ca,
            ExtensionKey::Collation => &mut self.co,
            ExtensionKey::HourCycle => &mut self.hc,
            ExtensionKey::CaseFirst => &mut self.kf,
            ExtensionKey::Numeric => &mut self.kn,
            ExtensionKey::NumberingSystem => &mut self.nu,
        }
    }
}

/// The outcome of [`Negotiator::resolve_locale`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolvedLocale {
    /// The canonical resolved tag, carrying only extension-sourced keywords.
    pub locale: String,
    /// The provider's identifier for `locale`, used for data queries.
    pub icu_locale: String,
    /// Calendar.
    pub ca: LocaleKey,
    /// Collation.
    pub co: LocaleKey,
    /// Hour cycle.
    pub hc: LocaleKey,
    /// Case-first collation.
    pub kf: LocaleKey,
    /// Numeric collation.
    pub kn: LocaleKey,
    /// Numbering system.
    pub nu: LocaleKey,
}

impl ResolvedLocale {
    /// The resolved value for `key`.
    #[must_use]
    pub const fn key(&self, key: ExtensionKey) -> &LocaleKey {
        match key {
            ExtensionKey::Calendar => &self.ca,
            ExtensionKey::Collation => &self.co,
            ExtensionKey::HourCycle => &self.hc,
            ExtensionKey::CaseFirst => &self.kf,
            ExtensionKey::Numeric => &self.kn,
            ExtensionKey::NumberingSystem => &self.nu,
        }
    }

    const fn key_mut(&mut self, key: ExtensionKey) -> &mut LocaleKey {
        match key {
            ExtensionKey::Calendar => &mut self.ca,
            ExtensionKey::Collation => &mut self.co,
            ExtensionKey::HourCycle => &mut self.hc,
            ExtensionKey::CaseFirst => &mut self.kf,
            ExtensionKey::Numeric => &mut self.kn,
            ExtensionKey::NumberingSystem => &mut self.nu,
        }
    }
}

impl<D: LocaleData> Negotiator<'_, D> {
    /// Matches `requested` against the supported set and negotiates each of
    /// `relevant_keys`.
    ///
    /// Per key, a value carried by the matched requested tag's `-u-`
    /// extension wins when the data lists it as valid; otherwise a valid
    /// value from `options`; otherwise the locale's data default. Only
    /// extension-sourced values are written back into the resolved tag, and
    /// keys outside `relevant_keys` never appear in it.
    ///
    /// `requested` is expected to be canonical, as produced by
    /// [`canonicalize_locale_list`](Self::canonicalize_locale_list).
    #[must_use]
    pub fn resolve_locale(
        &self,
        requested: &[String],
        options: &LocaleOptions,
        relevant_keys: &[ExtensionKey],
    ) -> ResolvedLocale {
        let data = self.data();
        let matched = find_matching_locale(data, requested, options.locale_matcher)
            .unwrap_or_else(|| {
                debug!(
                    target: "resolver",
                    "no requested locale matched; using default `{}`",
                    self.default_locale(),
                );
                MatchedLocale {
                    locale: self.default_locale().to_owned(),
                    extension: None,
                }
            });
        let found = matched.locale.as_str();

        let mut resolved = ResolvedLocale::default();
        let mut supported_keywords: Vec<Keyword> = Vec::new();
        for &key in relevant_keys {
            let values = data.keyword_values(found, key);
            let is_valid = |candidate: &str| values.iter().any(|value| value == candidate);

            let requested_keyword = matched
                .extension
                .as_ref()
                .and_then(|extension| extension.keyword(key.as_str()))
                .filter(|keyword| is_valid(keyword_value(*keyword)));
            let option_value = options
                .key(key)
                .and_then(LocaleKey::as_deref)
                .filter(|value| is_valid(*value));

            let value = if let Some(keyword) = requested_keyword {
                supported_keywords.push(keyword.clone());
                LocaleKey::value(keyword_value(keyword))
            } else if let Some(value) = option_value {
                LocaleKey::value(value)
            } else {
                LocaleKey::from(data.keyword_default(found, key))
            };
            *resolved.key_mut(key) = value;
        }

        let mut locale = LocaleId::parse(found).unwrap_or_default();
        resolved.locale = if supported_keywords.is_empty() {
            found.to_owned()
        } else {
            let tag =
                insert_unicode_extension_and_canonicalize(locale, Vec::new(), supported_keywords, data);
            locale = LocaleId::parse(&tag).unwrap_or_default();
            tag
        };
        resolved.icu_locale = data.internal_identifier(&locale);

        debug!(
            target: "resolver",
            "resolved `{}` (internal `{}`)",
            resolved.locale,
            resolved.icu_locale,
        );
        resolved
    }
}

/// A keyword's value with the empty form read as `true`.
fn keyword_value(keyword: &Keyword) -> &str {
    if keyword.value.is_empty() {
        TRUE_VALUE
    } else {
        &keyword.value
    }
}
