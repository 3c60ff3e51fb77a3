//! Supported locales and their `-u-` keyword data.
//!
//! Keyword data is declared as overrides on top of the root locale. A locale
//! inherits from its truncation parent (`zh-Hant-TW` → `zh-Hant` → `zh` →
//! root); the first override found along that chain for a key supplies its
//! default, and extra values accumulate along the whole chain.

use std::collections::BTreeMap;

use concord_common::ExtensionKey;

/// Canonical tags of the supported locales, in preference order.
pub(crate) const SUPPORTED_LOCALES: &[&str] = &[
    "en-US", "en", "en-AU", "en-CA", "en-GB", "en-IN", "ar", "ar-EG", "ar-SA", "da", "de",
    "de-AT", "de-CH", "es", "es-419", "es-ES", "es-MX", "fa", "fr", "fr-CA", "fr-CH", "he",
    "hi", "it", "ja", "ko", "nl", "pl", "pt", "pt-BR", "pt-PT", "ru", "sr", "sr-Latn", "sv",
    "th", "tr", "zh", "zh-Hans", "zh-Hans-CN", "zh-Hant", "zh-Hant-HK", "zh-Hant-TW",
];

pub(crate) const DEFAULT_LOCALE: &str = "en-US";

const CALENDARS: &[&str] = &[
    "buddhist",
    "chinese",
    "coptic",
    "dangi",
    "ethioaa",
    "ethiopic",
    "gregory",
    "hebrew",
    "indian",
    "islamic",
    "islamic-civil",
    "islamic-rgsa",
    "islamic-tbla",
    "islamic-umalqura",
    "iso8601",
    "japanese",
    "persian",
    "roc",
];

const NUMBERING_SYSTEMS: &[&str] = &[
    "arab", "arabext", "bali", "beng", "deva", "fullwide", "gujr", "guru", "hanidec", "khmr",
    "knda", "laoo", "latn", "limb", "mlym", "mong", "mymr", "orya", "tamldec", "telu", "thai",
    "tibt",
];

/// One override row: the locale it applies to, the key, an optional new
/// default, and values added to the inherited list.
struct Override {
    locale: &'static str,
    key: ExtensionKey,
    default: Option<&'static str>,
    extra: &'static [&'static str],
}

const fn set_default(locale: &'static str, key: ExtensionKey, default: &'static str) -> Override {
    Override {
        locale,
        key,
        default: Some(default),
        extra: &[],
    }
}

const fn add_values(
    locale: &'static str,
    key: ExtensionKey,
    extra: &'static [&'static str],
) -> Override {
    Override {
        locale,
        key,
        default: None,
        extra,
    }
}

const ROOT: &str = "und";

const OVERRIDES: &[Override] = &[
    Override {
        locale: ROOT,
        key: ExtensionKey::Calendar,
        default: Some("gregory"),
        extra: CALENDARS,
    },
    add_values(ROOT, ExtensionKey::Collation, &["emoji", "eor"]),
    Override {
        locale: ROOT,
        key: ExtensionKey::HourCycle,
        default: Some("h23"),
        extra: &["h11", "h12", "h23", "h24"],
    },
    Override {
        locale: ROOT,
        key: ExtensionKey::CaseFirst,
        default: Some("false"),
        extra: &["false", "lower", "upper"],
    },
    Override {
        locale: ROOT,
        key: ExtensionKey::Numeric,
        default: Some("false"),
        extra: &["false", "true"],
    },
    Override {
        locale: ROOT,
        key: ExtensionKey::NumberingSystem,
        default: Some("latn"),
        extra: NUMBERING_SYSTEMS,
    },
    set_default("ar", ExtensionKey::NumberingSystem, "arab"),
    set_default("ar", ExtensionKey::HourCycle, "h12"),
    set_default("ar-SA", ExtensionKey::Calendar, "islamic-umalqura"),
    set_default("da", ExtensionKey::CaseFirst, "upper"),
    add_values("de", ExtensionKey::Collation, &["phonebk"]),
    set_default("en", ExtensionKey::HourCycle, "h12"),
    set_default("en-GB", ExtensionKey::HourCycle, "h23"),
    add_values("es", ExtensionKey::Collation, &["trad"]),
    set_default("fa", ExtensionKey::Calendar, "persian"),
    set_default("fa", ExtensionKey::NumberingSystem, "arabext"),
    set_default("hi", ExtensionKey::HourCycle, "h12"),
    add_values("ja", ExtensionKey::Collation, &["unihan"]),
    set_default("ko", ExtensionKey::HourCycle, "h12"),
    add_values("sv", ExtensionKey::Collation, &["trad"]),
    set_default("th", ExtensionKey::Calendar, "buddhist"),
    add_values(
        "zh",
        ExtensionKey::Collation,
        &["big5han", "gb2312", "pinyin", "stroke", "unihan", "zhuyin"],
    ),
    set_default("zh-Hant-TW", ExtensionKey::HourCycle, "h12"),
];

/// Resolved keyword data for one key of one locale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct KeywordData {
    pub(crate) default: Option<String>,
    pub(crate) values: Vec<String>,
}

/// Resolved keyword data for every key of one locale.
pub(crate) type LocaleKeywords = BTreeMap<ExtensionKey, KeywordData>;

/// The inheritance chain of `locale`, nearest first, ending at the root.
pub(crate) fn parent_chain(locale: &str) -> Vec<&str> {
    let mut chain = vec![locale];
    let mut current = locale;
    while let Some((parent, _)) = current.rsplit_once('-') {
        chain.push(parent);
        current = parent;
    }
    chain.push(ROOT);
    chain
}

/// Folds the override rows along `locale`'s parent chain.
pub(crate) fn resolve_keywords(locale: &str) -> LocaleKeywords {
    let chain = parent_chain(locale);
    ExtensionKey::ALL
        .into_iter()
        .map(|key| {
            let rows = chain
                .iter()
                .flat_map(|link| {
                    OVERRIDES
                        .iter()
                        .filter(move |row| row.locale == *link && row.key == key)
                })
                .collect::<Vec<_>>();
            let default = rows
                .iter()
                .find_map(|row| row.default)
                .map(str::to_owned);
            let mut values = rows
                .iter()
                .flat_map(|row| row.extra.iter())
                .map(|value| (*value).to_owned())
                .collect::<Vec<_>>();
            values.sort_unstable();
            values.dedup();
            (key, KeywordData { default, values })
        })
        .collect()
}
