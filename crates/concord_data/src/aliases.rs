//! Deprecated-subtag replacement tables.
//!
//! Every table is sorted by its lookup key so lookups can binary search.
//! Replacements are canonical and never themselves aliased.

use concord_common::provider::LanguageAlias;

/// (alias, language, script, region)
type LanguageRow = (&'static str, &'static str, Option<&'static str>, Option<&'static str>);

const LANGUAGE_ALIASES: &[LanguageRow] = &[
    ("aam", "aas", None, None),
    ("aar", "aa", None, None),
    ("cmn", "zh", None, None),
    ("cnr", "sr", None, Some("ME")),
    ("deu", "de", None, None),
    ("eng", "en", None, None),
    ("fra", "fr", None, None),
    ("heb", "he", None, None),
    ("in", "id", None, None),
    ("iw", "he", None, None),
    ("ji", "yi", None, None),
    ("jw", "jv", None, None),
    ("mo", "ro", None, None),
    ("sh", "sr", Some("Latn"), None),
    ("swc", "sw", None, Some("CD")),
    ("tl", "fil", None, None),
    ("zho", "zh", None, None),
];

const REGION_ALIASES: &[(&str, &str)] = &[
    ("062", "034"),
    ("172", "RU"),
    ("200", "CZ"),
    ("280", "DE"),
    ("554", "NZ"),
    ("826", "GB"),
    ("840", "US"),
    ("BU", "MM"),
    ("CS", "RS"),
    ("DD", "DE"),
    ("FX", "FR"),
    ("SU", "RU"),
    ("TP", "TL"),
    ("UK", "GB"),
    ("YD", "YE"),
    ("YU", "RS"),
    ("ZR", "CD"),
];

const VARIANT_ALIASES: &[(&str, &str)] = &[("heploc", "alalc97"), ("polytoni", "polyton")];

/// (key, alias, replacement)
const KEYWORD_VALUE_ALIASES: &[(&str, &str, &str)] = &[
    ("ca", "ethiopic-amete-alem", "ethioaa"),
    ("ca", "islamicc", "islamic-civil"),
    ("co", "dictionary", "dict"),
    ("co", "gb2312han", "gb2312"),
    ("co", "phonebook", "phonebk"),
    ("co", "traditional", "trad"),
    ("kb", "yes", "true"),
    ("kc", "yes", "true"),
    ("kh", "yes", "true"),
    ("kk", "yes", "true"),
    ("kn", "yes", "true"),
    ("ks", "primary", "level1"),
    ("ks", "tertiary", "level3"),
    ("ms", "imperial", "uksystem"),
    ("tz", "cnckg", "cnsha"),
    ("tz", "eire", "iedub"),
    ("tz", "est", "utcw05"),
    ("tz", "gmt0", "gmt"),
    ("tz", "uct", "utc"),
    ("tz", "zulu", "utc"),
];

fn find_pair<'a>(table: &'a [(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    table
        .binary_search_by(|(alias, _)| (*alias).cmp(key))
        .ok()
        .and_then(|index| table.get(index))
        .map(|(_, replacement)| *replacement)
}

pub(crate) fn language(language: &str) -> Option<LanguageAlias<'static>> {
    let index = LANGUAGE_ALIASES
        .binary_search_by(|(alias, ..)| (*alias).cmp(language))
        .ok()?;
    LANGUAGE_ALIASES
        .get(index)
        .map(|&(_, replacement, script, region)| LanguageAlias {
            language: replacement,
            script,
            region,
        })
}

pub(crate) fn region(region: &str) -> Option<&'static str> {
    find_pair(REGION_ALIASES, region)
}

pub(crate) fn variant(variant: &str) -> Option<&'static str> {
    find_pair(VARIANT_ALIASES, variant)
}

pub(crate) fn keyword_value(key: &str, value: &str) -> Option<&'static str> {
    KEYWORD_VALUE_ALIASES
        .binary_search_by(|(row_key, alias, _)| (*row_key, *alias).cmp(&(key, value)))
        .ok()
        .and_then(|index| KEYWORD_VALUE_ALIASES.get(index))
        .map(|(_, _, replacement)| *replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_sorted<T: Ord>(keys: impl Iterator<Item = T>) -> bool {
        let collected = keys.collect::<Vec<_>>();
        collected.windows(2).all(|pair| match pair {
            [left, right] => left < right,
            _ => true,
        })
    }

    #[rstest]
    fn tables_are_sorted_for_binary_search() {
        assert!(is_sorted(LANGUAGE_ALIASES.iter().map(|row| row.0)));
        assert!(is_sorted(REGION_ALIASES.iter().map(|row| row.0)));
        assert!(is_sorted(VARIANT_ALIASES.iter().map(|row| row.0)));
        assert!(is_sorted(
            KEYWORD_VALUE_ALIASES.iter().map(|row| (row.0, row.1))
        ));
    }

    #[rstest]
    fn replacements_are_not_aliases_themselves() {
        assert!(
            LANGUAGE_ALIASES
                .iter()
                .all(|row| language(row.1).is_none())
        );
        assert!(REGION_ALIASES.iter().all(|row| region(row.1).is_none()));
        assert!(
            KEYWORD_VALUE_ALIASES
                .iter()
                .all(|row| keyword_value(row.0, row.2).is_none())
        );
    }

    #[rstest]
    #[case("sh", Some(("sr", Some("Latn"))))]
    #[case("iw", Some(("he", None)))]
    #[case("en", None)]
    fn looks_up_language_aliases(
        #[case] input: &str,
        #[case] expected: Option<(&str, Option<&str>)>,
    ) {
        assert_eq!(
            language(input).map(|alias| (alias.language, alias.script)),
            expected
        );
    }
}
