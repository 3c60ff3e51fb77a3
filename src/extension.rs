//! Re-composing a tag with a merged `-u-` extension.

use concord_common::tag::Extension;
use concord_common::{AliasData, Keyword, LocaleId, UnicodeExtension};

/// Merges `attributes` and `keywords` into the `-u-` extension of `locale`
/// and returns the canonical tag.
///
/// Caller-supplied attributes and keywords take precedence over entries the
/// tag already carries for the same attribute or key.
///
/// ```
/// use concord::extension::insert_unicode_extension_and_canonicalize;
/// use concord_common::{Keyword, LocaleId, NoAliases};
///
/// let locale = LocaleId::parse("de-DE-u-co-phonebk-ca-gregory").unwrap_or_default();
/// let tag = insert_unicode_extension_and_canonicalize(
///     locale,
///     Vec::new(),
///     vec![Keyword::new("ca", "buddhist")],
///     &NoAliases,
/// );
/// assert_eq!(tag, "de-DE-u-ca-buddhist-co-phonebk");
/// ```
#[must_use]
pub fn insert_unicode_extension_and_canonicalize(
    mut locale: LocaleId,
    attributes: Vec<String>,
    keywords: Vec<Keyword>,
    aliases: &impl AliasData,
) -> String {
    let existing = locale.remove_unicode_extension().unwrap_or_default();

    let mut merged = UnicodeExtension {
        attributes,
        keywords,
    };
    for attribute in existing.attributes {
        if !merged.attributes.contains(&attribute) {
            merged.attributes.push(attribute);
        }
    }
    for keyword in existing.keywords {
        if merged.keyword(&keyword.key).is_none() {
            merged.keywords.push(keyword);
        }
    }

    if !merged.is_empty() {
        locale.extensions.push(Extension::Unicode(merged));
    }
    locale.canonicalize(aliases);
    locale.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_common::NoAliases;
    use rstest::rstest;

    fn parse(tag: &str) -> LocaleId {
        LocaleId::parse(tag).unwrap_or_default()
    }

    #[rstest]
    #[case("en", &[], &[("ca", "gregory")], "en-u-ca-gregory")]
    #[case("en-u-nu-thai", &[], &[("ca", "gregory")], "en-u-ca-gregory-nu-thai")]
    #[case("en-u-ca-islamic", &[], &[("ca", "gregory")], "en-u-ca-gregory")]
    #[case("en-u-foo-ca-roc", &["bar", "foo"], &[], "en-u-bar-foo-ca-roc")]
    #[case("en-x-priv", &[], &[("kn", "true")], "en-u-kn-x-priv")]
    #[case("en-t-ja-a-abc", &[], &[("nu", "arab")], "en-a-abc-t-ja-u-nu-arab")]
    #[case("en-u-ca-roc", &[], &[], "en-u-ca-roc")]
    #[case("en", &[], &[], "en")]
    fn merges_and_canonicalizes(
        #[case] tag: &str,
        #[case] attributes: &[&str],
        #[case] keywords: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        let owned_attributes = attributes.iter().map(|value| (*value).to_owned()).collect();
        let owned_keywords = keywords
            .iter()
            .map(|(key, value)| Keyword::new(key, value))
            .collect();

        assert_eq!(
            insert_unicode_extension_and_canonicalize(
                parse(tag),
                owned_attributes,
                owned_keywords,
                &NoAliases
            ),
            expected
        );
    }
}
