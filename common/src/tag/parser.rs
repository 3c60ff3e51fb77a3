//! Structural grammar check for `unicode_locale_id` tags.
//!
//! The parser accepts exactly the BCP 47 subset that Unicode locale
//! identifiers allow: no grandfathered or extlang forms, no duplicate variants,
//! and no repeated extension singletons. Case is normalised as subtags are
//! consumed.

use std::iter::Peekable;
use std::str::Split;

use super::locale_id::{
    Extension, Keyword, LanguageId, LocaleId, OtherExtension, TransformedExtension,
    TransformedField, UnicodeExtension,
};
use super::subtags::{
    is_attribute, is_language_subtag, is_other_extension_subtag, is_private_use_subtag,
    is_region_subtag, is_script_subtag, is_singleton, is_transformed_key,
    is_transformed_value_subtag, is_unicode_key, is_unicode_type_subtag, is_variant_subtag,
    to_title_case,
};

type Subtags<'a> = Peekable<Split<'a, char>>;

/// Returns whether `tag` is a well-formed Unicode locale identifier.
///
/// This is a grammar check only; no registry or alias table is consulted.
///
/// ```
/// use concord_common::tag::is_structurally_valid_language_tag;
///
/// assert!(is_structurally_valid_language_tag("zh-Hant-TW-u-ca-chinese"));
/// assert!(!is_structurally_valid_language_tag("en-a"));
/// assert!(!is_structurally_valid_language_tag("en-u"));
/// ```
#[must_use]
pub fn is_structurally_valid_language_tag(tag: &str) -> bool {
    LocaleId::parse(tag).is_some()
}

impl LocaleId {
    /// Parses `tag`, returning `None` when it violates the grammar.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        if tag.is_empty() || !tag.is_ascii() {
            return None;
        }

        let mut subtags = tag.split('-').peekable();
        let id = parse_language_id(&mut subtags)?;
        let mut extensions: Vec<Extension> = Vec::new();
        let mut private_use = Vec::new();

        while let Some(subtag) = subtags.next() {
            if !is_singleton(subtag) {
                return None;
            }
            let singleton = subtag.to_ascii_lowercase().chars().next()?;
            if singleton == 'x' {
                private_use = parse_private_use(&mut subtags)?;
                break;
            }
            if extensions
                .iter()
                .any(|extension| extension.singleton() == singleton)
            {
                return None;
            }
            let extension = match singleton {
                'u' => Extension::Unicode(parse_unicode_extension(&mut subtags)?),
                't' => Extension::Transformed(parse_transformed_extension(&mut subtags)?),
                _ => Extension::Other(parse_other_extension(singleton, &mut subtags)?),
            };
            extensions.push(extension);
        }

        if subtags.next().is_some() {
            return None;
        }

        Some(Self {
            id,
            extensions,
            private_use,
        })
    }
}

fn take_if<'a>(subtags: &mut Subtags<'a>, predicate: fn(&str) -> bool) -> Option<&'a str> {
    subtags.next_if(|subtag| predicate(subtag))
}

fn parse_language_id(subtags: &mut Subtags<'_>) -> Option<LanguageId> {
    let language = take_if(subtags, is_language_subtag)?.to_ascii_lowercase();
    let script = take_if(subtags, is_script_subtag).map(to_title_case);
    let region = take_if(subtags, is_region_subtag).map(str::to_ascii_uppercase);

    let mut variants: Vec<String> = Vec::new();
    while let Some(subtag) = take_if(subtags, is_variant_subtag) {
        let variant = subtag.to_ascii_lowercase();
        if variants.contains(&variant) {
            return None;
        }
        variants.push(variant);
    }

    Some(LanguageId {
        language,
        script,
        region,
        variants,
    })
}

fn collect_joined(subtags: &mut Subtags<'_>, predicate: fn(&str) -> bool) -> String {
    let mut parts = Vec::new();
    while let Some(part) = take_if(subtags, predicate) {
        parts.push(part.to_ascii_lowercase());
    }
    parts.join("-")
}

fn parse_unicode_extension(subtags: &mut Subtags<'_>) -> Option<UnicodeExtension> {
    let mut extension = UnicodeExtension::default();

    while let Some(attribute) = take_if(subtags, is_attribute) {
        extension.attributes.push(attribute.to_ascii_lowercase());
    }
    while let Some(key) = take_if(subtags, is_unicode_key) {
        let value = collect_joined(subtags, is_unicode_type_subtag);
        extension.keywords.push(Keyword {
            key: key.to_ascii_lowercase(),
            value,
        });
    }

    (!extension.is_empty()).then_some(extension)
}

fn parse_transformed_extension(subtags: &mut Subtags<'_>) -> Option<TransformedExtension> {
    let language = if subtags.peek().is_some_and(|next| is_language_subtag(next)) {
        Some(parse_language_id(subtags)?)
    } else {
        None
    };

    let mut fields = Vec::new();
    while let Some(key) = take_if(subtags, is_transformed_key) {
        let value = collect_joined(subtags, is_transformed_value_subtag);
        if value.is_empty() {
            return None;
        }
        fields.push(TransformedField {
            key: key.to_ascii_lowercase(),
            value,
        });
    }

    if language.is_none() && fields.is_empty() {
        return None;
    }
    Some(TransformedExtension { language, fields })
}

fn parse_other_extension(singleton: char, subtags: &mut Subtags<'_>) -> Option<OtherExtension> {
    let value = collect_joined(subtags, is_other_extension_subtag);
    (!value.is_empty()).then_some(OtherExtension { singleton, value })
}

fn parse_private_use(subtags: &mut Subtags<'_>) -> Option<Vec<String>> {
    let mut parts = Vec::new();
    for subtag in subtags.by_ref() {
        if !is_private_use_subtag(subtag) {
            return None;
        }
        parts.push(subtag.to_ascii_lowercase());
    }
    (!parts.is_empty()).then_some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en")]
    #[case("EN-us")]
    #[case("de-DE-1901")]
    #[case("sl-rozaj-biske")]
    #[case("zh-Hant-TW")]
    #[case("es-419")]
    #[case("en-u-ca-gregory")]
    #[case("en-u-attr-ca-gregory-nu")]
    #[case("en-t-ja-m0-names")]
    #[case("und-t-m0-true")]
    #[case("en-a-bcd-u-nu-thai")]
    #[case("en-x-private")]
    #[case("en-x-u-ca")]
    #[case("posix")]
    fn accepts_well_formed_tags(#[case] tag: &str) {
        assert!(is_structurally_valid_language_tag(tag), "{tag} should parse");
    }

    #[rstest]
    #[case("")]
    #[case("e")]
    #[case("en-")]
    #[case("-en")]
    #[case("en--US")]
    #[case("en_US")]
    #[case("en-a")]
    #[case("en-u")]
    #[case("en-u-c")]
    #[case("en-t")]
    #[case("en-t-m0")]
    #[case("en-x")]
    #[case("de-1901-1901")]
    #[case("en-u-ca-gregory-u-nu-latn")]
    #[case("en-US-US")]
    #[case("x-private")]
    #[case("i-klingon")]
    #[case("root")]
    #[case("en-a-b-c")]
    #[case("ab-cdefghijk")]
    #[case("en-\u{e9}")]
    fn rejects_malformed_tags(#[case] tag: &str) {
        assert!(!is_structurally_valid_language_tag(tag), "{tag} should fail");
    }

    #[rstest]
    fn normalises_case_while_parsing() {
        let locale = LocaleId::parse("ZH-hant-tw-U-CA-Chinese-X-Foo").unwrap_or_default();

        assert_eq!(locale.to_string(), "zh-Hant-TW-u-ca-chinese-x-foo");
    }

    #[rstest]
    fn keeps_multi_subtag_keyword_values_together() {
        let locale = LocaleId::parse("ar-u-ca-islamic-civil-nu-arab").unwrap_or_default();
        let extension = locale.unicode_extension().cloned().unwrap_or_default();

        assert_eq!(
            extension.keywords,
            vec![
                Keyword::new("ca", "islamic-civil"),
                Keyword::new("nu", "arab")
            ]
        );
    }

    #[rstest]
    fn parses_transformed_language_and_fields() {
        let locale = LocaleId::parse("ja-t-en-US-m0-names").unwrap_or_default();

        match locale.extensions.first() {
            Some(Extension::Transformed(transformed)) => {
                assert_eq!(
                    transformed.language.as_ref().map(ToString::to_string),
                    Some("en-US".to_owned())
                );
                assert_eq!(transformed.fields.len(), 1);
            }
            other => panic!("expected a transformed extension, got {other:?}"),
        }
    }
}
