//! Canonical form for parsed locale identifiers.
//!
//! Canonicalisation replaces deprecated subtags using the supplied
//! [`AliasData`], sorts variants, deduplicates and sorts `-u-` attributes and
//! keywords (first occurrence of a key wins), drops `true` type values,
//! lowercases the `-t-` language and sorts its fields, and orders extensions
//! by singleton with private use last.
//! Applying it twice yields the same tag.

use log::trace;

use super::locale_id::{Extension, Keyword, LanguageId, LocaleId, UnicodeExtension};
use crate::error::{IntlError, IntlResult};
use crate::provider::AliasData;

const TRUE_VALUE: &str = "true";

/// Parses and canonicalises `tag` in one step.
///
/// Callers are expected to have checked structural validity already; a
/// malformed tag is reported as [`IntlError::InvalidLanguageTag`].
///
/// ```
/// use concord_common::provider::NoAliases;
/// use concord_common::tag::canonicalize_unicode_locale_id;
///
/// let tag = canonicalize_unicode_locale_id("EN-latn-us-u-NU-thai-ca-gregory", &NoAliases);
/// assert_eq!(tag.as_deref(), Ok("en-Latn-US-u-ca-gregory-nu-thai"));
/// ```
pub fn canonicalize_unicode_locale_id(tag: &str, aliases: &impl AliasData) -> IntlResult<String> {
    let mut locale = LocaleId::parse(tag).ok_or_else(|| IntlError::invalid_tag(tag))?;
    locale.canonicalize(aliases);
    Ok(locale.to_string())
}

impl LocaleId {
    /// Rewrites this identifier into canonical form in place.
    pub fn canonicalize(&mut self, aliases: &impl AliasData) {
        canonicalize_language_id(&mut self.id, aliases);

        for extension in &mut self.extensions {
            match extension {
                Extension::Unicode(unicode) => canonicalize_unicode_extension(unicode, aliases),
                Extension::Transformed(transformed) => {
                    if let Some(language) = &mut transformed.language {
                        canonicalize_language_id(language, aliases);
                        lowercase_language_id(language);
                    }
                    let mut seen: Vec<String> = Vec::new();
                    transformed.fields.retain(|field| {
                        if seen.contains(&field.key) {
                            return false;
                        }
                        seen.push(field.key.clone());
                        true
                    });
                    transformed
                        .fields
                        .sort_by(|left, right| left.key.cmp(&right.key));
                }
                Extension::Other(_) => {}
            }
        }
        self.extensions.sort_by_key(Extension::singleton);
    }
}

fn canonicalize_language_id(id: &mut LanguageId, aliases: &impl AliasData) {
    if let Some(alias) = aliases.language_alias(&id.language) {
        trace!(
            target: "tag::canonicalizer",
            "replacing language `{}` with `{}`",
            id.language,
            alias.language,
        );
        id.language = alias.language.to_owned();
        if id.script.is_none() {
            id.script = alias.script.map(str::to_owned);
        }
        if id.region.is_none() {
            id.region = alias.region.map(str::to_owned);
        }
    }

    if let Some(region) = id.region.as_deref() {
        if let Some(replacement) = aliases.region_alias(region) {
            id.region = Some(replacement.to_owned());
        }
    }

    for variant in &mut id.variants {
        if let Some(replacement) = aliases.variant_alias(variant) {
            *variant = replacement.to_owned();
        }
    }
    id.variants.sort_unstable();
    id.variants.dedup();
}

/// A `tlang` is written entirely in lowercase, script and region included.
fn lowercase_language_id(id: &mut LanguageId) {
    if let Some(script) = &mut id.script {
        script.make_ascii_lowercase();
    }
    if let Some(region) = &mut id.region {
        region.make_ascii_lowercase();
    }
}

/// Sorts and deduplicates attributes and keywords, resolving value aliases.
fn canonicalize_unicode_extension(
    extension: &mut UnicodeExtension,
    aliases: &impl AliasData,
) {
    extension.attributes.sort_unstable();
    extension.attributes.dedup();

    let mut keywords: Vec<Keyword> = Vec::with_capacity(extension.keywords.len());
    for keyword in extension.keywords.drain(..) {
        if keywords.iter().any(|existing| existing.key == keyword.key) {
            continue;
        }
        let value = canonicalize_keyword_value(&keyword.key, &keyword.value, aliases);
        keywords.push(Keyword {
            key: keyword.key,
            value,
        });
    }
    keywords.sort_by(|left, right| left.key.cmp(&right.key));
    extension.keywords = keywords;
}

/// Lowercases `value`, applies the alias table, and elides `true`.
///
/// ```
/// use concord_common::provider::NoAliases;
/// use concord_common::tag::canonicalize_keyword_value;
///
/// assert_eq!(canonicalize_keyword_value("kn", "TRUE", &NoAliases), "");
/// assert_eq!(canonicalize_keyword_value("ca", "Gregory", &NoAliases), "gregory");
/// ```
#[must_use]
pub fn canonicalize_keyword_value(key: &str, value: &str, aliases: &impl AliasData) -> String {
    let lowered = value.to_ascii_lowercase();
    let resolved = aliases
        .keyword_value_alias(key, &lowered)
        .map_or(lowered.clone(), str::to_owned);
    if resolved == TRUE_VALUE {
        String::new()
    } else {
        resolved
    }
}
