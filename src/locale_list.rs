//! Canonicalisation of requested locale lists.

use concord_common::{
    AliasData, IntlError, IntlResult, LocaleData, canonicalize_unicode_locale_id,
    is_structurally_valid_language_tag,
};
use log::trace;

use crate::config::LimitsConfig;
use crate::negotiator::Negotiator;
use crate::value::{PropertyBag, Value};

/// Turns a `locales` argument into a list of distinct canonical tags.
///
/// A string or locale object is treated as a one-element list; `undefined`
/// yields an empty list. Duplicates are dropped, keeping the first
/// occurrence. The first invalid element aborts the whole call.
///
/// # Errors
///
/// - [`IntlError::NotCoercible`] when `locales` is `null`.
/// - [`IntlError::InvalidLocaleValue`] for an element that is neither a
///   string nor an object.
/// - [`IntlError::InvalidLanguageTag`] for a structurally invalid tag.
/// - [`IntlError::TagTooLong`] and [`IntlError::ListTooLong`] when `limits`
///   are exceeded.
///
/// ```
/// use concord::{LimitsConfig, Value};
/// use concord::locale_list::canonicalize_locale_list;
/// use concord_common::NoAliases;
///
/// let tags = canonicalize_locale_list(
///     &Value::from(["EN-us", "en-US", "fr"]),
///     &NoAliases,
///     LimitsConfig::default(),
/// )?;
/// assert_eq!(tags, ["en-US", "fr"]);
/// # Ok::<(), concord::IntlError>(())
/// ```
pub fn canonicalize_locale_list(
    locales: &Value,
    aliases: &impl AliasData,
    limits: LimitsConfig,
) -> IntlResult<Vec<String>> {
    let elements = list_elements(locales, limits)?;

    let mut seen: Vec<String> = Vec::with_capacity(elements.len());
    for element in elements {
        let tag = match element {
            Value::Locale(tag) | Value::String(tag) => tag,
            other if other.is_object() => other.to_string(),
            _ => return Err(IntlError::InvalidLocaleValue),
        };
        if tag.len() > limits.max_tag_length {
            return Err(IntlError::TagTooLong {
                length: tag.len(),
                limit: limits.max_tag_length,
            });
        }
        if !is_structurally_valid_language_tag(&tag) {
            return Err(IntlError::InvalidLanguageTag { tag });
        }
        let canonical = canonicalize_unicode_locale_id(&tag, aliases)?;
        trace!(target: "locale_list", "canonicalised `{tag}` to `{canonical}`");
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    Ok(seen)
}

impl<D: LocaleData> Negotiator<'_, D> {
    /// [`canonicalize_locale_list`] against this negotiator's aliases and
    /// configured limits.
    ///
    /// # Errors
    ///
    /// As [`canonicalize_locale_list`].
    pub fn canonicalize_locale_list(&self, locales: &Value) -> IntlResult<Vec<String>> {
        canonicalize_locale_list(locales, self.data(), self.config().limits)
    }
}

/// Flattens the argument into the elements to canonicalise.
fn list_elements(locales: &Value, limits: LimitsConfig) -> IntlResult<Vec<Value>> {
    let elements = match locales {
        Value::Undefined => Vec::new(),
        Value::String(_) | Value::Locale(_) => vec![locales.clone()],
        Value::List(items) => {
            if items.len() > limits.max_list_length {
                return Err(IntlError::ListTooLong {
                    limit: limits.max_list_length,
                });
            }
            items.clone()
        }
        other => {
            let object = other.clone().to_object()?;
            let length = array_length(&object.get("length"));
            if length > limits.max_list_length {
                return Err(IntlError::ListTooLong {
                    limit: limits.max_list_length,
                });
            }
            (0..length)
                .map(|index| index.to_string())
                .filter(|key| object.has_own(key))
                .map(|key| object.get(&key))
                .collect()
        }
    };
    Ok(elements)
}

/// `ToLength`, saturating at `usize::MAX`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is a positive integer below u32::MAX"
)]
fn array_length(value: &Value) -> usize {
    let number = value.to_number();
    if number.is_nan() || number <= 0.0 {
        return 0;
    }
    let floored = number.floor();
    if floored >= f64::from(u32::MAX) {
        return usize::MAX;
    }
    floored as usize
}
