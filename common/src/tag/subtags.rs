//! Character-class predicates for individual subtags.
//!
//! Every predicate is ASCII-only and case-insensitive; callers normalise case
//! separately.

fn all_alpha(subtag: &str) -> bool {
    !subtag.is_empty() && subtag.bytes().all(|byte| byte.is_ascii_alphabetic())
}

fn all_digit(subtag: &str) -> bool {
    !subtag.is_empty() && subtag.bytes().all(|byte| byte.is_ascii_digit())
}

fn all_alphanum(subtag: &str) -> bool {
    !subtag.is_empty() && subtag.bytes().all(|byte| byte.is_ascii_alphanumeric())
}

fn alphanum_between(subtag: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&subtag.len()) && all_alphanum(subtag)
}

/// `unicode_language_subtag = alpha{2,3} | alpha{5,8}`
#[must_use]
pub fn is_language_subtag(subtag: &str) -> bool {
    matches!(subtag.len(), 2 | 3 | 5..=8) && all_alpha(subtag)
}

/// `unicode_script_subtag = alpha{4}`
#[must_use]
pub fn is_script_subtag(subtag: &str) -> bool {
    subtag.len() == 4 && all_alpha(subtag)
}

/// `unicode_region_subtag = alpha{2} | digit{3}`
#[must_use]
pub fn is_region_subtag(subtag: &str) -> bool {
    (subtag.len() == 2 && all_alpha(subtag)) || (subtag.len() == 3 && all_digit(subtag))
}

/// `unicode_variant_subtag = alphanum{5,8} | digit alphanum{3}`
#[must_use]
pub fn is_variant_subtag(subtag: &str) -> bool {
    if alphanum_between(subtag, 5, 8) {
        return true;
    }
    subtag.len() == 4
        && all_alphanum(subtag)
        && subtag.bytes().next().is_some_and(|byte| byte.is_ascii_digit())
}

/// A single alphanumeric character introducing an extension or private use.
#[must_use]
pub fn is_singleton(subtag: &str) -> bool {
    subtag.len() == 1 && all_alphanum(subtag)
}

/// `attribute = alphanum{3,8}`
#[must_use]
pub fn is_attribute(subtag: &str) -> bool {
    alphanum_between(subtag, 3, 8)
}

/// `key = alphanum alpha`
#[must_use]
pub const fn is_unicode_key(subtag: &str) -> bool {
    let bytes = subtag.as_bytes();
    match bytes {
        [first, second] => first.is_ascii_alphanumeric() && second.is_ascii_alphabetic(),
        _ => false,
    }
}

/// One subtag of a `type` sequence: `alphanum{3,8}`.
#[must_use]
pub fn is_unicode_type_subtag(subtag: &str) -> bool {
    alphanum_between(subtag, 3, 8)
}

/// `tkey = alpha digit`
#[must_use]
pub const fn is_transformed_key(subtag: &str) -> bool {
    let bytes = subtag.as_bytes();
    match bytes {
        [first, second] => first.is_ascii_alphabetic() && second.is_ascii_digit(),
        _ => false,
    }
}

/// One subtag of a `tvalue`: `alphanum{3,8}`.
#[must_use]
pub fn is_transformed_value_subtag(subtag: &str) -> bool {
    alphanum_between(subtag, 3, 8)
}

/// One subtag of an `other_extensions` body: `alphanum{2,8}`.
#[must_use]
pub fn is_other_extension_subtag(subtag: &str) -> bool {
    alphanum_between(subtag, 2, 8)
}

/// One subtag of a private-use sequence: `alphanum{1,8}`.
#[must_use]
pub fn is_private_use_subtag(subtag: &str) -> bool {
    alphanum_between(subtag, 1, 8)
}

/// Checks a complete Unicode extension `type` value such as `islamic-civil`.
///
/// ```
/// use concord_common::tag::is_well_formed_unicode_type;
///
/// assert!(is_well_formed_unicode_type("islamic-civil"));
/// assert!(!is_well_formed_unicode_type("ab"));
/// assert!(!is_well_formed_unicode_type("gregory-"));
/// ```
#[must_use]
pub fn is_well_formed_unicode_type(value: &str) -> bool {
    value.split('-').all(is_unicode_type_subtag)
}

pub(crate) fn to_title_case(subtag: &str) -> String {
    let mut chars = subtag.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut titled = String::with_capacity(subtag.len());
        titled.push(first.to_ascii_uppercase());
        titled.push_str(&chars.as_str().to_ascii_lowercase());
        titled
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", true)]
    #[case("haw", true)]
    #[case("abcde", true)]
    #[case("abcd", false)]
    #[case("e", false)]
    #[case("e1", false)]
    #[case("abcdefghi", false)]
    fn classifies_language_subtags(#[case] subtag: &str, #[case] expected: bool) {
        assert_eq!(is_language_subtag(subtag), expected);
    }

    #[rstest]
    #[case("US", true)]
    #[case("419", true)]
    #[case("U1", false)]
    #[case("41", false)]
    fn classifies_region_subtags(#[case] subtag: &str, #[case] expected: bool) {
        assert_eq!(is_region_subtag(subtag), expected);
    }

    #[rstest]
    #[case("1901", true)]
    #[case("valencia", true)]
    #[case("posix", true)]
    #[case("abcd", false)]
    #[case("a123", false)]
    fn classifies_variant_subtags(#[case] subtag: &str, #[case] expected: bool) {
        assert_eq!(is_variant_subtag(subtag), expected);
    }

    #[rstest]
    #[case("ca", true)]
    #[case("1a", true)]
    #[case("a1", false)]
    #[case("cal", false)]
    fn classifies_unicode_keys(#[case] subtag: &str, #[case] expected: bool) {
        assert_eq!(is_unicode_key(subtag), expected);
    }

    #[rstest]
    fn title_cases_scripts() {
        assert_eq!(to_title_case("hANT"), "Hant");
        assert_eq!(to_title_case(""), "");
    }
}
