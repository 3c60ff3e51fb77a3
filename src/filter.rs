//! Filtering a requested list down to the supported entries.

use concord_common::{IntlResult, LocaleData};
use log::trace;

use crate::getters::{coerce_options_to_object, get_string_option};
use crate::matcher::{LocaleMatcher, find_matching_locale};
use crate::negotiator::Negotiator;
use crate::value::Value;

impl<D: LocaleData> Negotiator<'_, D> {
    /// Keeps each canonicalised requested tag that matches some supported
    /// locale, in request order.
    ///
    /// Kept entries are the requested tags themselves, extensions included,
    /// not the supported locales they matched. `options` is coerced to an
    /// object and only `localeMatcher` is read from it.
    ///
    /// # Errors
    ///
    /// - Any error of [`canonicalize_locale_list`](Self::canonicalize_locale_list).
    /// - [`concord_common::IntlError::NotCoercible`] for `null` options.
    /// - [`concord_common::IntlError::InvalidOptionValue`] for an unknown
    ///   `localeMatcher`.
    ///
    /// ```
    /// use concord::{Negotiator, Value};
    ///
    /// let negotiator = Negotiator::bundled();
    /// let requested = Value::from(["tlh", "de-AT-u-co-phonebk"]);
    /// let kept = negotiator.filter_locales(&requested, Value::Undefined)?;
    /// assert_eq!(kept, ["de-AT-u-co-phonebk"]);
    /// # Ok::<(), concord::IntlError>(())
    /// ```
    pub fn filter_locales(&self, locales: &Value, options: Value) -> IntlResult<Vec<String>> {
        let requested = self.canonicalize_locale_list(locales)?;
        let object = coerce_options_to_object(options)?;
        let matcher = get_string_option(
            &object,
            "localeMatcher",
            &LocaleMatcher::VALUES,
            Some(LocaleMatcher::BestFit.as_str()),
        )?
        .and_then(|name| name.parse().ok())
        .unwrap_or_default();

        let kept = requested
            .into_iter()
            .filter(|locale| {
                let found =
                    find_matching_locale(self.data(), std::slice::from_ref(locale), matcher);
                trace!(
                    target: "filter",
                    "`{locale}` {}",
                    if found.is_some() { "kept" } else { "dropped" },
                );
                found.is_some()
            })
            .collect();
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::OptionsObject;
    use concord_common::IntlError;
    use concord_common::test_support::FakeLocaleData;
    use rstest::{fixture, rstest};

    #[fixture]
    fn data() -> FakeLocaleData {
        FakeLocaleData::new(&["en", "en-GB", "de", "zh-Hant-TW"], "en")
            .with_language_alias("iw", "he", None, None)
    }

    fn lookup() -> Value {
        Value::from(OptionsObject::new().with("localeMatcher", "lookup"))
    }

    #[rstest]
    #[case(Value::from(["fr", "en-US", "de-u-co-phonebk"]), vec!["en-US", "de-u-co-phonebk"])]
    #[case(Value::from(["EN-gb", "en-gb", "ja"]), vec!["en-GB"])]
    #[case(Value::Undefined, vec![])]
    #[case(Value::from(["zh-TW"]), vec![])]
    fn keeps_requested_tags_with_a_lookup_match(
        data: FakeLocaleData,
        #[case] locales: Value,
        #[case] expected: Vec<&str>,
    ) {
        let kept = Negotiator::new(&data).filter_locales(&locales, lookup());

        assert_eq!(kept, Ok(expected.into_iter().map(str::to_owned).collect()));
    }

    #[rstest]
    fn best_fit_keeps_likely_subtag_matches(data: FakeLocaleData) {
        let kept = Negotiator::new(&data)
            .filter_locales(&Value::from(["zh-TW", "iw"]), Value::Undefined);

        assert_eq!(kept, Ok(vec!["zh-TW".to_owned()]));
    }

    #[rstest]
    #[case(Value::Null, IntlError::NotCoercible { value: "null" })]
    #[case(
        Value::from(OptionsObject::new().with("localeMatcher", "exact")),
        IntlError::InvalidOptionValue {
            property: "localeMatcher".to_owned(),
            value: "exact".to_owned(),
        }
    )]
    fn rejects_unusable_options(
        data: FakeLocaleData,
        #[case] options: Value,
        #[case] expected: IntlError,
    ) {
        let outcome = Negotiator::new(&data).filter_locales(&Value::from("en"), options);

        assert_eq!(outcome, Err(expected));
    }

    #[rstest]
    fn primitive_options_are_coerced(data: FakeLocaleData) {
        let kept = Negotiator::new(&data).filter_locales(&Value::from("de-CH"), Value::from(7));

        assert_eq!(kept, Ok(vec!["de-CH".to_owned()]));
    }
}
