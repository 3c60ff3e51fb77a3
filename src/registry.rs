//! Registry membership checks for currencies and named time zones.

use concord_common::{
    LocaleData, TimeZoneIdentifier, canonicalize_currency_code, find_time_zone,
    is_well_formed_currency_code,
};
use log::trace;

use crate::negotiator::Negotiator;

impl<'d, D: LocaleData> Negotiator<'d, D> {
    /// Canonicalises `code` and confirms the provider registers it.
    ///
    /// Returns `None` when the code is malformed or names no registered
    /// currency.
    ///
    /// ```
    /// let negotiator = concord::Negotiator::bundled();
    /// assert_eq!(negotiator.registered_currency("eur").as_deref(), Some("EUR"));
    /// assert!(negotiator.registered_currency("XYZ").is_none());
    /// ```
    #[must_use]
    pub fn registered_currency(&self, code: &str) -> Option<String> {
        if !is_well_formed_currency_code(code) {
            return None;
        }
        let canonical = canonicalize_currency_code(code);
        let known = self.data().is_known_currency(&canonical);
        trace!(
            target: "registry",
            "currency `{canonical}` {}",
            if known { "registered" } else { "unknown" },
        );
        known.then_some(canonical)
    }

    /// Every named time zone the provider knows, sorted by identifier.
    #[must_use]
    pub fn available_named_time_zone_identifiers(&self) -> &'d [TimeZoneIdentifier] {
        self.data().time_zones()
    }

    /// Resolves `name`, case-insensitively and through aliases, to a time
    /// zone the provider knows.
    ///
    /// ```
    /// let negotiator = concord::Negotiator::bundled();
    /// let zone = negotiator.get_available_named_time_zone_identifier("asia/calcutta");
    /// assert_eq!(zone.map(|zone| zone.identifier()), Some("Asia/Kolkata"));
    /// ```
    #[must_use]
    pub fn get_available_named_time_zone_identifier(
        &self,
        name: &str,
    ) -> Option<&'d TimeZoneIdentifier> {
        find_time_zone(self.available_named_time_zone_identifiers(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_common::test_support::FakeLocaleData;
    use rstest::{fixture, rstest};

    #[fixture]
    fn data() -> FakeLocaleData {
        FakeLocaleData::new(&["en"], "en")
            .with_currencies(&["usd", "EUR"])
            .with_time_zone("Asia/Kolkata", &["Asia/Calcutta"])
            .with_time_zone("America/Los_Angeles", &["US/Pacific"])
    }

    #[rstest]
    #[case("USD", Some("USD"))]
    #[case("eur", Some("EUR"))]
    #[case("JPY", None)]
    #[case("US", None)]
    #[case("us1", None)]
    fn confirms_registered_currencies(
        data: FakeLocaleData,
        #[case] code: &str,
        #[case] expected: Option<&str>,
    ) {
        let negotiator = Negotiator::new(&data);

        assert_eq!(negotiator.registered_currency(code).as_deref(), expected);
    }

    #[rstest]
    #[case("Asia/Kolkata", Some("Asia/Kolkata"))]
    #[case("asia/calcutta", Some("Asia/Kolkata"))]
    #[case("US/PACIFIC", Some("America/Los_Angeles"))]
    #[case("Europe/Paris", None)]
    fn resolves_time_zones_through_the_provider(
        data: FakeLocaleData,
        #[case] name: &str,
        #[case] expected: Option<&str>,
    ) {
        let negotiator = Negotiator::new(&data);

        assert_eq!(
            negotiator
                .get_available_named_time_zone_identifier(name)
                .map(TimeZoneIdentifier::identifier),
            expected
        );
    }

    #[rstest]
    fn lists_the_provider_time_zones(data: FakeLocaleData) {
        let negotiator = Negotiator::new(&data);
        let identifiers: Vec<&str> = negotiator
            .available_named_time_zone_identifiers()
            .iter()
            .map(TimeZoneIdentifier::identifier)
            .collect();

        assert_eq!(identifiers, ["America/Los_Angeles", "Asia/Kolkata"]);
    }
}
