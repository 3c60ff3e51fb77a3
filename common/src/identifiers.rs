//! Validators for currency codes, unit identifiers, and time-zone names.
//!
//! Each identifier kind has its own narrow grammar and none of them depends on
//! the language tag machinery.

/// Simple units every host must accept, sorted for binary search.
const SANCTIONED_UNITS: &[&str] = &[
    "acre",
    "bit",
    "byte",
    "celsius",
    "centimeter",
    "day",
    "degree",
    "fahrenheit",
    "fluid-ounce",
    "foot",
    "gallon",
    "gigabit",
    "gigabyte",
    "gram",
    "hectare",
    "hour",
    "inch",
    "kilobit",
    "kilobyte",
    "kilogram",
    "kilometer",
    "liter",
    "megabit",
    "megabyte",
    "meter",
    "microsecond",
    "mile",
    "mile-scandinavian",
    "milliliter",
    "millimeter",
    "millisecond",
    "minute",
    "month",
    "nanosecond",
    "ounce",
    "percent",
    "petabyte",
    "pound",
    "second",
    "stone",
    "terabit",
    "terabyte",
    "week",
    "yard",
    "year",
];

const PER_SEPARATOR: &str = "-per-";

/// Returns whether `code` is three ASCII letters, in any case.
///
/// ```
/// use concord_common::identifiers::is_well_formed_currency_code;
///
/// assert!(is_well_formed_currency_code("USD"));
/// assert!(is_well_formed_currency_code("eur"));
/// assert!(!is_well_formed_currency_code("US"));
/// assert!(!is_well_formed_currency_code("usd1"));
/// ```
#[must_use]
pub fn is_well_formed_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|byte| byte.is_ascii_alphabetic())
}

/// Uppercases a well-formed currency code.
#[must_use]
pub fn canonicalize_currency_code(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Whether `unit` is one of the sanctioned simple units.
#[must_use]
pub fn is_sanctioned_simple_unit(unit: &str) -> bool {
    SANCTIONED_UNITS.binary_search(&unit).is_ok()
}

/// Returns whether `unit` is a simple unit or a `<simple>-per-<simple>` compound.
///
/// Compounds do not nest: both sides of `-per-` must be simple units.
///
/// ```
/// use concord_common::identifiers::is_well_formed_unit_identifier;
///
/// assert!(is_well_formed_unit_identifier("meter"));
/// assert!(is_well_formed_unit_identifier("meter-per-second"));
/// assert!(!is_well_formed_unit_identifier("meter-per-second-per-hour"));
/// ```
#[must_use]
pub fn is_well_formed_unit_identifier(unit: &str) -> bool {
    if is_sanctioned_simple_unit(unit) {
        return true;
    }
    unit.split_once(PER_SEPARATOR)
        .is_some_and(|(numerator, denominator)| {
            is_sanctioned_simple_unit(numerator) && is_sanctioned_simple_unit(denominator)
        })
}

/// A named time zone with its known aliases.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeZoneIdentifier {
    identifier: String,
    aliases: Vec<String>,
}

impl TimeZoneIdentifier {
    /// Builds an entry from its canonical name and aliases.
    #[must_use]
    pub fn new(identifier: &str, aliases: &[&str]) -> Self {
        Self {
            identifier: identifier.to_owned(),
            aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
        }
    }

    /// The canonical IANA name, e.g. `Asia/Kolkata`.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Other names that resolve to this zone, e.g. `Asia/Calcutta`.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Case-insensitive match against the canonical name or any alias.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.identifier.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// Finds the entry in `table` whose name or alias matches `name`.
#[must_use]
pub fn find_time_zone<'a>(
    table: &'a [TimeZoneIdentifier],
    name: &str,
) -> Option<&'a TimeZoneIdentifier> {
    table.iter().find(|zone| zone.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sanctioned_units_are_sorted() {
        assert!(SANCTIONED_UNITS.windows(2).all(|pair| match pair {
            [left, right] => left < right,
            _ => true,
        }));
    }

    #[rstest]
    #[case("USD", true)]
    #[case("jPy", true)]
    #[case("US", false)]
    #[case("usd1", false)]
    #[case("US$", false)]
    #[case("", false)]
    fn checks_currency_codes(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_well_formed_currency_code(code), expected);
    }

    #[rstest]
    #[case("percent", true)]
    #[case("mile-scandinavian", true)]
    #[case("kilometer-per-hour", true)]
    #[case("liter-per-kilometer", true)]
    #[case("meter-per-second-per-hour", false)]
    #[case("meter-per-", false)]
    #[case("-per-second", false)]
    #[case("Meter", false)]
    #[case("lightyear", false)]
    fn checks_unit_identifiers(#[case] unit: &str, #[case] expected: bool) {
        assert_eq!(is_well_formed_unit_identifier(unit), expected);
    }

    #[rstest]
    #[case("asia/calcutta", Some("Asia/Kolkata"))]
    #[case("ASIA/KOLKATA", Some("Asia/Kolkata"))]
    #[case("Europe/Nowhere", None)]
    fn finds_time_zones_by_name_or_alias(#[case] name: &str, #[case] expected: Option<&str>) {
        let table = vec![
            TimeZoneIdentifier::new("Asia/Kolkata", &["Asia/Calcutta"]),
            TimeZoneIdentifier::new("UTC", &["Etc/UTC", "Etc/Zulu"]),
        ];

        assert_eq!(
            find_time_zone(&table, name).map(TimeZoneIdentifier::identifier),
            expected
        );
    }
}
