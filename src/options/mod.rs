//! Options resolution: the shared front half of every Intl service
//! constructor.
//!
//! A service reads its option bag, negotiates a locale with
//! [`Negotiator::resolve_locale`], and records the outcome back on the bag.
//! [`IntlService`] fixes, per service, which `-u-` keys take part and which
//! option properties feed them.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use concord_common::tag::{canonicalize_keyword_value, is_well_formed_unicode_type};
use concord_common::{ExtensionKey, IntlError, IntlResult, LocaleData};
use log::debug;
use thiserror::Error;

use crate::getters::{
    coerce_options_to_object, get_boolean_option, get_options_object, get_string_option,
};
use crate::matcher::LocaleMatcher;
use crate::negotiator::Negotiator;
use crate::resolver::{LocaleKey, LocaleOptions, ResolvedLocale};
use crate::value::{OptionsObject, PropertyBag, Value};

/// Flags altering how the options argument is obtained.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SpecialBehaviors(u8);

impl SpecialBehaviors {
    /// Plain `GetOptionsObject` handling.
    pub const NONE: Self = Self(0);
    /// `undefined` options are a type error.
    pub const REQUIRE_OPTIONS: Self = Self(1 << 1);
    /// Primitive options are boxed with `ToObject` instead of rejected.
    pub const COERCE_OPTIONS: Self = Self(1 << 2);

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SpecialBehaviors {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How a per-key option property is read and validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyOptionKind {
    /// A string that must be a well-formed Unicode type sequence; malformed
    /// values are a range error.
    UnicodeType,
    /// A string restricted to a closed set; other values resolve as unset.
    OneOf(&'static [&'static str]),
    /// A boolean reported as `"true"` or `"false"`.
    Boolean,
}

/// Ties an option property to the extension key it negotiates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyOption {
    /// The negotiated key.
    pub key: ExtensionKey,
    /// The option property read and written back.
    pub property: &'static str,
    /// Validation applied when reading.
    pub kind: KeyOptionKind,
}

const CASE_FIRST_VALUES: &[&str] = &["upper", "lower", "false"];
const HOUR_CYCLE_VALUES: &[&str] = &["h11", "h12", "h23", "h24"];

const CALENDAR: KeyOption = KeyOption {
    key: ExtensionKey::Calendar,
    property: "calendar",
    kind: KeyOptionKind::UnicodeType,
};
const COLLATION: KeyOption = KeyOption {
    key: ExtensionKey::Collation,
    property: "collation",
    kind: KeyOptionKind::UnicodeType,
};
const HOUR_CYCLE: KeyOption = KeyOption {
    key: ExtensionKey::HourCycle,
    property: "hourCycle",
    kind: KeyOptionKind::OneOf(HOUR_CYCLE_VALUES),
};
const CASE_FIRST: KeyOption = KeyOption {
    key: ExtensionKey::CaseFirst,
    property: "caseFirst",
    kind: KeyOptionKind::OneOf(CASE_FIRST_VALUES),
};
const NUMERIC: KeyOption = KeyOption {
    key: ExtensionKey::Numeric,
    property: "numeric",
    kind: KeyOptionKind::Boolean,
};
const NUMBERING_SYSTEM: KeyOption = KeyOption {
    key: ExtensionKey::NumberingSystem,
    property: "numberingSystem",
    kind: KeyOptionKind::UnicodeType,
};

/// The Intl services that negotiate locales.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IntlService {
    /// `Intl.Collator`.
    Collator,
    /// `Intl.DateTimeFormat`.
    DateTimeFormat,
    /// `Intl.DisplayNames`.
    DisplayNames,
    /// `Intl.DurationFormat`.
    DurationFormat,
    /// `Intl.ListFormat`.
    ListFormat,
    /// `Intl.NumberFormat`.
    NumberFormat,
    /// `Intl.PluralRules`.
    PluralRules,
    /// `Intl.RelativeTimeFormat`.
    RelativeTimeFormat,
    /// `Intl.Segmenter`.
    Segmenter,
}

impl IntlService {
    /// Every service.
    pub const ALL: [Self; 9] = [
        Self::Collator,
        Self::DateTimeFormat,
        Self::DisplayNames,
        Self::DurationFormat,
        Self::ListFormat,
        Self::NumberFormat,
        Self::PluralRules,
        Self::RelativeTimeFormat,
        Self::Segmenter,
    ];

    /// Option properties feeding the service's relevant keys, in the order
    /// they are read.
    #[must_use]
    pub const fn key_options(self) -> &'static [KeyOption] {
        match self {
            Self::Collator => &[COLLATION, NUMERIC, CASE_FIRST],
            Self::DateTimeFormat => &[CALENDAR, NUMBERING_SYSTEM, HOUR_CYCLE],
            Self::NumberFormat | Self::RelativeTimeFormat | Self::DurationFormat => {
                &[NUMBERING_SYSTEM]
            }
            Self::DisplayNames | Self::ListFormat | Self::PluralRules | Self::Segmenter => &[],
        }
    }

    /// The `-u-` keys the service negotiates, in resolution order.
    #[must_use]
    pub const fn relevant_extension_keys(self) -> &'static [ExtensionKey] {
        match self {
            Self::Collator => &[
                ExtensionKey::Collation,
                ExtensionKey::CaseFirst,
                ExtensionKey::Numeric,
            ],
            Self::DateTimeFormat => &[
                ExtensionKey::Calendar,
                ExtensionKey::HourCycle,
                ExtensionKey::NumberingSystem,
            ],
            Self::NumberFormat | Self::RelativeTimeFormat | Self::DurationFormat => {
                &[ExtensionKey::NumberingSystem]
            }
            Self::DisplayNames | Self::ListFormat | Self::PluralRules | Self::Segmenter => &[],
        }
    }

    /// Whether the service reads `hour12`.
    #[must_use]
    pub const fn reads_hour12(self) -> bool {
        matches!(self, Self::DateTimeFormat)
    }

    /// The constructor name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collator => "Collator",
            Self::DateTimeFormat => "DateTimeFormat",
            Self::DisplayNames => "DisplayNames",
            Self::DurationFormat => "DurationFormat",
            Self::ListFormat => "ListFormat",
            Self::NumberFormat => "NumberFormat",
            Self::PluralRules => "PluralRules",
            Self::RelativeTimeFormat => "RelativeTimeFormat",
            Self::Segmenter => "Segmenter",
        }
    }

    fn key_option(self, key: ExtensionKey) -> Option<&'static KeyOption> {
        self.key_options().iter().find(|option| option.key == key)
    }
}

impl fmt::Display for IntlService {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when parsing a name that is not an Intl service constructor.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown Intl service '{0}'")]
pub struct UnknownIntlService(pub String);

impl FromStr for IntlService {
    type Err = UnknownIntlService;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == input)
            .ok_or_else(|| UnknownIntlService(input.to_owned()))
    }
}

/// The outcome of [`Negotiator::resolve_options`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    /// The options object, carrying the resolved key values.
    pub options: OptionsObject,
    /// The negotiated locale.
    pub resolved_locale: ResolvedLocale,
    /// The options the locale was resolved with, after the caller's hook.
    pub resolution_options: LocaleOptions,
}

impl<D: LocaleData> Negotiator<'_, D> {
    /// Reads `options` for `service`, resolves a locale from `locales`, and
    /// writes the resolved key values back onto the options object.
    ///
    /// `modify` sees the assembled [`LocaleOptions`] before resolution; a
    /// service uses it for rules only it knows, such as deriving an hour
    /// cycle from `hour12`.
    ///
    /// # Errors
    ///
    /// - Any error of [`canonicalize_locale_list`](Self::canonicalize_locale_list).
    /// - [`IntlError::OptionsRequired`] when `special` requires options and
    ///   `options` is `undefined`.
    /// - [`IntlError::OptionsNotObject`] or [`IntlError::NotCoercible`] for
    ///   an unusable options argument.
    /// - [`IntlError::InvalidOptionValue`] for an unknown `localeMatcher` or
    ///   a malformed calendar, collation, or numbering system.
    ///
    /// ```
    /// use concord::{IntlService, Negotiator, OptionsObject, PropertyBag, SpecialBehaviors, Value};
    ///
    /// let negotiator = Negotiator::bundled();
    /// let resolved = negotiator.resolve_options(
    ///     IntlService::DateTimeFormat,
    ///     &Value::from("th-u-nu-thai"),
    ///     Value::from(OptionsObject::new().with("localeMatcher", "lookup")),
    ///     SpecialBehaviors::NONE,
    ///     |_| {},
    /// )?;
    /// assert_eq!(resolved.resolved_locale.locale, "th-u-nu-thai");
    /// assert_eq!(resolved.options.get("calendar"), Value::from("buddhist"));
    /// # Ok::<(), concord::IntlError>(())
    /// ```
    pub fn resolve_options<F>(
        &self,
        service: IntlService,
        locales: &Value,
        options: Value,
        special: SpecialBehaviors,
        modify: F,
    ) -> IntlResult<ResolvedOptions>
    where
        F: FnOnce(&mut LocaleOptions),
    {
        let requested = self.canonicalize_locale_list(locales)?;
        let mut object = options_object(options, special)?;

        let matcher = get_string_option(
            &object,
            "localeMatcher",
            &LocaleMatcher::VALUES,
            Some(LocaleMatcher::BestFit.as_str()),
        )?;
        let mut resolution_options = LocaleOptions {
            locale_matcher: matcher
                .as_deref()
                .and_then(|name| name.parse().ok())
                .unwrap_or_default(),
            ..LocaleOptions::default()
        };
        for option in service.key_options() {
            *resolution_options.key_mut(option.key) = self.read_key_option(&object, option)?;
        }
        if service.reads_hour12() {
            resolution_options.hour12 = get_boolean_option(&object, "hour12", None);
        }
        modify(&mut resolution_options);

        let resolved_locale = self.resolve_locale(
            &requested,
            &resolution_options,
            service.relevant_extension_keys(),
        );
        for &key in service.relevant_extension_keys() {
            write_back(&mut object, service, key, resolved_locale.key(key));
        }
        debug!(
            target: "options",
            "{service} resolved `{}` with {} matching",
            resolved_locale.locale,
            resolution_options.locale_matcher,
        );

        Ok(ResolvedOptions {
            options: object,
            resolved_locale,
            resolution_options,
        })
    }

    fn read_key_option(
        &self,
        object: &OptionsObject,
        option: &KeyOption,
    ) -> IntlResult<Option<LocaleKey>> {
        let key = match option.kind {
            KeyOptionKind::Boolean => get_boolean_option(object, option.property, None)
                .map(|flag| LocaleKey::value(if flag { "true" } else { "false" })),
            KeyOptionKind::OneOf(allowed) => get_string_option(object, option.property, &[], None)?
                .map(|value| {
                    if allowed.contains(&value.as_str()) {
                        LocaleKey::Value(value)
                    } else {
                        LocaleKey::Unset
                    }
                }),
            KeyOptionKind::UnicodeType => {
                match get_string_option(object, option.property, &[], None)? {
                    None => None,
                    Some(value) if !is_well_formed_unicode_type(&value) => {
                        return Err(IntlError::InvalidOptionValue {
                            property: option.property.to_owned(),
                            value,
                        });
                    }
                    Some(value) => {
                        let canonical =
                            canonicalize_keyword_value(option.key.as_str(), &value, self.data());
                        Some(if canonical.is_empty() {
                            LocaleKey::value("true")
                        } else {
                            LocaleKey::Value(canonical)
                        })
                    }
                }
            }
        };
        Ok(key)
    }
}

/// Obtains the options object the way `special` asks for.
fn options_object(options: Value, special: SpecialBehaviors) -> IntlResult<OptionsObject> {
    if options == Value::Undefined && special.contains(SpecialBehaviors::REQUIRE_OPTIONS) {
        return Err(IntlError::OptionsRequired);
    }
    if special.contains(SpecialBehaviors::COERCE_OPTIONS) {
        coerce_options_to_object(options)
    } else {
        get_options_object(options)
    }
}

/// Records a resolved key on the options object; unset keys are skipped.
fn write_back(
    object: &mut OptionsObject,
    service: IntlService,
    key: ExtensionKey,
    value: &LocaleKey,
) {
    let (Some(option), Some(text)) = (service.key_option(key), value.as_deref()) else {
        return;
    };
    let written = match option.kind {
        KeyOptionKind::Boolean => Value::Boolean(text == "true"),
        KeyOptionKind::UnicodeType | KeyOptionKind::OneOf(_) => Value::from(text),
    };
    object.set(option.property, written);
}
