//! Generic readers for option bags.
//!
//! These coerce and validate individual properties the way every Intl
//! constructor does before its own service-specific processing.

use concord_common::{IntlError, IntlResult};

use crate::value::{OptionsObject, PropertyBag, Value};

/// Coerces an options argument into an object.
///
/// `undefined` yields a fresh empty object; primitives are boxed.
///
/// # Errors
///
/// Returns [`IntlError::NotCoercible`] for `null`.
pub fn coerce_options_to_object(options: Value) -> IntlResult<OptionsObject> {
    match options {
        Value::Undefined => Ok(OptionsObject::new()),
        other => other.to_object(),
    }
}

/// Accepts an options argument only when it is `undefined` or an object.
///
/// # Errors
///
/// Returns [`IntlError::OptionsNotObject`] for any primitive.
pub fn get_options_object(options: Value) -> IntlResult<OptionsObject> {
    match options {
        Value::Undefined => Ok(OptionsObject::new()),
        other if other.is_object() => other.to_object(),
        _ => Err(IntlError::OptionsNotObject),
    }
}

/// The type an option is coerced to by [`get_option`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionType {
    /// `ToBoolean`.
    Boolean,
    /// `ToString`.
    String,
}

/// An option value after coercion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OptionValue {
    /// A boolean option.
    Boolean(bool),
    /// A string option.
    String(String),
}

/// Reads `property`, coerces it to `kind`, and checks it against `allowed`.
///
/// An absent property yields `fallback`. An empty `allowed` list accepts any
/// value.
///
/// # Errors
///
/// Returns [`IntlError::InvalidOptionValue`] when the coerced value is not in
/// a non-empty `allowed` list.
pub fn get_option(
    object: &impl PropertyBag,
    property: &str,
    kind: OptionType,
    allowed: &[&str],
    fallback: Option<OptionValue>,
) -> IntlResult<Option<OptionValue>> {
    let value = object.get(property);
    if value == Value::Undefined {
        return Ok(fallback);
    }

    let coerced = match kind {
        OptionType::Boolean => OptionValue::Boolean(value.to_boolean()),
        OptionType::String => OptionValue::String(value.to_string()),
    };
    if !allowed.is_empty() {
        let rendered = match &coerced {
            OptionValue::Boolean(flag) => flag.to_string(),
            OptionValue::String(text) => text.clone(),
        };
        if !allowed.contains(&rendered.as_str()) {
            return Err(IntlError::InvalidOptionValue {
                property: property.to_owned(),
                value: rendered,
            });
        }
    }
    Ok(Some(coerced))
}

/// [`get_option`] for string-typed options.
///
/// # Errors
///
/// Returns [`IntlError::InvalidOptionValue`] as [`get_option`] does.
///
/// ```
/// use concord::getters::get_string_option;
/// use concord::OptionsObject;
///
/// let options = OptionsObject::new().with("localeMatcher", "lookup");
/// let matcher = get_string_option(&options, "localeMatcher", &["lookup", "best fit"], Some("best fit"))?;
/// assert_eq!(matcher.as_deref(), Some("lookup"));
/// # Ok::<(), concord::IntlError>(())
/// ```
pub fn get_string_option(
    object: &impl PropertyBag,
    property: &str,
    allowed: &[&str],
    fallback: Option<&str>,
) -> IntlResult<Option<String>> {
    let default = fallback.map(|text| OptionValue::String(text.to_owned()));
    let value = get_option(object, property, OptionType::String, allowed, default)?;
    Ok(value.map(|coerced| match coerced {
        OptionValue::String(text) => text,
        OptionValue::Boolean(flag) => flag.to_string(),
    }))
}

/// [`get_option`] for boolean-typed options. Coercing to a boolean cannot
/// fail.
#[must_use]
pub fn get_boolean_option(
    object: &impl PropertyBag,
    property: &str,
    fallback: Option<bool>,
) -> Option<bool> {
    match object.get(property) {
        Value::Undefined => fallback,
        value => Some(value.to_boolean()),
    }
}

/// Result of [`get_boolean_or_string_number_format_option`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StringOrBoolean {
    /// One of the permitted strings.
    String(String),
    /// A boolean.
    Boolean(bool),
}

/// Reads an option that may be a boolean or one of `allowed`.
///
/// `undefined` yields `fallback`, `true` yields `true`, and any other falsy
/// value yields `false`. The strings `"true"` and `"false"` also yield
/// `fallback`, so that stringified booleans do not silently change meaning.
///
/// # Errors
///
/// Returns [`IntlError::InvalidOptionValue`] when the string form of a truthy
/// value is not in `allowed`.
pub fn get_boolean_or_string_number_format_option(
    object: &impl PropertyBag,
    property: &str,
    allowed: &[&str],
    fallback: StringOrBoolean,
) -> IntlResult<StringOrBoolean> {
    let value = object.get(property);
    match value {
        Value::Undefined => return Ok(fallback),
        Value::Boolean(true) => return Ok(StringOrBoolean::Boolean(true)),
        _ => {}
    }
    if !value.to_boolean() {
        return Ok(StringOrBoolean::Boolean(false));
    }

    let text = value.to_string();
    if matches!(text.as_str(), "true" | "false") {
        return Ok(fallback);
    }
    if !allowed.contains(&text.as_str()) {
        return Err(IntlError::InvalidOptionValue {
            property: property.to_owned(),
            value: text,
        });
    }
    Ok(StringOrBoolean::String(text))
}

/// Validates a numeric option and floors it into `[minimum, maximum]`.
///
/// `undefined` yields `fallback`. `property` only names the option in errors.
///
/// # Errors
///
/// Returns [`IntlError::NumberOutOfRange`] when the value is NaN or outside
/// the bounds.
///
/// ```
/// use concord::Value;
/// use concord::getters::default_number_option;
///
/// assert_eq!(default_number_option("digits", &Value::Undefined, 0, 20, Some(3)), Ok(Some(3)));
/// assert_eq!(default_number_option("digits", &Value::from(4.7), 0, 20, Some(3)), Ok(Some(4)));
/// assert!(default_number_option("digits", &Value::from(25), 0, 20, Some(3)).is_err());
/// ```
pub fn default_number_option(
    property: &str,
    value: &Value,
    minimum: i32,
    maximum: i32,
    fallback: Option<i32>,
) -> IntlResult<Option<i32>> {
    if *value == Value::Undefined {
        return Ok(fallback);
    }

    let number = value.to_number();
    if number.is_nan() || number < f64::from(minimum) || number > f64::from(maximum) {
        return Err(IntlError::NumberOutOfRange {
            property: property.to_owned(),
            value: Value::from(number).to_string(),
            minimum,
            maximum,
        });
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the value was range-checked against i32 bounds above"
    )]
    let floored = number.floor() as i32;
    Ok(Some(floored))
}

/// Reads `property` and delegates to [`default_number_option`].
///
/// # Errors
///
/// Returns [`IntlError::NumberOutOfRange`] as [`default_number_option`] does.
pub fn get_number_option(
    object: &impl PropertyBag,
    property: &str,
    minimum: i32,
    maximum: i32,
    fallback: Option<i32>,
) -> IntlResult<Option<i32>> {
    default_number_option(property, &object.get(property), minimum, maximum, fallback)
}
