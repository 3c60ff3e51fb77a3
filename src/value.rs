//! The host value model consulted by list canonicalisation and the option
//! getters.
//!
//! Only the slice of the ECMAScript value system that locale negotiation
//! touches is modelled: primitives, array-likes, locale objects, and plain
//! option bags. Conversions follow the language's `ToString`, `ToNumber`,
//! `ToBoolean`, and `ToObject` rules for those shapes.

use std::fmt;

use concord_common::{IntlError, IntlResult};

/// Capability of an object that exposes own properties by string key.
pub trait PropertyBag {
    /// Reads `property`, yielding [`Value::Undefined`] when it is absent.
    fn get(&self, property: &str) -> Value;

    /// Creates or replaces the own property `property`.
    fn set(&mut self, property: &str, value: Value);

    /// Whether `property` is an own property.
    fn has_own(&self, property: &str) -> bool;
}

/// A caller-supplied value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `undefined`, also used for absent properties.
    #[default]
    Undefined,
    /// `null`.
    Null,
    /// A boolean primitive.
    Boolean(bool),
    /// A number primitive.
    Number(f64),
    /// A string primitive.
    String(String),
    /// An array of values.
    List(Vec<Value>),
    /// A locale object; the payload is its identity tag.
    Locale(String),
    /// A plain object.
    Object(OptionsObject),
}

impl Value {
    /// Whether the value is an object rather than a primitive.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::List(_) | Self::Locale(_) | Self::Object(_))
    }

    /// `ToBoolean`.
    #[must_use]
    pub const fn to_boolean(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(value) => *value,
            Self::Number(number) => !number.is_nan() && number.abs() > 0.0,
            Self::String(text) => !text.is_empty(),
            Self::List(_) | Self::Locale(_) | Self::Object(_) => true,
        }
    }

    /// `ToNumber`.
    ///
    /// ```
    /// use concord::Value;
    ///
    /// assert_eq!(Value::from(" 12 ").to_number(), 12.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert!(Value::from("twelve").to_number().is_nan());
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Locale(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Boolean(value) => f64::from(u8::from(*value)),
            Self::Number(number) => *number,
            Self::String(text) => string_to_number(text),
            Self::List(_) => string_to_number(&self.to_string()),
            Self::Object(object) => object
                .primitive
                .as_deref()
                .map_or(f64::NAN, Self::to_number),
        }
    }

    /// `ToObject`.
    ///
    /// # Errors
    ///
    /// Returns [`IntlError::NotCoercible`] for `undefined` and `null`.
    pub fn to_object(self) -> IntlResult<OptionsObject> {
        match self {
            Self::Undefined => Err(IntlError::NotCoercible { value: "undefined" }),
            Self::Null => Err(IntlError::NotCoercible { value: "null" }),
            Self::Object(object) => Ok(object),
            Self::List(items) => {
                let length = items.len();
                let mut object = OptionsObject::new();
                for (index, item) in items.into_iter().enumerate() {
                    object.set(&index.to_string(), item);
                }
                object.set("length", Value::from(length));
                Ok(object)
            }
            primitive => Ok(OptionsObject::wrapping(primitive)),
        }
    }
}

impl fmt::Display for Value {
    /// `ToString`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Number(number) => formatter.write_str(&number_to_string(*number)),
            Self::String(text) | Self::Locale(text) => formatter.write_str(text),
            Self::List(items) => {
                let rendered = items
                    .iter()
                    .map(|item| match item {
                        Self::Undefined | Self::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>();
                formatter.write_str(&rendered.join(","))
            }
            Self::Object(object) => match object.primitive.as_deref() {
                Some(primitive) => primitive.fmt(formatter),
                None => formatter.write_str("[object Object]"),
            },
        }
    }
}

fn number_to_string(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if number == 0.0 {
        return "0".to_owned();
    }
    let magnitude = number.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{number}");
    }
    let exponential = format!("{number:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .ok()
                .and_then(|value| u32::try_from(value).ok())
                .map_or(f64::NAN, f64::from);
        }
    }
    let numeric = trimmed
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        u32::try_from(value).map_or(Self::Number(f64::INFINITY), |narrow| {
            Self::Number(f64::from(narrow))
        })
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<OptionsObject> for Value {
    fn from(value: OptionsObject) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(tags: [&str; N]) -> Self {
        Self::List(tags.into_iter().map(Self::from).collect())
    }
}

/// An ordinary object: insertion-ordered own properties, optionally wrapping
/// the primitive it was created from by `ToObject`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsObject {
    properties: Vec<(String, Value)>,
    primitive: Option<Box<Value>>,
}

impl OptionsObject {
    /// An empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The wrapper object `ToObject` produces for a primitive.
    #[must_use]
    pub fn wrapping(primitive: Value) -> Self {
        Self {
            properties: Vec::new(),
            primitive: Some(Box::new(primitive)),
        }
    }

    /// Builder-style [`PropertyBag::set`].
    ///
    /// ```
    /// use concord::{OptionsObject, PropertyBag, Value};
    ///
    /// let options = OptionsObject::new().with("localeMatcher", "lookup");
    /// assert_eq!(options.get("localeMatcher"), Value::from("lookup"));
    /// assert_eq!(options.get("calendar"), Value::Undefined);
    /// ```
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.set(property, value.into());
        self
    }

    /// Own property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }
}

impl PropertyBag for OptionsObject {
    fn get(&self, property: &str) -> Value {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    fn set(&mut self, property: &str, value: Value) {
        if let Some((_, slot)) = self.properties.iter_mut().find(|(name, _)| name == property) {
            *slot = value;
            return;
        }
        self.properties.push((property.to_owned(), value));
    }

    fn has_own(&self, property: &str) -> bool {
        self.properties.iter().any(|(name, _)| name == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(3.0), "3")]
    #[case(Value::from(0.0_f64.copysign(f64::NEG_INFINITY)), "0")]
    #[case(Value::from(2.5), "2.5")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::from(1e21), "1e+21")]
    #[case(Value::from(["en", "fr"]), "en,fr")]
    #[case(Value::Locale("en-GB".to_owned()), "en-GB")]
    #[case(Value::from(OptionsObject::new()), "[object Object]")]
    #[case(Value::from(OptionsObject::wrapping(Value::from(7))), "7")]
    fn converts_to_string(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::Undefined, None)]
    #[case(Value::from(true), Some(1.0))]
    #[case(Value::from(""), Some(0.0))]
    #[case(Value::from("  42\n"), Some(42.0))]
    #[case(Value::from("1e3"), Some(1000.0))]
    #[case(Value::from("0x1F"), Some(31.0))]
    #[case(Value::from("-Infinity"), Some(f64::NEG_INFINITY))]
    #[case(Value::from("inf"), None)]
    #[case(Value::from("12px"), None)]
    #[case(Value::from(OptionsObject::new()), None)]
    fn converts_to_number(#[case] value: Value, #[case] expected: Option<f64>) {
        let number = value.to_number();

        expected.map_or_else(
            || assert!(number.is_nan(), "expected NaN, got {number}"),
            |finite| assert_eq!(number, finite),
        );
    }

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::from(0.0), false)]
    #[case(Value::from(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("false"), true)]
    #[case(Value::from(OptionsObject::new()), true)]
    fn converts_to_boolean(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.to_boolean(), expected);
    }

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Null, "null")]
    fn refuses_to_box_nullish_values(#[case] value: Value, #[case] name: &'static str) {
        assert_eq!(value.to_object(), Err(IntlError::NotCoercible { value: name }));
    }

    #[rstest]
    fn boxes_lists_as_indexed_objects() {
        let object = Value::from(["en", "fr"]).to_object().unwrap_or_default();

        assert_eq!(object.get("1"), Value::from("fr"));
        assert_eq!(object.get("length"), Value::from(2));
        assert!(!object.has_own("2"));
    }

    #[rstest]
    fn set_replaces_existing_properties_in_place() {
        let mut object = OptionsObject::new().with("a", 1).with("b", 2);
        object.set("a", Value::from(3));

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("a"), Value::from(3));
    }
}
