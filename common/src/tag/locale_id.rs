//! Parsed representation of a Unicode locale identifier.

use std::fmt;

/// The `unicode_language_id` portion of a tag: language, script, region, variants.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LanguageId {
    /// Lowercase language subtag.
    pub language: String,
    /// Title-case script subtag.
    pub script: Option<String>,
    /// Uppercase (or numeric) region subtag.
    pub region: Option<String>,
    /// Lowercase variant subtags in source order until canonicalised.
    pub variants: Vec<String>,
}

impl fmt::Display for LanguageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(formatter, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(formatter, "-{region}")?;
        }
        for variant in &self.variants {
            write!(formatter, "-{variant}")?;
        }
        Ok(())
    }
}

/// A `-u-` keyword: a two-character key and its (possibly empty) type value.
///
/// Multi-subtag values are stored joined with `-`; an empty value stands for
/// `true`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Keyword {
    /// Two-character key, e.g. `ca`.
    pub key: String,
    /// Type value, e.g. `islamic-civil`.
    pub value: String,
}

impl Keyword {
    /// Builds a keyword from borrowed parts.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// The `-u-` extension: attributes followed by keywords.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnicodeExtension {
    /// Attribute subtags.
    pub attributes: Vec<String>,
    /// Keyword/value pairs.
    pub keywords: Vec<Keyword>,
}

impl UnicodeExtension {
    /// Returns the keyword stored under `key`, if any.
    #[must_use]
    pub fn keyword(&self, key: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|keyword| keyword.key == key)
    }

    /// Whether the extension carries neither attributes nor keywords.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.keywords.is_empty()
    }
}

impl fmt::Display for UnicodeExtension {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("u")?;
        for attribute in &self.attributes {
            write!(formatter, "-{attribute}")?;
        }
        for keyword in &self.keywords {
            write!(formatter, "-{}", keyword.key)?;
            if !keyword.value.is_empty() {
                write!(formatter, "-{}", keyword.value)?;
            }
        }
        Ok(())
    }
}

/// A `tfield` of the transformed extension.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransformedField {
    /// Key of the form `alpha digit`, e.g. `m0`.
    pub key: String,
    /// One or more value subtags joined with `-`.
    pub value: String,
}

/// The `-t-` extension: an optional source language plus fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransformedExtension {
    /// The `tlang` component.
    pub language: Option<LanguageId>,
    /// Field list.
    pub fields: Vec<TransformedField>,
}

impl fmt::Display for TransformedExtension {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("t")?;
        if let Some(language) = &self.language {
            write!(formatter, "-{language}")?;
        }
        for field in &self.fields {
            write!(formatter, "-{}-{}", field.key, field.value)?;
        }
        Ok(())
    }
}

/// Any extension introduced by a singleton other than `u`, `t` or `x`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OtherExtension {
    /// The lowercase singleton.
    pub singleton: char,
    /// Subtags following the singleton, joined with `-`.
    pub value: String,
}

/// One extension sequence of a locale identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Extension {
    /// `-u-` Unicode locale extension.
    Unicode(UnicodeExtension),
    /// `-t-` transformed content extension.
    Transformed(TransformedExtension),
    /// Any other single-letter extension.
    Other(OtherExtension),
}

impl Extension {
    /// The singleton that introduces this extension.
    #[must_use]
    pub const fn singleton(&self) -> char {
        match self {
            Self::Unicode(_) => 'u',
            Self::Transformed(_) => 't',
            Self::Other(other) => other.singleton,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(unicode) => unicode.fmt(formatter),
            Self::Transformed(transformed) => transformed.fmt(formatter),
            Self::Other(other) => write!(formatter, "{}-{}", other.singleton, other.value),
        }
    }
}

/// A structurally valid locale identifier split into its components.
///
/// Parsing normalises subtag case; alias replacement and ordering happen in
/// [`LocaleId::canonicalize`](crate::tag::LocaleId::canonicalize).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocaleId {
    /// Language, script, region and variants.
    pub id: LanguageId,
    /// Extension sequences in source order until canonicalised.
    pub extensions: Vec<Extension>,
    /// Subtags following `-x-`.
    pub private_use: Vec<String>,
}

impl LocaleId {
    /// Returns the `-u-` extension, if present.
    #[must_use]
    pub fn unicode_extension(&self) -> Option<&UnicodeExtension> {
        self.extensions.iter().find_map(|extension| match extension {
            Extension::Unicode(unicode) => Some(unicode),
            _ => None,
        })
    }

    /// Detaches and returns the `-u-` extension, leaving the rest intact.
    pub fn remove_unicode_extension(&mut self) -> Option<UnicodeExtension> {
        let index = self
            .extensions
            .iter()
            .position(|extension| matches!(extension, Extension::Unicode(_)))?;
        match self.extensions.remove(index) {
            Extension::Unicode(unicode) => Some(unicode),
            _ => None,
        }
    }

    /// The tag with every extension and private-use sequence dropped.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.id.to_string()
    }

    /// Renders the ICU-style identifier hosts use for data lookups.
    ///
    /// ```
    /// use concord_common::tag::LocaleId;
    ///
    /// let locale = LocaleId::parse("zh-Hant-TW-u-ca-roc").unwrap_or_default();
    /// assert_eq!(locale.to_internal_identifier(), "zh_Hant_TW@ca=roc");
    /// ```
    #[must_use]
    pub fn to_internal_identifier(&self) -> String {
        let mut identifier = self.id.language.clone();
        for part in self
            .id
            .script
            .iter()
            .chain(self.id.region.iter())
            .map(String::as_str)
        {
            identifier.push('_');
            identifier.push_str(part);
        }
        for variant in &self.id.variants {
            identifier.push('_');
            identifier.push_str(&variant.to_ascii_uppercase());
        }
        if let Some(extension) = self.unicode_extension() {
            let keywords = extension
                .keywords
                .iter()
                .map(|keyword| {
                    let value = if keyword.value.is_empty() {
                        "true"
                    } else {
                        keyword.value.as_str()
                    };
                    format!("{}={value}", keyword.key)
                })
                .collect::<Vec<_>>();
            if !keywords.is_empty() {
                identifier.push('@');
                identifier.push_str(&keywords.join(";"));
            }
        }
        identifier
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(formatter)?;
        for extension in &self.extensions {
            write!(formatter, "-{extension}")?;
        }
        if !self.private_use.is_empty() {
            write!(formatter, "-x-{}", self.private_use.join("-"))?;
        }
        Ok(())
    }
}
