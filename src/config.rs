//! Negotiator configuration loaded from TOML.
//!
//! Hosts keep negotiation settings under a `[concord]` table or in a file of
//! their own. `NegotiatorConfig` captures the default-locale override and the
//! implementation-defined input limits; everything falls back to sensible
//! defaults when omitted.

use serde::Deserialize;
use thiserror::Error;

/// Raised when configuration text cannot be deserialised.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source was malformed or carried unknown fields.
    #[error("failed to parse negotiator configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings shared by every negotiation call made through a
/// [`Negotiator`](crate::Negotiator).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NegotiatorConfig {
    /// Locale substituted when nothing requested matches.
    ///
    /// Overrides the data provider's own default when the provider supports
    /// it. The negotiator trims whitespace and ignores blank values, so
    /// `default_locale = ""` falls back cleanly to the provider default.
    pub default_locale: Option<String>,
    /// Caps on caller-supplied input.
    pub limits: LimitsConfig,
}

impl NegotiatorConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML, a value
    /// has the wrong type, or an unknown field is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use concord::NegotiatorConfig;
    ///
    /// let config = NegotiatorConfig::parse("[limits]\nmax_tag_length = 64\n")?;
    /// assert_eq!(config.limits.max_tag_length, 64);
    /// assert_eq!(config.limits.max_list_length, 1024);
    /// # Ok::<(), concord::ConfigError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Loads configuration using the supplied loader.
    ///
    /// Hosts that embed concord settings in a larger file pass the table name
    /// they store them under; the loader resolves that namespace. Tests use it
    /// to inject a stub without touching the file system.
    ///
    /// # Examples
    ///
    /// ```
    /// use concord::NegotiatorConfig;
    ///
    /// let config = NegotiatorConfig::load_with("concord", |_| NegotiatorConfig::default());
    /// assert_eq!(config.limits.max_tag_length, 255);
    /// ```
    #[must_use]
    pub fn load_with<F>(namespace: &str, loader: F) -> Self
    where
        F: FnOnce(&str) -> Self,
    {
        loader(namespace)
    }

    /// Returns the configured default-locale override, if present.
    ///
    /// Whitespace-only values are treated as absent.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale
            .as_deref()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
    }
}

/// Implementation-defined bounds on caller input.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Longest language tag, in bytes, accepted by list canonicalisation.
    #[serde(default = "LimitsConfig::default_max_tag_length")]
    pub max_tag_length: usize,
    /// Most entries accepted in a requested locale list.
    #[serde(default = "LimitsConfig::default_max_list_length")]
    pub max_list_length: usize,
}

impl LimitsConfig {
    const fn default_max_tag_length() -> usize {
        255
    }

    const fn default_max_list_length() -> usize {
        1024
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_tag_length: Self::default_max_tag_length(),
            max_list_length: Self::default_max_list_length(),
        }
    }
}
