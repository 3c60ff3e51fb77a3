//! Matching requested locales against the supported set.
//!
//! Two strategies share one contract: walk the requested tags in priority
//! order and return the first supported locale any of them reaches, together
//! with the `-u-` extension of the requested tag that produced the match.
//! No match at all is an empty result, not an error.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use concord_common::{LocaleData, LocaleId, UnicodeExtension};
use log::trace;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// A supported locale reached from a requested tag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchedLocale {
    /// The supported locale, without extensions.
    pub locale: String,
    /// The `-u-` extension carried by the requested tag.
    pub extension: Option<UnicodeExtension>,
}

/// The matching strategy selected by the `localeMatcher` option.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LocaleMatcher {
    /// RFC 4647 lookup by progressively shorter prefixes.
    Lookup,
    /// Likely-subtag distance scoring, falling back to lookup.
    #[default]
    BestFit,
}

impl LocaleMatcher {
    /// Option values accepted for `localeMatcher`.
    pub const VALUES: [&'static str; 2] = ["lookup", "best fit"];

    /// The option value naming this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lookup => "lookup",
            Self::BestFit => "best fit",
        }
    }
}

impl fmt::Display for LocaleMatcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when parsing a name that is neither `lookup` nor `best fit`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown locale matcher '{0}'")]
pub struct UnknownLocaleMatcher(pub String);

impl FromStr for LocaleMatcher {
    type Err = UnknownLocaleMatcher;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "lookup" => Ok(Self::Lookup),
            "best fit" => Ok(Self::BestFit),
            other => Err(UnknownLocaleMatcher(other.to_owned())),
        }
    }
}

/// Runs the strategy selected by `matcher`.
pub fn find_matching_locale(
    data: &impl LocaleData,
    requested: &[String],
    matcher: LocaleMatcher,
) -> Option<MatchedLocale> {
    match matcher {
        LocaleMatcher::Lookup => lookup_matching_locale_by_prefix(data, requested),
        LocaleMatcher::BestFit => lookup_matching_locale_by_best_fit(data, requested),
    }
}

/// RFC 4647 lookup: strips trailing subtags from each requested tag until a
/// supported prefix is found.
///
/// Only the `-u-` extension is removed before probing; other extensions and
/// private use are stripped subtag by subtag like everything else, and a
/// singleton left dangling at the end of a prefix is dropped with its
/// predecessor.
pub fn lookup_matching_locale_by_prefix(
    data: &impl LocaleData,
    requested: &[String],
) -> Option<MatchedLocale> {
    requested.iter().find_map(|tag| match_prefix(data, tag))
}

fn match_prefix(data: &impl LocaleData, tag: &str) -> Option<MatchedLocale> {
    let mut locale = LocaleId::parse(tag)?;
    let extension = locale.remove_unicode_extension();
    let stripped = locale.to_string();

    let mut prefix = stripped.as_str();
    loop {
        trace!(target: "matcher", "probing `{prefix}` for `{tag}`");
        if data.is_available(prefix) {
            return Some(MatchedLocale {
                locale: prefix.to_owned(),
                extension,
            });
        }
        prefix = shorter_prefix(prefix)?;
    }
}

/// Drops the last subtag, and the singleton before it when one would be left
/// dangling.
fn shorter_prefix(prefix: &str) -> Option<&str> {
    let mut position = prefix.rfind('-')?;
    if position >= 2 && prefix.as_bytes().get(position - 2) == Some(&b'-') {
        position -= 2;
    }
    prefix.get(..position)
}

/// Best-fit matching.
///
/// For each requested tag in order: an exact base-name match wins; otherwise
/// the supported locale closest to it after likely-subtag maximisation is
/// chosen; otherwise lookup matching is tried on that tag alone.
///
/// Candidates must agree on language and script once maximised. Among them
/// the score is 0 for the same region, 1 when the candidate names no region
/// of its own, and 2 for a different region, plus 1 for every variant only one
/// side carries. Lower scores win, then candidates with more explicit
/// subtags, then the provider's ordering.
pub fn lookup_matching_locale_by_best_fit(
    data: &impl LocaleData,
    requested: &[String],
) -> Option<MatchedLocale> {
    let candidates = data
        .available_locales()
        .iter()
        .filter_map(|locale| Candidate::new(locale))
        .collect::<Vec<_>>();

    requested
        .iter()
        .find_map(|tag| best_fit_for_tag(data, &candidates, tag))
}

fn best_fit_for_tag(
    data: &impl LocaleData,
    candidates: &[Candidate<'_>],
    tag: &str,
) -> Option<MatchedLocale> {
    let mut locale = LocaleId::parse(tag)?;
    let extension = locale.remove_unicode_extension();
    let base_name = locale.base_name();

    if data.is_available(&base_name) {
        return Some(MatchedLocale {
            locale: base_name,
            extension,
        });
    }

    let closest = base_name
        .parse::<LanguageIdentifier>()
        .ok()
        .and_then(|explicit| {
            let mut maximized = explicit.clone();
            maximized.maximize();
            candidates
                .iter()
                .enumerate()
                .filter_map(|(order, candidate)| {
                    let score = candidate.distance(&explicit, &maximized)?;
                    trace!(
                        target: "matcher",
                        "best fit score for `{}` against `{base_name}`: {score}",
                        candidate.tag,
                    );
                    Some((score, Reverse(candidate.explicit_subtags), order, candidate.tag))
                })
                .min()
                .map(|(.., supported)| supported.to_owned())
        });

    closest.map_or_else(
        || match_prefix(data, tag),
        |supported| {
            Some(MatchedLocale {
                locale: supported,
                extension,
            })
        },
    )
}

/// A supported locale with its maximised form precomputed.
struct Candidate<'a> {
    tag: &'a str,
    explicit: LanguageIdentifier,
    maximized: LanguageIdentifier,
    explicit_subtags: usize,
}

impl<'a> Candidate<'a> {
    fn new(tag: &'a str) -> Option<Self> {
        let explicit = tag.parse::<LanguageIdentifier>().ok()?;
        let mut maximized = explicit.clone();
        maximized.maximize();
        let explicit_subtags = usize::from(explicit.script.is_some())
            + usize::from(explicit.region.is_some())
            + explicit.variants().len();
        Some(Self {
            tag,
            explicit,
            maximized,
            explicit_subtags,
        })
    }

    fn distance(
        &self,
        requested: &LanguageIdentifier,
        requested_max: &LanguageIdentifier,
    ) -> Option<usize> {
        if self.maximized.language != requested_max.language
            || self.maximized.script != requested_max.script
        {
            return None;
        }

        let region = if self.maximized.region == requested_max.region {
            0
        } else if self.explicit.region.is_none() {
            1
        } else {
            2
        };
        let unmatched_variants = requested
            .variants()
            .filter(|variant| !self.explicit.has_variant(**variant))
            .count()
            + self
                .explicit
                .variants()
                .filter(|variant| !requested.has_variant(**variant))
                .count();
        Some(region + unmatched_variants)
    }
}
