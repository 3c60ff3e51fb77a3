use std::convert::Infallible;
use std::str::FromStr;

fn unquote(input: &str) -> &str {
    input
        .trim()
        .trim_matches(|candidate| matches!(candidate, '"' | '\''))
}

/// A single quoted value supplied via a behaviour-driven test step.
#[derive(Clone, Debug)]
pub struct StepTag {
    raw: String,
}

impl FromStr for StepTag {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            raw: unquote(input).to_owned(),
        })
    }
}

impl StepTag {
    /// Consumes the step value, yielding the unquoted string.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

/// A quoted, comma-separated list such as `"en, en-GB"`.
///
/// Blank entries are skipped, so `""` yields an empty list.
#[derive(Clone, Debug)]
pub struct StepTags {
    values: Vec<String>,
}

impl FromStr for StepTags {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let values = unquote(input)
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self { values })
    }
}

impl StepTags {
    /// Consumes the step value, yielding the listed entries.
    pub fn into_inner(self) -> Vec<String> {
        self.values
    }

    /// Borrows the entries as string slices.
    pub fn as_strs(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }
}
