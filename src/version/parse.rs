//! Parsing raw version strings into components.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::BumpError;

/// Number of components in a full MAJOR.MINOR.PATCH version.
pub const MAX_COMPONENTS: usize = 3;

/// A parsed version: an optional alphabetic prefix plus its dot-separated components.
///
/// Components are kept as text so that anything not touched by a bump is
/// written back exactly as it was given (leading zeros included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    prefix: Option<char>,
    components: Vec<String>,
}

impl Version {
    /// Parse a raw version string such as `1.2.3`, `v1.2` or `7`.
    ///
    /// A leading alphabetic character is captured as the prefix. The rest is
    /// lower-cased, split on `.` and right-padded with `"0"` up to
    /// [`MAX_COMPONENTS`]. Surrounding whitespace is ignored, so the contents
    /// of a `VERSION` file can be passed in directly.
    ///
    /// Only the single captured prefix character is stripped, so a doubled
    /// prefix such as `vv1.2` leaves `v1` as the first component and fails
    /// the numeric check when bumped.
    ///
    /// Fails with [`BumpError::TooManyComponents`] if there are more than
    /// three components, or [`BumpError::EmptyInput`] for an empty string.
    /// Components are not checked for being numeric here; see [`Version::bump`].
    pub fn parse(raw: &str) -> Result<Self, BumpError> {
        let trimmed = raw.trim();
        let first = trimmed.chars().next().ok_or(BumpError::EmptyInput)?;

        let prefix = first.is_alphabetic().then_some(first);
        let rest = match prefix {
            Some(c) => &trimmed[c.len_utf8()..],
            None => trimmed,
        };

        let mut components: Vec<String> = rest
            .to_lowercase()
            .split('.')
            .map(str::to_string)
            .collect();

        if components.len() > MAX_COMPONENTS {
            return Err(BumpError::TooManyComponents {
                count: components.len(),
            });
        }

        if components.len() < MAX_COMPONENTS {
            debug!(given = components.len(), "Padding short version with zeros");
            components.resize(MAX_COMPONENTS, "0".to_string());
        }

        Ok(Self { prefix, components })
    }

    pub(crate) fn from_parts(prefix: Option<char>, components: Vec<String>) -> Self {
        Self { prefix, components }
    }

    /// The leading alphabetic character, if the input had one.
    pub fn prefix(&self) -> Option<char> {
        self.prefix
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{prefix}")?;
        }
        write!(f, "{}", self.components.join("."))
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
