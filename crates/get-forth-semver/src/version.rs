use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::{Result, SemverError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        };
        write!(f, "{s}")
    }
}

/// A `major.minor.patch` triple plus whether it was written with a `v`.
///
/// Pre-release and build metadata are dropped while parsing, so `core`
/// never carries either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub core: Version,
    pub has_v_prefix: bool,
}

impl SemanticVersion {
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64, has_v_prefix: bool) -> Self {
        Self {
            core: Version::new(major, minor, patch),
            has_v_prefix,
        }
    }

    /// Parses `input`, accepting an optional `v`/`V` prefix.
    ///
    /// Everything from the first `-` is cut before everything from the first
    /// `+`, in that order.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(SemverError::Empty);
        }

        let (has_v_prefix, rest) = match input.strip_prefix(['v', 'V']) {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let rest = rest.split_once('-').map_or(rest, |(core, _)| core);
        let rest = rest.split_once('+').map_or(rest, |(core, _)| core);

        let parts: Vec<&str> = rest.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(SemverError::InvalidFormat {
                version: rest.to_string(),
            });
        };

        Ok(Self::new(
            parse_field(Field::Major, major)?,
            parse_field(Field::Minor, minor)?,
            parse_field(Field::Patch, patch)?,
            has_v_prefix,
        ))
    }

    #[must_use]
    pub fn get(&self, field: Field) -> u64 {
        match field {
            Field::Major => self.core.major,
            Field::Minor => self.core.minor,
            Field::Patch => self.core.patch,
        }
    }
}

fn parse_field(field: Field, raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|source| SemverError::InvalidField { field, source })
}

impl FromStr for SemanticVersion {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_v_prefix {
            write!(f, "v")?;
        }
        write!(
            f,
            "{}.{}.{}",
            self.core.major, self.core.minor, self.core.patch
        )
    }
}
