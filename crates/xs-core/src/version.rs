//! Semantic version parsing and ordering.
//!
//! Feature gating in the resolver compares the installed library version
//! against fixed thresholds, so ordering follows semantic-versioning
//! precedence: numeric `major.minor.patch` compared left to right, a
//! pre-release ordering below its final release, and pre-release identifiers
//! compared dot-segment by dot-segment with numeric identifiers below
//! alphanumeric ones. Build metadata (`+...`) is accepted and ignored.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VersionError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: {0:?} (expected major.minor.patch)")]
    InvalidFormat(String),

    #[error("invalid numeric component: {0:?}")]
    InvalidNumber(String),

    #[error("empty pre-release identifier in {0:?}")]
    EmptyPreRelease(String),
}

/// One dot-separated pre-release identifier.
///
/// Variant order carries the precedence rule: numeric identifiers always
/// order below alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleaseId {
    /// All-digit identifier, compared numerically (`beta.9` < `beta.10`).
    Num(u64),
    /// Alphanumeric identifier, compared lexically in ASCII order.
    Alpha(String),
}

impl fmt::Display for PreReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Alpha(s) => f.write_str(s),
        }
    }
}

/// A parsed semantic version.
///
/// Supports formats like `1.0.0`, `1.2`, `1.2.3-alpha`, `2.0.0-beta.1`, and
/// `1.0.0+build.123` (a leading `v` is tolerated). The patch component
/// defaults to zero when omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release identifiers; empty for a final release.
    pub pre: Vec<PreReleaseId>,
}

impl Version {
    /// A final release with no pre-release identifiers.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
        }
    }

    /// Whether this version is a pre-release.
    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // A pre-release orders below its final release.
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, id) in self.pre.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        // Build metadata never participates in precedence.
        let without_build = match trimmed.split_once('+') {
            Some((head, _meta)) => head,
            None => trimmed,
        };

        let (core, pre_part) = match without_build.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (without_build, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(VersionError::InvalidFormat(input.to_string()));
        }

        let major = parse_number(parts[0])?;
        let minor = parse_number(parts[1])?;
        let patch = match parts.get(2) {
            Some(part) => parse_number(part)?,
            None => 0,
        };

        let pre = match pre_part {
            Some(pre) => parse_pre_release(pre, input)?,
            None => Vec::new(),
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre,
        })
    }
}

fn parse_number(part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::InvalidNumber(part.to_string()));
    }
    part.parse()
        .map_err(|_| VersionError::InvalidNumber(part.to_string()))
}

fn parse_pre_release(pre: &str, input: &str) -> Result<Vec<PreReleaseId>> {
    pre.split('.')
        .map(|id| {
            if id.is_empty() {
                Err(VersionError::EmptyPreRelease(input.to_string()))
            } else if id.bytes().all(|b| b.is_ascii_digit()) {
                // Oversized numeric identifiers fall back to lexical ordering.
                Ok(id
                    .parse()
                    .map_or_else(|_| PreReleaseId::Alpha(id.to_string()), PreReleaseId::Num))
            } else {
                Ok(PreReleaseId::Alpha(id.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_versions() {
        assert_eq!(v("1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("0.0.1"), Version::new(0, 0, 1));
        assert_eq!(v("v2.0.0"), Version::new(2, 0, 0));
        // Missing patch defaults to zero.
        assert_eq!(v("1.2"), Version::new(1, 2, 0));
    }

    #[test]
    fn parses_pre_release_identifiers() {
        let version = v("1.0.7-beta.10");
        assert_eq!((version.major, version.minor, version.patch), (1, 0, 7));
        assert_eq!(
            version.pre,
            vec![PreReleaseId::Alpha("beta".to_string()), PreReleaseId::Num(10)]
        );
        assert!(version.is_pre_release());
    }

    #[test]
    fn build_metadata_is_ignored() {
        assert_eq!(v("1.0.0+build.123"), v("1.0.0"));
        assert_eq!(v("1.0.0-rc.1+sha.5114f85"), v("1.0.0-rc.1"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            "not-a-version".parse::<Version>(),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1".parse::<Version>(),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1.2.3.4".parse::<Version>(),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1.x.3".parse::<Version>(),
            Err(VersionError::InvalidNumber(_))
        ));
        assert!(matches!(
            "1.0.0-".parse::<Version>(),
            Err(VersionError::EmptyPreRelease(_))
        ));
        assert!(matches!(
            "1.0.0-beta..1".parse::<Version>(),
            Err(VersionError::EmptyPreRelease(_))
        ));
    }

    #[test]
    fn core_components_order_left_to_right() {
        assert!(v("2.0.0") > v("1.9.9"));
        assert!(v("1.1.0") > v("1.0.9"));
        assert!(v("1.0.1") > v("1.0.0"));
        assert_eq!(v("1.0.0"), v("1.0.0"));
    }

    #[test]
    fn pre_release_orders_below_final_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.7-beta.10") < v("1.0.7"));
        assert!(v("1.0.7") > v("1.0.7-rc.1"));
    }

    #[test]
    fn numeric_pre_release_identifiers_compare_numerically() {
        assert!(v("1.0.7-beta.9") < v("1.0.7-beta.10"));
        assert!(v("1.0.7-beta.2") < v("1.0.7-beta.11"));
    }

    #[test]
    fn numeric_identifiers_order_below_alphanumeric() {
        assert!(v("1.0.0-1") < v("1.0.0-alpha"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
    }

    #[test]
    fn shorter_pre_release_orders_below_its_extension() {
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    }

    #[test]
    fn semver_spec_precedence_chain() {
        // The ordering example from the semver spec, section 11.
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} should be < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn display_round_trips() {
        for s in ["1.2.3", "1.0.7-beta.10", "2.0.0-rc.1.x"] {
            assert_eq!(v(s).to_string(), s);
        }
    }

    proptest! {
        #[test]
        fn arbitrary_input_never_panics(input in ".{0,64}") {
            let _ = input.parse::<Version>();
        }

        #[test]
        fn parse_display_round_trip(
            major in 0u64..1000,
            minor in 0u64..1000,
            patch in 0u64..1000,
            pre in proptest::option::of("[a-z]{1,8}(\\.(0|[1-9][0-9]{0,2}))?"),
        ) {
            let s = match &pre {
                Some(pre) => format!("{major}.{minor}.{patch}-{pre}"),
                None => format!("{major}.{minor}.{patch}"),
            };
            let parsed: Version = s.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        #[test]
        fn ordering_is_consistent_with_equality(
            a in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[a-z]{1,4}(\\.[0-9]{1,2})?)?",
            b in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[a-z]{1,4}(\\.[0-9]{1,2})?)?",
        ) {
            let (a, b): (Version, Version) = (a.parse().unwrap(), b.parse().unwrap());
            prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
            prop_assert_eq!(a.cmp(&b).reverse(), b.cmp(&a));
        }
    }
}
