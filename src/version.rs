use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Go release version as it appears in archive filenames: one or two
/// dot-separated numeric groups after the major number ("1.18", "1.21.5").
///
/// "1.21" and "1.21.0" are distinct releases on the download page, so the
/// patch component stays optional instead of defaulting to zero; the derived
/// ordering sorts "1.21" directly below "1.21.0".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid Go version string '{0}'")]
pub struct ParseVersionError(pub String);

impl FromStr for GoVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');

        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| ParseVersionError(s.to_string()))?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(|| ParseVersionError(s.to_string()))?;
        let patch = match parts.next() {
            Some(p) => Some(p.parse::<u32>().map_err(|_| ParseVersionError(s.to_string()))?),
            None => None,
        };

        if parts.next().is_some() {
            return Err(ParseVersionError(s.to_string()));
        }

        Ok(GoVersion {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> GoVersion {
        s.parse().unwrap()
    }

    #[test]
    fn parses_two_and_three_group_versions() {
        assert_eq!(
            v("1.18"),
            GoVersion {
                major: 1,
                minor: 18,
                patch: None
            }
        );
        assert_eq!(
            v("1.21.5"),
            GoVersion {
                major: 1,
                minor: 21,
                patch: Some(5)
            }
        );
    }

    #[test]
    fn rejects_malformed_versions() {
        assert!("".parse::<GoVersion>().is_err());
        assert!("1".parse::<GoVersion>().is_err());
        assert!("1.".parse::<GoVersion>().is_err());
        assert!("1.21.".parse::<GoVersion>().is_err());
        assert!("1.21.5.7".parse::<GoVersion>().is_err());
        assert!("1.x".parse::<GoVersion>().is_err());
        assert!("go1.21".parse::<GoVersion>().is_err());
        assert!("1.21rc1".parse::<GoVersion>().is_err());
    }

    #[test]
    fn orders_numerically_not_lexicographically() {
        assert!(v("1.9.0") < v("1.10.0"));
        assert!(v("1.21.5") < v("1.22.0"));
        assert!(v("1.22.0") < v("2.0.0"));
    }

    #[test]
    fn missing_patch_sorts_below_explicit_zero() {
        assert!(v("1.21") < v("1.21.0"));
        assert!(v("1.21.0") < v("1.21.1"));
    }

    #[test]
    fn display_round_trips() {
        for s in ["1.18", "1.21.0", "1.21.5", "1.10.0"] {
            assert_eq!(v(s).to_string(), s);
        }
    }
}
