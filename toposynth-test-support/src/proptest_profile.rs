//! Environment-driven property-test tuning shared by every suite.
//!
//! `PROGTEST_CASES` overrides the case count and `TOPOSYNTH_PBT_FORK` toggles
//! forked execution. Invalid overrides are logged and ignored.

use std::env;

/// Environment variable overriding proptest case counts.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable overriding proptest process forking.
pub const FORK_ENV_KEY: &str = "TOPOSYNTH_PBT_FORK";

/// Resolved property-test settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides from the environment, falling back to the given
    /// defaults when a variable is unset or invalid.
    ///
    /// # Examples
    /// ```
    /// use toposynth_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Resolves the profile through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            cases: resolve(&lookup, CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(&lookup, FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T: Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, &'static str>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason,
            "invalid property-test override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be a positive integer"),
    }
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn profile_with(cases: Option<&str>, fork: Option<&str>) -> ProptestRunProfile {
        ProptestRunProfile::from_lookup(64, false, |key| match key {
            CASES_ENV_KEY => cases.map(str::to_owned),
            FORK_ENV_KEY => fork.map(str::to_owned),
            _ => None,
        })
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = profile_with(None, None);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn valid_case_overrides_win(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(profile_with(Some(raw), None).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn invalid_case_overrides_fall_back(#[case] raw: &str) {
        assert_eq!(profile_with(Some(raw), None).cases(), 64);
    }

    #[rstest]
    #[case("true", true)]
    #[case("ON", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("0", false)]
    fn valid_fork_overrides_win(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(profile_with(None, Some(raw)).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    fn invalid_fork_overrides_fall_back(#[case] raw: &str) {
        let profile = ProptestRunProfile::from_lookup(64, true, |key| {
            (key == FORK_ENV_KEY).then(|| raw.to_owned())
        });
        assert!(profile.fork());
    }
}
