//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read their case count and fork mode from one place so CI can dial
//! every property test up or down with a single environment variable.

use std::env;

use proptest::test_runner::Config as ProptestConfig;
use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const SPANWALK_PBT_FORK_ENV_KEY: &str = "SPANWALK_PBT_FORK";

/// Reasons an environment override is ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The case count was not an unsigned integer.
    #[error("expected an unsigned integer, got `{raw}`")]
    NotANumber {
        /// Raw value supplied by the environment.
        raw: String,
    },
    /// The case count was zero.
    #[error("cases must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{raw}`")]
    NotABool {
        /// Raw value supplied by the environment.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwalk_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(SPANWALK_PBT_FORK_ENV_KEY, parse_bool).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Builds a proptest configuration carrying this profile's case count
    /// and fork mode.
    #[must_use]
    pub fn proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            fork: self.fork,
            ..ProptestConfig::default()
        }
    }
}

/// Standard proptest configuration for a suite, honouring the
/// `PROGTEST_CASES` and `SPANWALK_PBT_FORK` overrides.
///
/// # Examples
///
/// ```
/// use spanwalk_test_support::ci::property_test_profile::suite_proptest_config;
///
/// let config = suite_proptest_config(32);
/// assert!(config.cases > 0);
/// ```
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases, false).proptest_config()
}

fn read_override<T>(
    key: &'static str,
    parser: fn(&str) -> Result<T, ProfileOverrideError>,
) -> Option<T> {
    let raw = env::var(key).ok()?;
    match parser(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(
                env = key,
                raw = %raw,
                %error,
                "invalid property-test profile override; using default",
            );
            None
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ProfileOverrideError::NotANumber {
            raw: raw.to_owned(),
        })?;
    if parsed == 0 {
        return Err(ProfileOverrideError::ZeroCases);
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
