use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::service::latency::LatencyProfile;
use crate::service::store::UnknownIdPolicy;

/// Default score at or above which `triage` links instead of creating.
pub const DEFAULT_LINK_THRESHOLD: u8 = 70;

/// How the service paces its operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatencyMode {
    /// Fixed per-operation delays the demo UI was tuned with (default)
    Demo,
    /// No delays
    None,
}

impl LatencyMode {
    pub fn profile(&self) -> LatencyProfile {
        match self {
            LatencyMode::Demo => LatencyProfile::demo(),
            LatencyMode::None => LatencyProfile::none(),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// Nothing is required; every variable has a default. The .env file is
/// loaded automatically at startup via dotenvy.
pub struct Config {
    /// JSON fixture with requirements and unlinked items (RTM_FIXTURE_PATH).
    /// When unset the built-in seed is used.
    pub fixture_path: Option<PathBuf>,
    pub latency: LatencyMode,
    /// Seed for the low-confidence fallback RNG (RTM_SEED). Unset = OS entropy.
    pub seed: Option<u64>,
    pub unknown_ids: UnknownIdPolicy,
    pub link_threshold: u8,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let latency = match env::var("RTM_LATENCY") {
            Ok(raw) => parse_latency(&raw)?,
            Err(_) => LatencyMode::Demo,
        };

        let unknown_ids = match env::var("RTM_UNKNOWN_IDS") {
            Ok(raw) => parse_unknown_ids(&raw)?,
            Err(_) => UnknownIdPolicy::Filter,
        };

        let seed = match env::var("RTM_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("RTM_SEED must be an unsigned integer: {e}"))?,
            ),
            Err(_) => None,
        };

        let link_threshold = match env::var("RTM_LINK_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_LINK_THRESHOLD,
        };

        Ok(Self {
            fixture_path: env::var("RTM_FIXTURE_PATH").ok().map(PathBuf::from),
            latency,
            seed,
            unknown_ids,
            link_threshold,
        })
    }

    /// Check that a configured fixture file actually exists.
    /// Call this before building a service from the fixture.
    pub fn require_fixture(&self) -> Result<()> {
        if let Some(path) = &self.fixture_path {
            if !path.exists() {
                anyhow::bail!(
                    "Fixture file not found: {}\n\
                     Unset RTM_FIXTURE_PATH to use the built-in demo data.",
                    path.display()
                );
            }
        }
        Ok(())
    }
}

/// Parse RTM_LATENCY: `demo`, or `none`/`off`. Case-insensitive.
pub fn parse_latency(raw: &str) -> Result<LatencyMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "demo" => Ok(LatencyMode::Demo),
        "none" | "off" => Ok(LatencyMode::None),
        other => anyhow::bail!("RTM_LATENCY must be 'demo' or 'none', got '{other}'"),
    }
}

/// Parse RTM_UNKNOWN_IDS: `filter` or `reject`. Case-insensitive.
pub fn parse_unknown_ids(raw: &str) -> Result<UnknownIdPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "filter" => Ok(UnknownIdPolicy::Filter),
        "reject" => Ok(UnknownIdPolicy::Reject),
        other => anyhow::bail!("RTM_UNKNOWN_IDS must be 'filter' or 'reject', got '{other}'"),
    }
}

/// Parse a 0-100 link threshold.
pub fn parse_threshold(raw: &str) -> Result<u8> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("link threshold must be an integer 0-100: {e}"))?;
    if value > 100 {
        anyhow::bail!("link threshold must be at most 100, got {value}");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold(" 85 ").unwrap(), 85);
        assert!(parse_threshold("101").is_err());
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("high").is_err());
    }

    #[test]
    fn test_parse_latency() {
        assert_eq!(parse_latency("demo").unwrap(), LatencyMode::Demo);
        assert_eq!(parse_latency(" None ").unwrap(), LatencyMode::None);
        assert_eq!(parse_latency("OFF").unwrap(), LatencyMode::None);
        assert!(parse_latency("nnone").is_err());
        assert!(parse_latency("").is_err());
    }

    #[test]
    fn test_parse_unknown_ids() {
        assert_eq!(parse_unknown_ids("Reject").unwrap(), UnknownIdPolicy::Reject);
        assert_eq!(parse_unknown_ids("filter").unwrap(), UnknownIdPolicy::Filter);
        assert!(parse_unknown_ids("strict").is_err());
    }

    #[test]
    fn test_missing_fixture_rejected() {
        let config = Config {
            fixture_path: Some(PathBuf::from("/nonexistent/fixture.json")),
            latency: LatencyMode::None,
            seed: None,
            unknown_ids: UnknownIdPolicy::Filter,
            link_threshold: DEFAULT_LINK_THRESHOLD,
        };
        assert!(config.require_fixture().is_err());
    }
}
