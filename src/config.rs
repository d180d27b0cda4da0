use log::Level;
use std::time::Duration;

const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 10_000;
const DEFAULT_SLIDE_TRANSITION_MS: u64 = 500;
const DEFAULT_LOG_LEVEL: Level = Level::Info;

const AUTOPLAY_INTERVAL_MS_BOUNDS: (u64, u64) = (1_000, 120_000);
const SLIDE_TRANSITION_MS_BOUNDS: (u64, u64) = (0, 5_000);

/// Tunables baked in at build time. Anything missing, malformed, or out of
/// bounds silently falls back to its default.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteRuntimeConfig {
    pub autoplay_interval: Duration,
    pub slide_transition: Duration,
    pub log_level: Level,
}

impl Default for SiteRuntimeConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS),
            slide_transition: Duration::from_millis(DEFAULT_SLIDE_TRANSITION_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteRuntimeConfig {
    /// Reads the `PORTFOLIO_*` variables visible to the compiler. A static
    /// bundle has no process environment at runtime.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            "PORTFOLIO_AUTOPLAY_INTERVAL_MS" => option_env!("PORTFOLIO_AUTOPLAY_INTERVAL_MS"),
            "PORTFOLIO_SLIDE_TRANSITION_MS" => option_env!("PORTFOLIO_SLIDE_TRANSITION_MS"),
            "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let autoplay_interval_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_AUTOPLAY_INTERVAL_MS"),
            DEFAULT_AUTOPLAY_INTERVAL_MS,
            AUTOPLAY_INTERVAL_MS_BOUNDS,
        );
        let slide_transition_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_SLIDE_TRANSITION_MS"),
            DEFAULT_SLIDE_TRANSITION_MS,
            SLIDE_TRANSITION_MS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("PORTFOLIO_LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            autoplay_interval: Duration::from_millis(autoplay_interval_ms),
            slide_transition: Duration::from_millis(slide_transition_ms),
            log_level,
        }
    }
}

fn parse_non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    parse_non_empty(raw)
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>, default: Level) -> Level {
    match parse_non_empty(raw)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("error") => Level::Error,
        Some("warn") => Level::Warn,
        Some("info") => Level::Info,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        _ => default,
    }
}
