use log::{info, warn};
use std::path::Path;

use crate::config::ServiceConfig;
use crate::creative::profile;

/// Run all boot checks. Call this before Rocket launches.
/// Logs the effective configuration and returns the number of warnings raised.
pub fn run(config: &ServiceConfig) -> u32 {
    info!("Campaign creative boot check starting...");

    let mut warnings = 0u32;

    // ── 1. Mount point / CORS ──────────────────────────
    info!("  API mounted at: {}", config.api_base);
    info!("  CORS origin: {}", config.cors_origin);
    if config.cors_origin.trim() == "*" {
        warn!("  CORS allows any origin");
        warnings += 1;
    }

    // ── 2. Profiles ────────────────────────────────────
    for p in profile::all() {
        info!(
            "  Profile {}: angle={}, theme={}, audience_limit={}",
            p.name,
            p.default_angle.key(),
            p.default_theme.key(),
            p.audience_limit
        );
    }

    // ── 3. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        info!("  Rocket.toml not found, using defaults and ROCKET_* env vars");
    }

    if warnings > 0 {
        warn!("Boot check passed with {} warning(s).", warnings);
    } else {
        info!("Boot check passed. All systems go.");
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_cors_is_a_warning() {
        assert_eq!(run(&ServiceConfig::default()), 1);
    }

    #[test]
    fn pinned_origin_is_clean() {
        let config = ServiceConfig {
            cors_origin: "https://app.example.com".to_string(),
            ..ServiceConfig::default()
        };
        assert_eq!(run(&config), 0);
    }
}
