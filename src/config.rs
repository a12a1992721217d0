use rocket::figment::Figment;
use serde::Deserialize;

/// Service settings read from Rocket's figment (`Rocket.toml` / `ROCKET_*` env vars).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Mount point for every route.
    pub api_base: String,
    /// Value sent in `Access-Control-Allow-Origin`.
    pub cors_origin: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            api_base: "/api".to_string(),
            cors_origin: "*".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Extract from a figment, falling back to defaults if the values don't deserialize.
    pub fn from_figment(figment: &Figment) -> Self {
        let mut config = match figment.extract::<ServiceConfig>() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid service config, using defaults: {}", e);
                ServiceConfig::default()
            }
        };
        config.api_base = normalize_base(&config.api_base);
        config
    }
}

/// Leading slash, no trailing slash. Empty or "/" becomes "/".
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let figment = Figment::new();
        assert_eq!(ServiceConfig::from_figment(&figment), ServiceConfig::default());
    }

    #[test]
    fn reads_and_normalizes_overrides() {
        let figment = Figment::new()
            .merge(("api_base", "v1/creative/"))
            .merge(("cors_origin", "https://app.example.com"));
        let config = ServiceConfig::from_figment(&figment);
        assert_eq!(config.api_base, "/v1/creative");
        assert_eq!(config.cors_origin, "https://app.example.com");
    }

    #[test]
    fn bad_types_fall_back_to_defaults() {
        let figment = Figment::new().merge(("api_base", ["v1", "v2"]));
        assert_eq!(ServiceConfig::from_figment(&figment), ServiceConfig::default());
    }

    #[test]
    fn normalize_base_variants() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("/api"), "/api");
        assert_eq!(normalize_base("api/"), "/api");
    }
}
