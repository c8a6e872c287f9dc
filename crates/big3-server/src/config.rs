use std::path::PathBuf;

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Current environment (development, production)
    pub environment: String,
    pub port: u16,
    /// Exercise catalog served at `/api/exercises`. `None` serves the
    /// catalog bundled with big3-core.
    pub catalog_path: Option<PathBuf>,
    /// Built frontend assets
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            catalog_path: None,
            static_dir: PathBuf::from("frontend/dist"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or unparsable values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            environment: lookup("BIG3_ENV").unwrap_or(defaults.environment),
            port: lookup("PORT")
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            catalog_path: lookup("CATALOG_PATH")
                .map(PathBuf::from)
                .or(defaults.catalog_path),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.catalog_path, None);
        assert!(!cfg.is_production());
    }

    #[test]
    fn catalog_path_from_env() {
        let cfg = ServerConfig::from_lookup(|key| {
            (key == "CATALOG_PATH").then(|| "/srv/big3/exercises.json".to_string())
        });
        assert_eq!(
            cfg.catalog_path,
            Some(PathBuf::from("/srv/big3/exercises.json"))
        );
    }

    #[test]
    fn bad_port_keeps_default() {
        let cfg = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".into()),
            "BIG3_ENV" => Some("production".into()),
            _ => None,
        });
        assert_eq!(cfg.port, 3000);
        assert!(cfg.is_production());
    }
}
