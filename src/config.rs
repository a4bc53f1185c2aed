use std::env;
use std::path::PathBuf;

/// Runtime settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// JSON seed file; the embedded activity list is used when unset.
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            seed_path: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_path: non_empty("ACTIVITIES_SEED").map(PathBuf::from),
            log_format: match non_empty("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => defaults.log_format,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tried when `bind_addr` is taken.
    pub fn fallback_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.fallback_bind_addr(), "127.0.0.1:8001");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("STATIC_DIR", "/srv/static"),
            ("ACTIVITIES_SEED", "/etc/activities.json"),
            ("LOG_FORMAT", "json"),
        ]);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.seed_path, Some(PathBuf::from("/etc/activities.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "eighty"), ("ACTIVITIES_SEED", " ")]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.seed_path, None);
    }
}
