use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Redis connection URL for device storage; in-memory storage when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Prefix applied to every storage key
    #[serde(default = "default_storage_namespace")]
    pub storage_namespace: String,

    /// JSON file to load the event catalog from; bundled catalog when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Fallback tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage_namespace() -> String {
    "eventscout".to_string()
}

fn default_log_filter() -> String {
    "event_scout=info,tower_http=info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.redis_url, None);
        assert_eq!(config.storage_namespace, "eventscout");
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_values_from_environment() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("REDIS_URL".to_string(), "redis://cache:6379".to_string()),
            ("STORAGE_NAMESPACE".to_string(), "test".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.storage_namespace, "test");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
