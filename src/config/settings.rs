use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub otel: OtelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Required `X-API-Key` value; render endpoints are open when unset
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Largest accepted `body` in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtelConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_otel_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_sampling_ratio")]
    pub sampling_ratio: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MiB
}

fn default_otel_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_service_name() -> String {
    "notification-email-renderer".to_string()
}

fn default_sampling_ratio() -> f64 {
    1.0
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("render.max_body_bytes", default_max_body_bytes() as i64)?
            .set_default("otel.enabled", false)?
            .set_default("otel.endpoint", default_otel_endpoint())?
            .set_default("otel.service_name", default_service_name())?
            .set_default("otel.sampling_ratio", default_sampling_ratio())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            .add_source(environment_source());

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// SERVER__HOST, SERVER__PORT, API__KEY, RENDER__MAX_BODY_BYTES, OTEL__ENABLED, etc.
/// A double underscore separates sections so keys may contain single underscores.
fn environment_source() -> Environment {
    Environment::default()
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.cors_origins")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_otel_endpoint(),
            service_name: default_service_name(),
            sampling_ratio: default_sampling_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8081);
        assert!(server.cors_origins.is_empty());

        assert_eq!(RenderConfig::default().max_body_bytes, 1024 * 1024);
        assert!(ApiConfig::default().key.is_none());
    }

    #[test]
    fn test_server_addr() {
        let mut settings = Settings::default();
        settings.server.host = "127.0.0.1".to_string();
        settings.server.port = 9000;
        assert_eq!(settings.server_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let settings: Settings = Config::builder()
            .set_override("server.port", 9100)
            .unwrap()
            .set_override("api.key", "secret")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.api.key.as_deref(), Some("secret"));
        assert_eq!(settings.render.max_body_bytes, 1024 * 1024);
        assert!(!settings.otel.enabled);
    }

    #[test]
    fn test_environment_keys_with_underscores() {
        let vars: HashMap<String, String> = [
            ("RENDER__MAX_BODY_BYTES", "2048"),
            ("SERVER__PORT", "9200"),
            ("SERVER__HOST", "127.0.0.1"),
            ("SERVER__CORS_ORIGINS", "https://a.example,https://b.example"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings: Settings = Config::builder()
            .add_source(environment_source().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.render.max_body_bytes, 2048);
        assert_eq!(settings.server.port, 9200);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(
            settings.server.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
