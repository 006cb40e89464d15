use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

// Runtime constants — wire behavior clients depend on
pub const DEFAULT_PORT: u16 = 8900;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const MAX_PAYLOAD_BYTES: usize = 128 * 1024; // 128 KB hard cap per inbound frame
pub const WEATHER_INTERVAL_SECS: u64 = 60; // simulated forecast cadence
pub const SENSOR_INTERVAL_SECS: u64 = 5; // simulated humidity cadence
pub const SENSOR_MIN: u32 = 30; // inclusive
pub const SENSOR_MAX: u32 = 90; // exclusive
pub const WEATHER_CONDITIONS: [&str; 3] = ["Sunny", "Cloudy", "Rainy"];

/// Top-level config (verdant.toml + VERDANT_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VerdantConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub emitters: EmitterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Cadence of the simulated readings pushed to every client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterConfig {
    #[serde(default = "default_weather_interval")]
    pub weather_interval_secs: u64,
    #[serde(default = "default_sensor_interval")]
    pub sensor_interval_secs: u64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            weather_interval_secs: WEATHER_INTERVAL_SECS,
            sensor_interval_secs: SENSOR_INTERVAL_SECS,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_weather_interval() -> u64 {
    WEATHER_INTERVAL_SECS
}
fn default_sensor_interval() -> u64 {
    SENSOR_INTERVAL_SECS
}

impl VerdantConfig {
    /// Load config from a TOML file with VERDANT_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.verdant/verdant.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: VerdantConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("VERDANT_").split("_"))
            .extract()
            .map_err(|e| crate::error::VerdantError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.verdant/verdant.toml", home)
}
