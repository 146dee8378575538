use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub encoder: EncoderConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    #[serde(default = "default_size")]
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub preview: bool,
    #[serde(default = "default_delay_ms")]
    pub loading_delay_ms: u64,
}

// Default value functions
fn default_size() -> u32 {
    600
}
fn default_true() -> bool {
    true
}
fn default_delay_ms() -> u64 {
    0
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preview: default_true(),
            loading_delay_ms: default_delay_ms(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("qrshare.toml").required(false))
            .add_source(config::Environment::with_prefix("QRSHARE"));

        // Override with individual environment variables
        if let Ok(size) = std::env::var("QR_SIZE") {
            builder = builder.set_override("encoder.size", size)?;
        }
        if let Ok(share) = std::env::var("QR_SHARE") {
            builder = builder.set_override("share.enabled", share)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn save_example() -> Result<()> {
        let example_config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&example_config)?;
        std::fs::write("qrshare.example.toml", toml_string)?;
        Ok(())
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_content)?;
        Ok(config)
    }
}
