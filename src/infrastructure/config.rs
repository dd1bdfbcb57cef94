use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::domain::course::Language;
use crate::presentation::config::{keybindings::KeyBindings, styles::Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

fn default_tick_rate() -> f64 {
    60.0
}

fn default_frame_rate() -> f64 {
    30.0
}

impl Default for Config {
    /// The embedded defaults. The asset is validated by tests, so a parse
    /// failure here is a build defect.
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        json5::from_str(CONFIG).expect("embedded default config must parse")
    }
}

impl Config {
    /// Load configuration, layering optional user files over the embedded
    /// defaults. No user file at all is fine; the defaults are complete.
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::paths::get_data_dir();
        let config_dir = utils::paths::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            return Ok(default_config);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_name, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_name.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }
}
