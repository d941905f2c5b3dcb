use crate::configuration::constants::common::{
    DEFAULT_ANNOTATION_COLOR, DEFAULT_OUTPUT_FORMAT, ENV_PREFIX,
};
use crate::reporter::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Optional settings file (YAML, JSON, TOML or HJSON by extension) merged
/// with `RUNLINE__*` environment variables, e.g.
/// `RUNLINE__ANNOTATION__DEFAULT_COLOR=#22c55e`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub annotation: AnnotationSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Deserialize)]
pub struct AnnotationSettings {
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Category to color, matched case-insensitively.
    #[serde(default)]
    pub palette: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_color() -> String {
    DEFAULT_ANNOTATION_COLOR.to_owned()
}

fn default_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_owned()
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            palette: HashMap::new(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::with_prefix(&format!("{}_", ENV_PREFIX)).separator("__"))?;
        config.try_into()
    }
}

impl AnnotationSettings {
    pub fn color_for(&self, category: &str) -> &str {
        let category = category.to_lowercase();
        self.palette
            .iter()
            .find(|(key, _)| key.to_lowercase() == category)
            .map(|(_, color)| color.as_str())
            .unwrap_or_else(|| self.default_color.as_str())
    }
}

impl RenderSettings {
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.format
            .parse::<OutputFormat>()
            .map_err(|err| ConfigError::Message(format!("render.format: {}", err)))
    }
}
