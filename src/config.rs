use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rust source for the trait and every block type.
    #[default]
    Rust,
    /// A RON description of every block layout.
    Ron,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Name prefix of the generated types, and of the type names discovery
    /// looks for.
    pub type_prefix: String,
    /// Module path the arrays file imports `InlineArray` from.
    pub interface_path: String,
    pub interface_file: String,
    pub arrays_file: String,
    pub descriptor_file: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            type_prefix: "Array".to_string(),
            interface_path: "super::inline_array".to_string(),
            interface_file: "inline_array.g.rs".to_string(),
            arrays_file: "arrays.g.rs".to_string(),
            descriptor_file: "arrays.g.ron".to_string(),
            format: OutputFormat::Rust,
        }
    }
}

impl Settings {
    pub fn from_toml(source: &str) -> Result<Settings> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Settings> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Settings::from_toml(&source)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Command line values win over whatever the file or the defaults set.
    pub fn apply_overrides(
        &mut self,
        format: Option<OutputFormat>,
        type_prefix: Option<String>,
        interface_path: Option<String>,
    ) {
        if let Some(format) = format {
            self.format = format;
        }

        if let Some(prefix) = type_prefix {
            self.type_prefix = prefix;
        }

        if let Some(path) = interface_path {
            self.interface_path = path;
        }
    }
}
