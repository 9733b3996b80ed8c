//! Generator configuration.
//!
//! Reads an optional `genjson.toml`. Every key is optional; an absent file
//! or section reproduces the default output layout.

use std::path::Path;

use anyhow::Context;
use genjson_codegen_lib::GeneratorOptions;
use serde::{Deserialize, Serialize};

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to each source unit's base name.
    pub suffix: String,

    /// Macro wrapping all definitions of one output file.
    pub macro_name: String,

    /// Runtime header included at the top of every output file.
    pub runtime_header: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            suffix: options.suffix,
            macro_name: options.macro_name,
            runtime_header: options.runtime_header,
        }
    }
}

/// `[scan]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Also walk scopes owned by the engine/platform.
    pub include_external: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub output: OutputConfig,
    pub scan: ScanConfig,
}

impl GenConfig {
    /// Load config from disk, or return defaults if no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            suffix: self.output.suffix.clone(),
            macro_name: self.output.macro_name.clone(),
            runtime_header: self.output.runtime_header.clone(),
        }
    }
}
