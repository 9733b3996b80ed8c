//! Shared types used across the declaration IR.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Identifier casing applied to wire-visible names via `RenameAll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingConvention {
    /// `myFieldName`
    CamelCase,
    /// `my-field-name`
    KebabCase,
    /// `MyFieldName`
    PascalCase,
    /// `my_field_name`
    SnakeCase,
}

impl NamingConvention {
    /// Parse the spelling used in `RenameAll` metadata.
    ///
    /// Returns `None` for anything unrecognized; callers treat that as
    /// "no convention".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "camelCase" => Some(Self::CamelCase),
            "kebab-case" => Some(Self::KebabCase),
            "PascalCase" => Some(Self::PascalCase),
            "snake_case" => Some(Self::SnakeCase),
            _ => None,
        }
    }

    /// The metadata spelling of this convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "PascalCase",
            Self::SnakeCase => "snake_case",
        }
    }
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The file that owns a declaration (e.g. `Source/Game/Public/Player.h`).
///
/// Generated output for every declaration in the same source unit lands in
/// one file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceUnit {
    pub path: PathBuf,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without extension (`Player.h` → `Player`).
    pub fn base_name(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }
}

impl std::fmt::Display for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Resolves the source-unit ids carried by declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceTable {
    units: BTreeMap<String, SourceUnit>,
}

impl SourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source unit under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, unit: SourceUnit) {
        self.units.insert(id.into(), unit);
    }

    pub fn with(mut self, id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(id, SourceUnit::new(path));
        self
    }

    pub fn resolve(&self, id: &str) -> Option<&SourceUnit> {
        self.units.get(id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
