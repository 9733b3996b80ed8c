//! Module IR — top-level scopes and the full declaration tree.

use serde::{Deserialize, Serialize};

use crate::model::Declaration;
use crate::types::SourceTable;

/// One top-level scope (a module or package) and its declaration root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Scope name (e.g. `Game`, `CoreUObject`).
    pub name: String,

    /// Owned by the platform/engine rather than user code.
    #[serde(default)]
    pub external: bool,

    pub root: Declaration,
}

/// Everything the host hands over for one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationTree {
    /// Source-unit id → file.
    #[serde(default)]
    pub sources: SourceTable,

    pub scopes: Vec<Scope>,
}

impl DeclarationTree {
    /// Scopes owned by user code.
    pub fn owned_scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter().filter(|s| !s.external)
    }
}
