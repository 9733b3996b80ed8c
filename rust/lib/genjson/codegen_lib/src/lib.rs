//! GenJson codegen library
//!
//! Turns a declaration tree into per-source-unit serializer headers:
//!
//! ```text
//! DeclarationTree ─ walker ─▶ GenerationUnits ─ SerializerGenerator ─▶ GeneratedCode ─ commit ─▶ files
//! ```
//!
//! Each pass builds its own `GenerationUnits`; nothing is kept between runs.

pub mod commit;
pub mod error;
pub mod naming;
pub mod serializer;
pub mod units;
pub mod walker;
pub mod write_enum;
pub mod write_struct;

use std::path::PathBuf;

use genjson_ir::{DeclarationTree, SourceUnit};
use tracing::info;

pub use commit::{commit_all, CommitOutput, CommitStatus, CommitSummary, FileCommitter};
pub use error::GenError;
pub use naming::{resolve_enum_value_name, resolve_field_name};
pub use serializer::{GeneratorOptions, RecordEmitter, SerializerGenerator, WriteEmitter};
pub use units::{
    DiscoveryKind, DiscoveryRecord, EnumRecord, GenerationUnit, GenerationUnits, StructRecord,
};
pub use walker::{discover, discover_root, discover_scopes};
pub use write_enum::enum_serializer;
pub use write_struct::struct_serializer;

/// Codegen trait - implement this for each output flavor
pub trait Codegen {
    fn generate(&self, units: &GenerationUnits<'_>) -> Result<GeneratedCode, GenError>;
    fn target(&self) -> &str;
}

#[derive(Debug, Clone, Default)]
pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Source unit the file was generated for.
    pub source: SourceUnit,
    /// Path relative to the output root.
    pub path: PathBuf,
    pub content: String,
}

/// Run a full pass over the user-owned scopes of `tree` and commit the result.
pub fn run(
    tree: &DeclarationTree,
    options: GeneratorOptions,
    committer: &mut dyn CommitOutput,
) -> Result<CommitSummary, GenError> {
    info!("GenJson code generation started.");
    let units = discover(tree)?;
    let code = SerializerGenerator::new(options).generate(&units)?;
    commit_all(&code, committer)
}
