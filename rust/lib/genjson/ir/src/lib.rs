//! GenJson declaration IR
//!
//! Plain data structures describing an already-parsed declaration graph:
//! - Types      — naming conventions, source units, the source table
//! - Metadata   — per-declaration key/value tags with typed accessors
//! - Model      — container, struct-like and enum-like declarations
//! - Module     — top-level scopes and the full declaration tree
//!
//! The host tool hands the tree over as JSON; the codegen crate walks it.

pub mod types;
pub mod metadata;
pub mod model;
pub mod module;

pub use types::*;
pub use metadata::*;
pub use model::*;
pub use module::*;
