use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("declaration '{declaration}' references unknown source unit '{source_id}'")]
    UnresolvedSource {
        source_id: String,
        declaration: String,
    },

    #[error("source unit '{}' has no usable base name", path.display())]
    InvalidSourcePath { path: PathBuf },

    #[error(
        "source units '{}' and '{}' both map to output '{}'",
        first.display(),
        second.display(),
        path.display()
    )]
    OutputCollision {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to commit '{}': {source}", path.display())]
    Commit {
        path: PathBuf,
        source: std::io::Error,
    },
}
