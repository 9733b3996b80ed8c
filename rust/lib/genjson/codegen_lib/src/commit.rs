//! Committing generated files.
//!
//! A committer persists a generated file only when its content differs from
//! what is already there, so regenerating an unchanged tree touches nothing.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::GenError;
use crate::{GeneratedCode, GeneratedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    /// New or changed content was persisted.
    Written,
    /// Existing content already matched.
    Unchanged,
    /// Content differs but the committer only checks.
    Outdated,
}

pub trait CommitOutput {
    fn commit(&mut self, file: &GeneratedFile) -> Result<CommitStatus, GenError>;
}

/// Writes files below an output directory.
#[derive(Debug, Clone)]
pub struct FileCommitter {
    root: PathBuf,
    check_only: bool,
}

impl FileCommitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            check_only: false,
        }
    }

    /// Compare against the output directory without writing anything.
    pub fn check(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            check_only: true,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CommitOutput for FileCommitter {
    fn commit(&mut self, file: &GeneratedFile) -> Result<CommitStatus, GenError> {
        let path = self.root.join(&file.path);
        let commit_err = |source| GenError::Commit {
            path: path.clone(),
            source,
        };

        match fs::read(&path) {
            Ok(existing) if existing == file.content.as_bytes() => {
                debug!(path = %path.display(), "unchanged");
                return Ok(CommitStatus::Unchanged);
            }
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(commit_err(e)),
        }

        if self.check_only {
            debug!(path = %path.display(), "outdated");
            return Ok(CommitStatus::Outdated);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(commit_err)?;
        }
        fs::write(&path, &file.content).map_err(commit_err)?;
        debug!(path = %path.display(), bytes = file.content.len(), "written");
        Ok(CommitStatus::Written)
    }
}

/// In-memory committer keyed by output path, for hosts that persist files
/// themselves.
impl CommitOutput for BTreeMap<PathBuf, String> {
    fn commit(&mut self, file: &GeneratedFile) -> Result<CommitStatus, GenError> {
        if self.get(&file.path) == Some(&file.content) {
            return Ok(CommitStatus::Unchanged);
        }
        self.insert(file.path.clone(), file.content.clone());
        Ok(CommitStatus::Written)
    }
}

/// Per-status file counts for one generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub written: usize,
    pub unchanged: usize,
    pub outdated: usize,
}

impl CommitSummary {
    pub fn record(&mut self, status: CommitStatus) {
        match status {
            CommitStatus::Written => self.written += 1,
            CommitStatus::Unchanged => self.unchanged += 1,
            CommitStatus::Outdated => self.outdated += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.written + self.unchanged + self.outdated
    }
}

/// Commit every generated file, stopping at the first failure.
pub fn commit_all(
    code: &GeneratedCode,
    committer: &mut dyn CommitOutput,
) -> Result<CommitSummary, GenError> {
    let mut summary = CommitSummary::default();
    for file in &code.files {
        summary.record(committer.commit(file)?);
    }
    info!(
        files = summary.total(),
        written = summary.written,
        unchanged = summary.unchanged,
        outdated = summary.outdated,
        "committed generated files"
    );
    Ok(summary)
}
