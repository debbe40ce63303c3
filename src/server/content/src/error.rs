/* src/server/content/src/error.rs */

use std::path::PathBuf;

use thiserror::Error;

/// Failures in the content path.
///
/// "Not found" is deliberately absent: an unresolvable slug, a missing
/// collection directory or a missing shared fragment all degrade to
/// `None`/empty values at the call site. Only I/O, malformed JSON and
/// internally inconsistent documents are errors, and those are expected to
/// bubble to the render boundary.
#[derive(Debug, Error)]
pub enum ContentError {
  #[error("failed to read {path}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed JSON in {path}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid content in {path}: {reason}")]
  Invalid { path: PathBuf, reason: String },

  #[error("content directory {0} does not exist")]
  MissingContentDir(PathBuf),
}

impl ContentError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
    Self::Parse { path: path.into(), source }
  }

  pub fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
    Self::Invalid { path: path.into(), reason: reason.into() }
  }
}
