//! Typed startup failures.
//!
//! Every component of the resolution pipeline is total over its input, so
//! the only errors the engine knows about happen while it is being built:
//! a linguistic resource or the salary model could not be loaded. Both are
//! fatal at process start; callers wrap them in `anyhow` with context.

use std::path::PathBuf;

/// Errors raised while assembling the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A linguistic capability (tokenizer, stopwords, lexicon, ...) failed to load.
    #[error("linguistic resource '{resource}' unavailable: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    /// The salary regression artifact failed to load or validate.
    #[error("salary model unavailable at {}: {reason}", path.display())]
    ModelUnavailable { path: PathBuf, reason: String },
}

impl EngineError {
    pub fn resource(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    pub fn model(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
