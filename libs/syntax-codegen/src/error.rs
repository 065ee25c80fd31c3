//! Error types for the two generation pipelines.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("anchor '{anchor}' not found in {path}")]
    PatternNotFound { anchor: &'static str, path: PathBuf },
}
