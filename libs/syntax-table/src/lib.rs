//! Canonical model for the DICOM transfer-syntax mapping table.
//!
//! The table is a JSON array of objects, one per transfer syntax known to
//! the host project. Each row pairs the host's symbolic name with the
//! corresponding constant of the third-party imaging library, when one
//! exists. Descriptive fields the generators do not consume (UID, display
//! name, retirement status, ...) are preserved verbatim so that templates
//! can still reach them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One row of the transfer-syntax table.
///
/// `identifier` is expected to be unique across the table. Uniqueness is
/// not enforced here: a duplicate row produces two identical case labels
/// downstream, which the C++ compiler rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSyntax {
    /// Symbolic name in the host project's enumeration.
    pub identifier: String,

    /// Symbolic constant in the third-party library's enumeration, absent
    /// for syntaxes the library does not implement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,

    /// All remaining fields of the row, kept for template consumption.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransferSyntax {
    /// Whether this syntax has a counterpart in the third-party library.
    pub fn is_mapped(&self) -> bool {
        self.external_identifier.is_some()
    }
}

/// Load the table from a JSON document whose top-level value is an array
/// of objects. Row order is preserved; every invocation re-reads the file.
pub fn load_table(path: &Path) -> Result<Vec<TransferSyntax>> {
    let text = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| TableError::Parse {
        path: path.display().to_string(),
        source,
    })
}
