//! Transfer-syntax mapping generators.
//!
//! Two independent pipelines keep the host project's transfer-syntax
//! enumeration and a third-party imaging library's enumeration in sync with
//! the authoritative JSON table:
//!
//! 1. **Header generation** ([`template`]): renders the whole table through
//!    an external template and fully rewrites a header file.
//! 2. **Switch patching** ([`patch`]): rewrites the bodies of the two
//!    hand-maintained conversion switches inside an existing C++ file,
//!    locating them through textual anchors.
//!
//! Neither pipeline depends on the other's output; both re-read the table
//! on every run and are idempotent.

pub mod error;
pub mod patch;
pub mod template;

pub use error::{Error, Result};

use std::path::Path;

use anyhow::Context;
use syntaxgen_table::load_table;

/// Convenience helper to run the header pipeline from file paths.
///
/// Returns the number of table rows exposed to the template.
pub fn generate_header_from_table(
    table_path: &Path,
    template_path: &Path,
    output_path: &Path,
) -> anyhow::Result<usize> {
    let table = load_table(table_path).context("loading transfer-syntax table")?;

    template::write_header(&template::HeaderJob {
        table: &table,
        template_path,
        output_path,
    })
    .context("rendering header")?;

    Ok(table.len())
}

/// Convenience helper to run the patch pipeline from file paths.
///
/// Returns the number of case clauses spliced into each switch.
pub fn patch_mappings_from_table(table_path: &Path, target_path: &Path) -> anyhow::Result<usize> {
    let table = load_table(table_path).context("loading transfer-syntax table")?;

    patch::patch_mappings(&patch::PatchJob {
        table: &table,
        target_path,
    })
    .context("patching mapping switches")?;

    Ok(table.iter().filter(|s| s.is_mapped()).count())
}
