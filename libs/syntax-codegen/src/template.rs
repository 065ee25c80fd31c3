//! Header generation: renders the transfer-syntax table through an external
//! template and fully rewrites the destination file.
//!
//! The template sees the entire table (including rows without an external
//! counterpart) under the [`SYNTAXES_KEY`] binding. That key is a contract
//! between this generator and the template file; the two evolve together,
//! and a mismatch surfaces as a template-engine error, not a crash here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use minijinja::value::Value;
use minijinja::{Environment, UndefinedBehavior};
use syntaxgen_table::TransferSyntax;

use crate::error::{Error, Result};

/// Name under which the template reaches the entry sequence.
pub const SYNTAXES_KEY: &str = "syntaxes";

/// One header-generation run: table in, rendered file out.
#[derive(Debug)]
pub struct HeaderJob<'a> {
    pub table: &'a [TransferSyntax],
    pub template_path: &'a Path,
    pub output_path: &'a Path,
}

/// Render `template_src` against the table.
///
/// Undefined values render as the empty string (lenient mode), matching the
/// mustache engine the table format was designed for: a template may
/// reference a descriptive field that only some rows carry. Iterating a
/// binding the template got wrong is still an error.
///
/// The template text passes through verbatim, trailing newline included;
/// minijinja would otherwise strip it.
pub fn render(template_src: &str, table: &[TransferSyntax]) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Lenient);
    env.set_keep_trailing_newline(true);

    let template = env.template_from_str(template_src)?;

    let bindings = {
        let mut map = HashMap::new();
        map.insert(SYNTAXES_KEY.to_string(), Value::from_serialize(table));
        Value::from(map)
    };

    Ok(template.render(bindings)?)
}

/// Run the full pipeline: read the template, render it, and overwrite the
/// output path. Rerunning with unchanged inputs yields byte-identical output.
pub fn write_header(job: &HeaderJob<'_>) -> Result<()> {
    let template_src = fs::read_to_string(job.template_path).map_err(|source| Error::Read {
        path: job.template_path.to_path_buf(),
        source,
    })?;

    let rendered = render(&template_src, job.table)?;

    fs::write(job.output_path, rendered).map_err(|source| Error::Write {
        path: job.output_path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        output = %job.output_path.display(),
        syntaxes = job.table.len(),
        "header regenerated"
    );

    Ok(())
}
