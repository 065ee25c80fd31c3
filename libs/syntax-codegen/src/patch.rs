//! In-place rewrite of the two hand-maintained mapping switches inside an
//! existing C++ source file.
//!
//! The file is never parsed. Each switch is located through a textual
//! anchor: the function signature followed by the `switch` opening on one
//! side, the line introducing the `default:` case on the other. Whatever
//! sits between the anchors — including the cases a previous run generated —
//! is thrown away and replaced, which is what makes reruns idempotent.
//!
//! Both regions are rewritten against an in-memory copy of the text and the
//! file is written once at the end, so a failed anchor search leaves the
//! on-disk file untouched. A failed search is always an error: it means the
//! target file's structure has drifted from what this generator expects,
//! and silently skipping the splice would leave a stale mapping behind.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use syntaxgen_table::TransferSyntax;

use crate::error::{Error, Result};

const HOST_PREFIX: &str = "Orthanc::DicomTransferSyntax_";
const EXTERNAL_PREFIX: &str = "gdcm::TransferSyntax::";

/// Literal line introducing the default case, indentation included. Any
/// reformatting of the target file that touches this line is structural
/// drift and must surface as `PatternNotFound`, never as "nothing to do".
const DEFAULT_MARKER: &str = "      default:";

const FORWARD_ANCHOR: &str = "GetGdcmTransferSyntax";
const REVERSE_ANCHOR: &str = "GetOrthancTransferSyntax";

static FORWARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"gdcm::TransferSyntax\s+(?:[A-Za-z_]\w*::)*GetGdcmTransferSyntax",
        r"\(Orthanc::DicomTransferSyntax\s+syntax\)\s*\{\s*switch \(syntax\)\s*\{\n",
    ))
    .expect("forward anchor regex")
});

static REVERSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Orthanc::DicomTransferSyntax\s+(?:[A-Za-z_]\w*::)*GetOrthancTransferSyntax",
        r"\(gdcm::TransferSyntax\s+syntax\)\s*\{\s*switch \(syntax\)\s*\{\n",
    ))
    .expect("reverse anchor regex")
});

/// One patch run: table in, target file rewritten in place.
#[derive(Debug)]
pub struct PatchJob<'a> {
    pub table: &'a [TransferSyntax],
    pub target_path: &'a Path,
}

/// Byte range of the replaceable body between a start anchor and the first
/// end marker after it.
#[derive(Debug, Clone, Copy)]
struct Region {
    body_start: usize,
    body_end: usize,
}

/// Find the region delimited by `start` and the first `end_marker` after
/// it. This is the only place that knows how regions are matched; fragment
/// derivation never touches the text.
fn locate(
    text: &str,
    start: &Regex,
    end_marker: &str,
    anchor: &'static str,
    path: &Path,
) -> Result<Region> {
    let missing = || Error::PatternNotFound {
        anchor,
        path: path.to_path_buf(),
    };

    let head = start.find(text).ok_or_else(missing)?;
    let offset = text[head.end()..].find(end_marker).ok_or_else(missing)?;

    Ok(Region {
        body_start: head.end(),
        body_end: head.end() + offset,
    })
}

/// Replace the body of `region`, keeping everything around it.
fn splice(text: &str, region: Region, fragment: &str) -> String {
    let mut out = String::with_capacity(text.len() + fragment.len());
    out.push_str(&text[..region.body_start]);
    out.push_str(fragment);
    out.push_str(&text[region.body_end..]);
    out
}

/// Rows that have a counterpart in the third-party library, in table order.
fn mapped_pairs(table: &[TransferSyntax]) -> impl Iterator<Item = (&str, &str)> {
    table.iter().filter_map(|s| {
        s.external_identifier
            .as_deref()
            .map(|ext| (s.identifier.as_str(), ext))
    })
}

/// Case clauses mapping host constants to library constants.
fn forward_cases(table: &[TransferSyntax]) -> String {
    let mut out = String::new();
    for (identifier, external) in mapped_pairs(table) {
        out.push_str(&format!(
            "      case {HOST_PREFIX}{identifier}:\n        return {EXTERNAL_PREFIX}{external};\n\n"
        ));
    }
    out
}

/// Case clauses mapping library constants back to host constants.
fn reverse_cases(table: &[TransferSyntax]) -> String {
    let mut out = String::new();
    for (identifier, external) in mapped_pairs(table) {
        out.push_str(&format!(
            "      case {EXTERNAL_PREFIX}{external}:\n        return {HOST_PREFIX}{identifier};\n\n"
        ));
    }
    out
}

/// Rewrite both switch bodies in `text`. Pure; the caller decides when the
/// result reaches the disk.
fn apply_patches(text: &str, table: &[TransferSyntax], path: &Path) -> Result<String> {
    let forward = locate(text, &FORWARD_RE, DEFAULT_MARKER, FORWARD_ANCHOR, path)?;
    let text = splice(text, forward, &forward_cases(table));

    // Offsets moved with the first splice, so the second search runs on the
    // updated text.
    let reverse = locate(&text, &REVERSE_RE, DEFAULT_MARKER, REVERSE_ANCHOR, path)?;
    Ok(splice(&text, reverse, &reverse_cases(table)))
}

/// Run the full pipeline: read the target, rewrite both mapping switches,
/// write the file back once. Nothing is written unless both regions match.
pub fn patch_mappings(job: &PatchJob<'_>) -> Result<()> {
    let text = fs::read_to_string(job.target_path).map_err(|source| Error::Read {
        path: job.target_path.to_path_buf(),
        source,
    })?;

    let patched = apply_patches(&text, job.table, job.target_path)?;

    fs::write(job.target_path, patched).map_err(|source| Error::Write {
        path: job.target_path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        target = %job.target_path.display(),
        cases = mapped_pairs(job.table).count(),
        "mapping switches rewritten"
    );

    Ok(())
}
