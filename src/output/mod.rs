//! Aggregated output
//!
//! Joins collected document parts into the single Markdown artifact a run
//! produces, and writes it to disk.

use crate::convert::DocumentPart;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed visible separator between document parts
pub const PART_SEPARATOR: &str = "\n\n----------------------------------------\n\n";

/// Joins parts into the final aggregated document
///
/// Each part is rendered with its provenance header; parts appear in the
/// order they were collected (traversal order).
pub fn aggregate(parts: &[DocumentPart]) -> String {
    parts
        .iter()
        .map(DocumentPart::to_markdown)
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}

/// Writes the aggregated document to a file
pub fn write_aggregate(parts: &[DocumentPart], path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(aggregate(parts).as_bytes())?;
    tracing::info!(
        "Wrote {} part(s) to {}",
        parts.len(),
        path.display()
    );
    Ok(())
}
