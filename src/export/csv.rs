//! CSV export of positive verdicts.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::classify::Verdict;

/// Column header of the verdict table. Order and naming are part of the
/// external contract.
const HEADER: [&str; 4] = ["URL", "Content Length", "Title", "JSNum"];

/// Writes one row per verdict to `path`, in the order given.
///
/// The caller decides whether to export at all; a run with no verdicts
/// skips this entirely rather than leaving an empty table behind.
///
/// # Returns
///
/// The number of rows written, or an error if the file cannot be created
/// or written.
pub fn write_verdicts(path: &Path, verdicts: &[Verdict]) -> Result<usize> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;

    for verdict in verdicts {
        writer
            .write_record([
                verdict.url.as_str(),
                &verdict.content_length.to_string(),
                verdict.title.as_str(),
                &verdict.script_count.to_string(),
            ])
            .with_context(|| format!("Failed to write row for {}", verdict.url))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(verdicts.len())
}
