use crate::types::{LabelError, Result};
use std::path::Path;

/// Largest number of labels accepted in one run (about 476 A4 sheets)
pub const MAX_LABELS: usize = 10_000;

/// Where serial numbers come from
#[derive(Debug, Clone, PartialEq)]
pub enum SerialSource {
    /// Contiguous integer run beginning at `start`
    Auto { start: i64 },
    /// Operator-typed entries, one per label
    Manual { entries: Vec<String> },
}

/// Parse the starting serial number typed into the form
pub fn parse_start(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| LabelError::input("Starting Serial Number must be a valid integer."))
}

/// Produce exactly `count` serial strings.
///
/// Manual entries are trimmed, then padded with blanks or truncated to
/// `count`. Blank entries are legal and end up as empty cells on the sheet.
pub fn generate_serials(count: usize, source: &SerialSource) -> Result<Vec<String>> {
    if count == 0 {
        return Err(LabelError::input("Number of labels must be greater than 0."));
    }
    if count > MAX_LABELS {
        return Err(too_many_labels());
    }

    match source {
        SerialSource::Auto { start } => auto_serials(*start, count),
        SerialSource::Manual { entries } => Ok(manual_serials(entries, count)),
    }
}

pub(crate) fn too_many_labels() -> LabelError {
    LabelError::input(format!("Number of labels must be at most {MAX_LABELS}."))
}

fn auto_serials(start: i64, count: usize) -> Result<Vec<String>> {
    let last_offset = i64::try_from(count - 1).ok();
    if last_offset.and_then(|offset| start.checked_add(offset)).is_none() {
        return Err(LabelError::input(format!(
            "Serial numbers starting at {start} overflow after {count} labels."
        )));
    }

    Ok((0..count as i64).map(|i| (start + i).to_string()).collect())
}

fn manual_serials(entries: &[String], count: usize) -> Vec<String> {
    if entries.len() > count {
        log::warn!(
            "{} serial numbers supplied for {} labels; ignoring the extra {}",
            entries.len(),
            count,
            entries.len() - count
        );
    }

    let mut serials: Vec<String> = entries
        .iter()
        .take(count)
        .map(|s| s.trim().to_string())
        .collect();
    serials.resize(count, String::new());
    serials
}

/// Read manual serial numbers from the first column of a header-less CSV
/// file. Rows with an empty first field become blank entries; empty lines
/// are skipped.
pub async fn load_serials_from_csv(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let serials = tokio::task::spawn_blocking(move || parse_serials_csv(&contents)).await??;

    log::info!("Read {} serial numbers from {}", serials.len(), path.display());
    Ok(serials)
}

pub fn parse_serials_csv(contents: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut serials = Vec::new();
    for result in reader.records() {
        let record = result?;
        serials.push(record.get(0).unwrap_or_default().to_string());
    }
    Ok(serials)
}
