use crate::options::LabelOptions;
use crate::pdf::generate_pdf;
use crate::types::{GenerationSummary, LabelError, LabelRequest, Result};
use std::path::Path;

/// Hand `path` to the host's default document viewer
pub fn open_in_viewer(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("Opening {} in the default viewer", path.display());
    opener::open(path)
        .map_err(|e| LabelError::Viewer(format!("Could not open {}: {}", path.display(), e)))
}

/// Generate the sheet, then show it.
///
/// A viewer failure is reported after the document has been written; the
/// file is left in place.
pub async fn generate_and_open(
    request: &LabelRequest,
    options: &LabelOptions,
) -> Result<GenerationSummary> {
    let summary = generate_pdf(request, options).await?;
    open_in_viewer(&summary.output_path)?;
    Ok(summary)
}
