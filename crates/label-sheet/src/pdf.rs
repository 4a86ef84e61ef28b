use crate::layout::{PlacedLabel, plan_labels};
use crate::options::{FontSource, LabelOptions};
use crate::types::{GenerationSummary, LabelError, LabelRequest, Result};
use printpdf::*;
use std::path::{Path, PathBuf};

/// Render `request` to a PDF at `options.output_path`, replacing any
/// previous file there.
///
/// The font is loaded and the whole document is built in memory first, so a
/// font problem leaves the output path untouched.
pub async fn generate_pdf(
    request: &LabelRequest,
    options: &LabelOptions,
) -> Result<GenerationSummary> {
    options.validate()?;

    let labels = plan_labels(request, options);
    let pages = options.geometry.page_count(request.serials.len());
    let font_bytes = load_font_bytes(&options.font).await?;

    let output_path = options.output_path.clone();
    let summary = GenerationSummary {
        output_path: output_path.clone(),
        labels_rendered: labels.len(),
        labels_skipped: request.serials.len().saturating_sub(labels.len()),
        pages,
    };

    let render_options = options.clone();
    let bytes = tokio::task::spawn_blocking(move || {
        render_pdf_bytes(&labels, pages, &render_options, font_bytes.as_deref())
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    log::info!(
        "Wrote {} labels on {} page(s) to {}",
        summary.labels_rendered,
        summary.pages,
        output_path.display()
    );
    Ok(summary)
}

async fn load_font_bytes(font: &FontSource) -> Result<Option<Vec<u8>>> {
    match font {
        FontSource::Builtin => Ok(None),
        FontSource::File(path) => match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) => Err(font_error(path, font_read_reason(path, &e))),
        },
    }
}

fn font_read_reason(path: &Path, error: &std::io::Error) -> String {
    match error.kind() {
        std::io::ErrorKind::NotFound => format!(
            "font not found. Ensure '{}' is in the directory.",
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        ),
        _ => error.to_string(),
    }
}

fn font_error(path: &Path, reason: impl Into<String>) -> LabelError {
    LabelError::Font {
        path: PathBuf::from(path),
        reason: reason.into(),
    }
}

enum Typeface {
    Builtin(BuiltinFont),
    Embedded(FontId),
}

impl Typeface {
    fn push_line(&self, ops: &mut Vec<Op>, x_pt: f32, y_pt: f32, size_pt: f32, text: &str) {
        ops.push(Op::StartTextSection);
        match self {
            Typeface::Builtin(font) => {
                ops.push(Op::SetFontSizeBuiltinFont {
                    font: font.clone(),
                    size: Pt(size_pt),
                });
                ops.push(Op::SetTextCursor {
                    pos: Point {
                        x: Pt(x_pt),
                        y: Pt(y_pt),
                    },
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(text.to_string())],
                    font: font.clone(),
                });
            }
            Typeface::Embedded(font_id) => {
                ops.push(Op::SetFontSize {
                    font: font_id.clone(),
                    size: Pt(size_pt),
                });
                ops.push(Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Pt(x_pt), Pt(y_pt)),
                });
                ops.push(Op::WriteText {
                    items: vec![TextItem::Text(text.to_string())],
                    font: font_id.clone(),
                });
            }
        }
        ops.push(Op::EndTextSection);
    }
}

/// Build the document bytes for already placed labels.
///
/// `font_bytes` is the TrueType data for [`FontSource::File`], or `None` to
/// use built-in Helvetica.
pub fn render_pdf_bytes(
    labels: &[PlacedLabel],
    pages: usize,
    options: &LabelOptions,
    font_bytes: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("Labels");

    let typeface = match font_bytes {
        None => Typeface::Builtin(BuiltinFont::Helvetica),
        Some(bytes) => {
            let mut font_warnings = Vec::new();
            let font = ParsedFont::from_bytes(bytes, 0, &mut font_warnings).ok_or_else(|| {
                let path = match &options.font {
                    FontSource::File(path) => path.clone(),
                    FontSource::Builtin => PathBuf::new(),
                };
                font_error(&path, "not a usable TrueType font")
            })?;
            Typeface::Embedded(doc.add_font(&font))
        }
    };

    let geometry = &options.geometry;
    let page_width = Mm::from(Pt(geometry.page_width_pt));
    let page_height = Mm::from(Pt(geometry.page_height_pt));
    let font_size_pt = options.template.font_size_pt;

    let mut page_ops: Vec<Vec<Op>> = (0..pages.max(1)).map(|_| Vec::new()).collect();
    for label in labels {
        let Some(ops) = page_ops.get_mut(label.position.page) else {
            return Err(LabelError::Pdf(format!(
                "label {} falls on page {} of a {}-page document",
                label.index,
                label.position.page + 1,
                pages
            )));
        };
        for line in &label.lines {
            typeface.push_line(ops, line.anchor.x, line.anchor.y, font_size_pt, &line.text);
        }
    }

    doc.pages = page_ops
        .into_iter()
        .map(|ops| PdfPage::new(page_width, page_height, ops))
        .collect();

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}
