use crate::types::{LabelError, Result};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

pub const DEFAULT_OUTPUT_PATH: &str = "labels.pdf";
pub const DEFAULT_FONT_PATH: &str = "Arial.ttf";

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (mm_to_pt(210.0), mm_to_pt(297.0)),
            PaperSize::A5 => (mm_to_pt(148.0), mm_to_pt(210.0)),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (*width_pt, *height_pt),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}

/// Sheet and cell geometry, all in PDF points with the origin at the
/// bottom-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageGeometry {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
    pub label_width_pt: f32,
    pub label_height_pt: f32,
    pub x_spacing_pt: f32,
    pub y_spacing_pt: f32,
    pub columns: usize,
    pub rows: usize,
}

impl Default for PageGeometry {
    /// A4 sheet of 63.5 x 38.1 mm labels, 3 across and 7 down
    fn default() -> Self {
        let (page_width_pt, page_height_pt) = PaperSize::A4.dimensions_pt();
        Self {
            page_width_pt,
            page_height_pt,
            margin_pt: 56.7,
            label_width_pt: 180.08,
            label_height_pt: 107.64,
            x_spacing_pt: 5.67,
            y_spacing_pt: 0.0,
            columns: 3,
            rows: 7,
        }
    }
}

impl PageGeometry {
    pub fn with_paper(paper: PaperSize) -> Self {
        let (page_width_pt, page_height_pt) = paper.dimensions_pt();
        Self {
            page_width_pt,
            page_height_pt,
            ..Default::default()
        }
    }

    /// Labels that fit on one page
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Pages needed for `label_count` labels
    pub fn page_count(&self, label_count: usize) -> usize {
        let capacity = self.capacity();
        if capacity == 0 {
            return 0;
        }
        label_count.div_ceil(capacity)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(LabelError::Config(
                "Grid must have at least one row and one column".to_string(),
            ));
        }
        if self.page_width_pt <= 0.0 || self.page_height_pt <= 0.0 {
            return Err(LabelError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }
        if self.label_width_pt <= 0.0 || self.label_height_pt <= 0.0 {
            return Err(LabelError::Config(
                "Label dimensions must be positive".to_string(),
            ));
        }
        if self.margin_pt < 0.0 || self.x_spacing_pt < 0.0 || self.y_spacing_pt < 0.0 {
            return Err(LabelError::Config(
                "Margin and spacing cannot be negative".to_string(),
            ));
        }

        let last_column_x =
            self.margin_pt + (self.columns - 1) as f32 * (self.label_width_pt + self.x_spacing_pt);
        if last_column_x >= self.page_width_pt {
            return Err(LabelError::Config(format!(
                "{} columns do not fit across a {:.1} pt wide page",
                self.columns, self.page_width_pt
            )));
        }

        let bottom_row_y = self.page_height_pt
            - self.margin_pt
            - self.rows as f32 * (self.label_height_pt + self.y_spacing_pt);
        if bottom_row_y < 0.0 {
            return Err(LabelError::Config(format!(
                "{} rows do not fit down a {:.1} pt tall page",
                self.rows, self.page_height_pt
            )));
        }

        Ok(())
    }
}

/// Text placement and wording inside a label cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelTemplate {
    pub font_size_pt: f32,
    /// Distance from the cell's left edge to the start of each line
    pub text_inset_pt: f32,
    /// Baseline distances below the cell's top edge
    pub serial_offset_pt: f32,
    pub product_type_offset_pt: f32,
    pub date_offset_pt: f32,
    pub serial_prefix: String,
    pub product_type_prefix: String,
}

impl Default for LabelTemplate {
    fn default() -> Self {
        Self {
            font_size_pt: 18.0,
            text_inset_pt: 10.0,
            serial_offset_pt: 20.0,
            product_type_offset_pt: 40.0,
            date_offset_pt: 60.0,
            serial_prefix: "#".to_string(),
            product_type_prefix: "Typ ".to_string(),
        }
    }
}

/// Typeface used for label text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontSource {
    /// TrueType file that must exist when generating
    File(PathBuf),
    /// PDF base-14 Helvetica, needs no external file
    Builtin,
}

impl Default for FontSource {
    fn default() -> Self {
        FontSource::File(PathBuf::from(DEFAULT_FONT_PATH))
    }
}

/// Everything needed to turn a [`crate::LabelRequest`] into a document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelOptions {
    pub geometry: PageGeometry,
    pub template: LabelTemplate,
    pub font: FontSource,
    pub output_path: PathBuf,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            template: LabelTemplate::default(),
            font: FontSource::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl LabelOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_error = |reason: String| LabelError::ConfigFile {
            path: path.to_path_buf(),
            reason,
        };
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| file_error(format!("Failed to read config: {}", e)))?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| file_error(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;

        if self.template.font_size_pt <= 0.0 {
            return Err(LabelError::Config("Font size must be positive".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(LabelError::Config("No output path specified".to_string()));
        }

        Ok(())
    }
}
