use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("{0}")]
    Input(String),
    #[error("Font error: cannot use '{}': {reason}", .path.display())]
    Font { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Settings file '{}': {reason}", .path.display())]
    ConfigFile { path: PathBuf, reason: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Viewer error: {0}")]
    Viewer(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Broad classification shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something the operator typed is wrong and can be corrected in the form
    Input,
    /// A file, font, or host facility was unavailable
    Resource,
}

impl LabelError {
    pub fn input(message: impl Into<String>) -> Self {
        LabelError::Input(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelError::Input(_) | LabelError::Config(_) => ErrorKind::Input,
            LabelError::Font { .. }
            | LabelError::ConfigFile { .. }
            | LabelError::Io(_)
            | LabelError::Pdf(_)
            | LabelError::Csv(_)
            | LabelError::Viewer(_)
            | LabelError::TaskJoin(_) => ErrorKind::Resource,
        }
    }

    /// Dialog title matching the error kind
    pub fn title(&self) -> &'static str {
        match self {
            LabelError::Font { .. } => "Font Error",
            _ => match self.kind() {
                ErrorKind::Input => "Input Error",
                ErrorKind::Resource => "Error",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// A validated batch of labels ready for layout.
///
/// `serials` always holds exactly `count` entries. Blank entries keep their
/// cell on the sheet but nothing is drawn there.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub date: String,
    pub product_type: String,
    pub count: usize,
    pub serials: Vec<String>,
}

impl LabelRequest {
    pub fn new(
        date: impl Into<String>,
        product_type: impl Into<String>,
        serials: Vec<String>,
    ) -> Result<Self> {
        let date = date.into().trim().to_string();
        let product_type = product_type.into().trim().to_string();

        if date.is_empty() || product_type.is_empty() {
            return Err(LabelError::input("Date and Product Type cannot be empty."));
        }
        if serials.is_empty() {
            return Err(LabelError::input("Number of labels must be greater than 0."));
        }

        Ok(Self {
            date,
            product_type,
            count: serials.len(),
            serials,
        })
    }

    pub fn blank_count(&self) -> usize {
        self.serials.iter().filter(|s| s.trim().is_empty()).count()
    }
}

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub output_path: PathBuf,
    pub labels_rendered: usize,
    pub labels_skipped: usize,
    pub pages: usize,
}
