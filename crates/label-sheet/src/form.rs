//! Operator form state.
//!
//! Front ends keep one [`FormState`], draw it every frame and change it only
//! through these methods, so the rules for manual-entry fields, focus
//! movement and validation live in one place.

use crate::serials::{
    MAX_LABELS, SerialSource, generate_serials, parse_start, too_many_labels,
};
use crate::types::{LabelError, LabelRequest, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerialMode {
    #[default]
    Auto,
    Manual,
}

impl SerialMode {
    pub fn name(&self) -> &'static str {
        match self {
            SerialMode::Auto => "Auto Generate",
            SerialMode::Manual => "Manual Entry",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: SerialMode,
    pub start_serial: String,
    pub date: String,
    pub product_type: String,
    count_text: String,
    manual_entries: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: SerialMode::Auto,
            start_serial: String::new(),
            date: String::new(),
            product_type: String::new(),
            count_text: String::new(),
            manual_entries: vec![String::new()],
        }
    }
}

impl FormState {
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    /// Update the label count as typed.
    ///
    /// A parseable count resizes the manual-entry list to between one and
    /// [`MAX_LABELS`] fields, keeping what was already typed. Unparseable
    /// text leaves the fields alone.
    pub fn set_count_text(&mut self, text: impl Into<String>) {
        self.count_text = text.into();
        if let Ok(count) = self.count_text.trim().parse::<i64>() {
            let fields = usize::try_from(count.max(1))
                .unwrap_or(MAX_LABELS)
                .min(MAX_LABELS);
            self.manual_entries.resize(fields, String::new());
        }
    }

    pub fn manual_entries(&self) -> &[String] {
        &self.manual_entries
    }

    pub fn manual_entries_mut(&mut self) -> &mut [String] {
        &mut self.manual_entries
    }

    /// Replace all manual entries, e.g. from an imported file, and switch
    /// the count to match.
    pub fn set_manual_entries(&mut self, entries: Vec<String>) {
        self.count_text = entries.len().to_string();
        self.manual_entries = entries;
        if self.manual_entries.is_empty() {
            self.manual_entries.push(String::new());
        }
        self.mode = SerialMode::Manual;
    }

    /// Index of the field above `index`, if any
    pub fn focus_up(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    /// Index of the field below `index`, if any
    pub fn focus_down(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.manual_entries.len()).then_some(next)
    }

    /// Parse the label count
    pub fn count(&self) -> Result<usize> {
        let count = self
            .count_text
            .trim()
            .parse::<i64>()
            .map_err(|_| LabelError::input("Number of labels must be a valid integer."))?;
        if count <= 0 {
            return Err(LabelError::input("Number of labels must be greater than 0."));
        }
        match usize::try_from(count) {
            Ok(count) if count <= MAX_LABELS => Ok(count),
            _ => Err(too_many_labels()),
        }
    }

    pub fn serial_source(&self) -> Result<SerialSource> {
        match self.mode {
            SerialMode::Auto => Ok(SerialSource::Auto {
                start: parse_start(&self.start_serial)?,
            }),
            SerialMode::Manual => Ok(SerialSource::Manual {
                entries: self.manual_entries.clone(),
            }),
        }
    }

    /// Validate everything and build the request to render
    pub fn to_request(&self) -> Result<LabelRequest> {
        if self.count_text.trim().parse::<i64>().is_err() {
            return Err(LabelError::input("Number of labels must be a valid integer."));
        }

        if self.date.trim().is_empty() || self.product_type.trim().is_empty() {
            return Err(LabelError::input("Date and Product Type cannot be empty."));
        }

        let count = self.count()?;
        let serials = generate_serials(count, &self.serial_source()?)?;
        LabelRequest::new(&self.date, &self.product_type, serials)
    }
}
