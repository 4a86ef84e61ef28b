pub mod form;
pub mod layout;
mod options;
mod pdf;
mod serials;
mod types;
mod viewer;

pub use form::{FormState, SerialMode};
pub use layout::{
    GridPosition, LineKind, PagePoint, PlacedLabel, TextLine, cell_origin, grid_position,
    label_origin, plan_labels,
};
pub use options::*;
pub use pdf::{generate_pdf, render_pdf_bytes};
pub use serials::{
    MAX_LABELS, SerialSource, generate_serials, load_serials_from_csv, parse_serials_csv, parse_start,
};
pub use types::*;
pub use viewer::{generate_and_open, open_in_viewer};
