pub mod form;
pub mod settings;

pub use form::{FormAction, show_form};
pub use settings::show_settings;
