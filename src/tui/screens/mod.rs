//! Dialog screens, one per question kind.

mod checkbox;
mod confirm;
mod dialog;
mod radio;
mod text;

pub use checkbox::CheckboxDialog;
pub use confirm::ConfirmDialog;
pub use dialog::{centered_rect, DialogChrome};
pub use radio::RadioDialog;
pub use text::TextDialog;
