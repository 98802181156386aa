//! TUI widgets for interactive components.

mod button_row;
mod checkbox_list;
mod radio_list;
mod text_input;

pub use button_row::{Button, ButtonRow};
pub use checkbox_list::CheckboxList;
pub use radio_list::{RadioList, SelectAction};
pub use text_input::TextInput;
