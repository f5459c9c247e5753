pub mod single_select_field;
pub mod text_field;

pub use single_select_field::{is_selected, Choice, SingleSelectField};
pub use text_field::TextField;
