pub mod card_menu;
pub mod page_header;
pub mod save_button_bar;
pub mod skeleton;
pub mod ui;

pub use card_menu::{CardMenu, CardMenuItem};
pub use page_header::PageHeader;
pub use save_button_bar::SaveButtonBar;
pub use skeleton::Skeleton;
