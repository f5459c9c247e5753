//! Dialogs opened from the draft order page

pub mod address_edit;
pub mod confirm;
pub mod product_add;

pub use address_edit::OrderAddressEditDialog;
pub use confirm::ConfirmDialog;
pub use product_add::OrderProductAddDialog;
