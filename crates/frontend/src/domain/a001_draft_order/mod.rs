pub mod ui;

pub use ui::details::DraftOrderPage;
pub use ui::shipping_method_dialog::ShippingMethodEditDialog;
