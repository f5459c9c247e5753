pub mod details;
pub mod dialogs;
pub mod shipping_method_dialog;
