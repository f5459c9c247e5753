pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod modal_frame;
pub mod money_format;
pub mod page_frame;
