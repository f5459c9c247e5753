pub mod a001_draft_order;
pub mod common;
