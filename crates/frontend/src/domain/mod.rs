pub mod a001_draft_order;
