//! Panels composed by the draft order page

mod customer;
mod history;
mod lines;

pub use customer::OrderCustomer;
pub use history::OrderHistory;
pub use lines::OrderDraftDetails;
