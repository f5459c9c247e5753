//! Common types shared by all order screens

pub mod money;
pub mod user_error;

// Re-exports
pub use money::Money;
pub use user_error::UserError;
