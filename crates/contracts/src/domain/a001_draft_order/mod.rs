pub mod aggregate;
pub mod form;
pub mod lookup;

pub use aggregate::*;
pub use form::*;
pub use lookup::*;
