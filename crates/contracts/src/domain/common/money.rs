use serde::{Deserialize, Serialize};

/// Amount with its currency code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Multiply by an integer quantity, keeping the currency
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * f64::from(quantity),
            currency: self.currency.clone(),
        }
    }
}
