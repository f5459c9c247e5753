//! Lookup lists fed to the draft order screen by search collaborators

use serde::{Deserialize, Serialize};

/// Customer found by the user search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSearchItem {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryChoice {
    pub code: String,
    pub label: String,
}

/// Product variant found by the variant search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSearchItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub stock_quantity: i32,
}
