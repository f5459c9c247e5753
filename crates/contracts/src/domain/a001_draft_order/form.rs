//! Payloads handed to the caller when a form on the draft order screen is confirmed

use super::aggregate::Address;
use serde::{Deserialize, Serialize};

/// Customer assignment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderInput {
    pub user: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFormData {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineFormData {
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodFormData {
    pub shipping_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAddLine {
    pub variant_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAddFormData {
    pub variants: Vec<ProductAddLine>,
}

/// Address form as submitted; `country` is a country code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub city_area: String,
    pub postal_code: String,
    pub country: String,
    pub country_area: String,
    pub phone: String,
}

impl From<&Address> for AddressInput {
    fn from(address: &Address) -> Self {
        Self {
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            company_name: address.company_name.clone(),
            street_address_1: address.street_address_1.clone(),
            street_address_2: address.street_address_2.clone(),
            city: address.city.clone(),
            city_area: address.city_area.clone(),
            postal_code: address.postal_code.clone(),
            country: address
                .country
                .as_ref()
                .map(|c| c.code.clone())
                .unwrap_or_default(),
            country_area: address.country_area.clone(),
            phone: address.phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_draft_order::AddressCountry;

    #[test]
    fn test_address_input_takes_country_code() {
        let address = Address {
            city: "Wroclaw".into(),
            country: Some(AddressCountry {
                code: "PL".into(),
                country: "Poland".into(),
            }),
            ..Default::default()
        };
        let input = AddressInput::from(&address);
        assert_eq!(input.city, "Wroclaw");
        assert_eq!(input.country, "PL");
    }

    #[test]
    fn test_address_input_without_country() {
        let input = AddressInput::from(&Address::default());
        assert_eq!(input.country, "");
    }

    #[test]
    fn test_shipping_method_form_serializes_camel_case() {
        let data = ShippingMethodFormData {
            shipping_method: "A".into(),
        };
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"shippingMethod":"A"}"#
        );
    }
}
