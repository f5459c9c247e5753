use crate::domain::common::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a draft order as delivered by the order query.
///
/// Every field is optional: the query layer may hand over a partially loaded
/// snapshot and the screen has to render whatever is already there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDetails {
    pub id: Option<String>,
    /// Human readable order number (without `#`)
    pub number: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub status: Option<OrderStatus>,
    pub lines: Option<Vec<OrderLine>>,
    pub events: Option<Vec<OrderEvent>>,
    pub user: Option<OrderCustomer>,
    pub user_email: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub shipping_method: Option<ShippingMethod>,
    pub shipping_method_name: Option<String>,
    pub available_shipping_methods: Option<Vec<ShippingMethod>>,
    pub subtotal: Option<Money>,
    pub shipping_price: Option<Money>,
    pub total: Option<Money>,
}

impl OrderDetails {
    /// Number of lines, `None` while the lines are not loaded
    pub fn line_count(&self) -> Option<usize> {
        self.lines.as_ref().map(Vec::len)
    }

    /// E-mail of the assigned customer, falling back to the order e-mail
    pub fn customer_email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.email.as_str())
            .or(self.user_email.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Draft,
    Unfulfilled,
    PartiallyFulfilled,
    Fulfilled,
    Canceled,
}

/// Product variant entry of the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_sku: Option<String>,
    /// Variant the line was created from; `None` once the variant is deleted
    #[serde(default)]
    pub variant_id: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Option<Money>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl OrderLine {
    /// Unit price times quantity, `None` while the price is unknown
    pub fn total_price(&self) -> Option<Money> {
        self.unit_price.as_ref().map(|p| p.times(self.quantity))
    }
}

/// Entry of the order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub id: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub event_type: OrderEventType,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventType {
    DraftCreated,
    Placed,
    PlacedFromDraft,
    OrderMarkedAsPaid,
    Canceled,
    PaymentCaptured,
    PaymentRefunded,
    PaymentReleased,
    EmailSent,
    FulfillmentCanceled,
    FulfillmentRestockedItems,
    FulfillmentFulfilledItems,
    TrackingUpdated,
    NoteAdded,
    Updated,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCountry {
    pub code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub city_area: String,
    pub postal_code: String,
    pub country: Option<AddressCountry>,
    pub country_area: String,
    pub phone: String,
}

impl Address {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_snapshot_deserializes() {
        let order: OrderDetails = serde_json::from_str(r#"{"number":"17"}"#).unwrap();
        assert_eq!(order.number.as_deref(), Some("17"));
        assert!(order.created.is_none());
        assert_eq!(order.line_count(), None);
    }

    #[test]
    fn test_full_snapshot_deserializes() {
        let json = r#"{
            "id": "T3JkZXI6MTc=",
            "number": "17",
            "created": "2018-09-13T14:02:26Z",
            "status": "DRAFT",
            "lines": [{
                "id": "line-1",
                "productName": "Apple Juice",
                "productSku": "AJ-1",
                "variantId": "v-1",
                "quantity": 2,
                "unitPrice": {"amount": 3.5, "currency": "USD"}
            }],
            "events": [{"id": "e-1", "type": "NOTE_ADDED", "message": "Call back"}],
            "userEmail": "guest@example.com",
            "availableShippingMethods": [{"id": "A", "name": "Air"}]
        }"#;
        let order: OrderDetails = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, Some(OrderStatus::Draft));
        assert_eq!(order.line_count(), Some(1));
        assert_eq!(order.customer_email(), Some("guest@example.com"));

        let line = &order.lines.as_ref().unwrap()[0];
        assert_eq!(line.total_price(), Some(Money::new(7.0, "USD")));

        let events = order.events.unwrap();
        assert_eq!(events[0].event_type, OrderEventType::NoteAdded);
        assert_eq!(events[0].date, None);
    }

    #[test]
    fn test_unknown_event_type_is_other() {
        let event: OrderEvent =
            serde_json::from_str(r#"{"id":"e-9","type":"INVOICE_SENT"}"#).unwrap();
        assert_eq!(event.event_type, OrderEventType::Other);
    }

    #[test]
    fn test_customer_email_prefers_user() {
        let order = OrderDetails {
            user: Some(OrderCustomer {
                id: "u-1".into(),
                email: "user@example.com".into(),
            }),
            user_email: Some("guest@example.com".into()),
            ..Default::default()
        };
        assert_eq!(order.customer_email(), Some("user@example.com"));
    }

    #[test]
    fn test_address_full_name() {
        let address = Address {
            first_name: "Jane".into(),
            ..Default::default()
        };
        assert_eq!(address.full_name(), "Jane");
    }
}
