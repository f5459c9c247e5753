//! Preview shell: renders the draft order page against a bundled snapshot
//! and logs every intent the page forwards.

use crate::domain::a001_draft_order::DraftOrderPage;
use crate::shared::config::{load_config, DashboardConfig};
use anyhow::Context;
use contracts::domain::a001_draft_order::{
    CountryChoice, OrderDetails, UserSearchItem, VariantSearchItem,
};
use leptos::prelude::*;
use serde::Deserialize;

const PREVIEW_FIXTURE: &str = include_str!("../fixtures/draft_order.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreviewData {
    pub order: Option<OrderDetails>,
    pub users: Vec<UserSearchItem>,
    pub countries: Vec<CountryChoice>,
    pub variants: Vec<VariantSearchItem>,
}

pub fn parse_preview(source: &str) -> anyhow::Result<PreviewData> {
    serde_json::from_str(source).context("invalid preview fixture")
}

/// Case-insensitive substring match on any field; a blank query matches everything
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// TOML overrides embedded by the host page in `<script id="dashboard-config">`
fn page_config_source() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id("dashboard-config")?
        .text_content()
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(page_config_source().as_deref()).unwrap_or_else(|e| {
        log::error!("{e:#}");
        DashboardConfig::default()
    });
    provide_context(config);

    let data = parse_preview(PREVIEW_FIXTURE).unwrap_or_else(|e| {
        log::error!("{e:#}");
        PreviewData::default()
    });

    let all_users = StoredValue::new(data.users);
    let all_variants = StoredValue::new(data.variants);
    let order = RwSignal::new(data.order);
    let users = RwSignal::new(Vec::<UserSearchItem>::new());
    let variants = RwSignal::new(Vec::<VariantSearchItem>::new());

    let fetch_users = Callback::new(move |query: String| {
        log::info!("fetch users: {query:?}");
        users.set(all_users.with_value(|all| {
            all.iter()
                .filter(|u| matches_query(&query, &[&u.email]))
                .cloned()
                .collect()
        }));
    });
    let fetch_variants = Callback::new(move |value: String| {
        log::info!("fetch variants: {value:?}");
        variants.set(all_variants.with_value(|all| {
            all.iter()
                .filter(|v| matches_query(&value, &[&v.name, &v.sku]))
                .cloned()
                .collect()
        }));
    });

    view! {
        <DraftOrderPage
            disabled=Signal::stored(false)
            order=order
            users=users
            users_loading=Signal::stored(false)
            countries=Signal::stored(data.countries)
            variants=variants
            variants_loading=Signal::stored(false)
            errors=Signal::stored(Vec::new())
            fetch_users=fetch_users
            fetch_variants=fetch_variants
            on_back=Callback::new(|_| log::info!("back"))
            on_billing_address_edit=Callback::new(|data| log::info!("billing address edit: {data:?}"))
            on_customer_edit=Callback::new(|data| log::info!("customer edit: {data:?}"))
            on_draft_finalize=Callback::new(|_| log::info!("draft finalize"))
            on_draft_remove=Callback::new(|_| log::info!("draft remove"))
            on_note_add=Callback::new(|data| log::info!("note add: {data:?}"))
            on_order_line_add=Callback::new(|data| log::info!("order line add: {data:?}"))
            on_order_line_change=Callback::new(|(id, data)| log::info!("order line change {id}: {data:?}"))
            on_order_line_remove=Callback::new(|id| log::info!("order line remove: {id}"))
            on_product_click=Callback::new(|id| log::info!("product click: {id}"))
            on_shipping_address_edit=Callback::new(|data| log::info!("shipping address edit: {data:?}"))
            on_shipping_method_edit=Callback::new(|data| log::info!("shipping method edit: {data:?}"))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixture_parses() {
        let data = parse_preview(PREVIEW_FIXTURE).unwrap();
        let order = data.order.unwrap();
        assert_eq!(order.number.as_deref(), Some("24"));
        assert!(order.line_count().unwrap_or_default() > 0);
        assert!(!data.countries.is_empty());
    }

    #[test]
    fn test_invalid_fixture_is_error() {
        let err = parse_preview("{").unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid preview fixture"));
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("JUI", &["Apple Juice", "AJ-1"]));
        assert!(matches_query("aj-1", &["Apple Juice", "AJ-1"]));
        assert!(!matches_query("tea", &["Apple Juice", "AJ-1"]));
    }
}
