//! Customer and addresses of the draft order

use crate::shared::components::ui::{Choice, SingleSelectField, TextField};
use crate::shared::icons::icon;
use contracts::domain::a001_draft_order::{Address, DraftOrderInput, OrderDetails, UserSearchItem};
use leptos::prelude::*;
use thaw::*;

pub fn customer_input(user: &UserSearchItem) -> DraftOrderInput {
    DraftOrderInput {
        user: Some(user.id.clone()),
        user_email: Some(user.email.clone()),
    }
}

/// Non-empty lines of a postal address, top to bottom
pub fn address_lines(address: &Address) -> Vec<String> {
    let country = address
        .country
        .as_ref()
        .map(|c| c.country.clone())
        .unwrap_or_default();
    let city_line = format!("{} {}", address.postal_code, address.city);
    let area_line = format!("{} {}", address.country_area, country);
    [
        address.full_name(),
        address.company_name.clone(),
        address.street_address_1.clone(),
        address.street_address_2.clone(),
        city_line.trim().to_string(),
        area_line.trim().to_string(),
        address.phone.clone(),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect()
}

pub fn billing_same_as_shipping(order: &OrderDetails) -> bool {
    matches!(
        (&order.billing_address, &order.shipping_address),
        (Some(billing), Some(shipping)) if billing == shipping
    )
}

fn address_view(address: Option<Address>) -> AnyView {
    match address {
        Some(address) => view! {
            <address class="order-customer__address">
                {address_lines(&address)
                    .into_iter()
                    .map(|line| view! { <div>{line}</div> })
                    .collect_view()}
            </address>
        }
        .into_any(),
        None => view! { <div class="details-section__empty">"Not set"</div> }.into_any(),
    }
}

#[component]
fn SectionHeader(
    #[prop(into)]
    title: String,
    /// Edit link; hidden when `None`
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="details-section__header">
            <h4 class="details-section__title">{title}</h4>
            {on_edit.map(|edit| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| edit.run(())
                >
                    {icon("edit")} "Edit"
                </Button>
            })}
        </div>
    }
}

#[component]
pub fn OrderCustomer(
    #[prop(into)]
    order: Signal<Option<OrderDetails>>,
    #[prop(into)]
    users: Signal<Vec<UserSearchItem>>,
    #[prop(into)]
    loading: Signal<bool>,
    fetch_users: Callback<String>,
    on_customer_edit: Callback<DraftOrderInput>,
    on_billing_address_edit: Callback<()>,
    on_shipping_address_edit: Callback<()>,
    #[prop(optional)]
    can_edit_addresses: bool,
    #[prop(optional)]
    can_edit_customer: bool,
) -> impl IntoView {
    let is_editing = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let user_choices = Signal::derive(move || {
        users
            .get()
            .iter()
            .map(|u| Choice::new(u.email.clone(), u.id.clone()))
            .collect::<Vec<_>>()
    });

    let handle_search = Callback::new(move |value: String| {
        query.set(value.clone());
        fetch_users.run(value);
    });

    let handle_select = Callback::new(move |user_id: String| {
        let picked = users
            .get_untracked()
            .into_iter()
            .find(|u| u.id == user_id);
        if let Some(user) = picked {
            on_customer_edit.run(customer_input(&user));
            is_editing.set(false);
            query.set(String::new());
        }
    });

    let start_edit = Callback::new(move |_: ()| is_editing.update(|editing| *editing = !*editing));
    let address_edit = move |callback: Callback<()>| can_edit_addresses.then_some(callback);

    view! {
        <Card>
            <SectionHeader title="Customer" on_edit=can_edit_customer.then_some(start_edit) />
            {move || {
                if is_editing.get() {
                    view! {
                        <div class="order-customer__search">
                            <TextField
                                name="query"
                                value=query
                                on_input=handle_search
                                placeholder="Search customers"
                            />
                            {move || {
                                if loading.get() {
                                    view! { <Spinner /> }.into_any()
                                } else {
                                    view! {
                                        <SingleSelectField
                                            name="user"
                                            value=Signal::derive(String::new)
                                            choices=user_choices
                                            placeholder="Select customer"
                                            on_change=handle_select
                                        />
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    }
                    .into_any()
                } else {
                    match order.get().as_ref().and_then(|o| o.customer_email().map(str::to_string)) {
                        Some(email) => view! {
                            <div class="order-customer__email">
                                <a href=format!("mailto:{email}")>{email.clone()}</a>
                            </div>
                        }
                        .into_any(),
                        None => view! { <div class="details-section__empty">"No customer"</div> }.into_any(),
                    }
                }
            }}

            <SectionHeader
                title="Shipping address"
                on_edit=address_edit(on_shipping_address_edit)
            />
            {move || address_view(order.get().and_then(|o| o.shipping_address))}

            <SectionHeader
                title="Billing address"
                on_edit=address_edit(on_billing_address_edit)
            />
            {move || {
                let order = order.get();
                if order.as_ref().is_some_and(billing_same_as_shipping) {
                    view! { <div class="order-customer__same">"Same as shipping address"</div> }.into_any()
                } else {
                    address_view(order.and_then(|o| o.billing_address))
                }
            }}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_draft_order::AddressCountry;

    fn address() -> Address {
        Address {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            street_address_1: "1 Main St".into(),
            city: "Springfield".into(),
            postal_code: "12345".into(),
            country: Some(AddressCountry {
                code: "US".into(),
                country: "United States of America".into(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_customer_input() {
        let user = UserSearchItem {
            id: "u-1".into(),
            email: "jane@example.com".into(),
        };
        assert_eq!(
            customer_input(&user),
            DraftOrderInput {
                user: Some("u-1".into()),
                user_email: Some("jane@example.com".into()),
            }
        );
    }

    #[test]
    fn test_address_lines_skip_empty_parts() {
        assert_eq!(
            address_lines(&address()),
            vec![
                "Jane Doe".to_string(),
                "1 Main St".to_string(),
                "12345 Springfield".to_string(),
                "United States of America".to_string(),
            ]
        );
        assert!(address_lines(&Address::default()).is_empty());
    }

    #[test]
    fn test_billing_same_as_shipping() {
        let mut order = OrderDetails {
            billing_address: Some(address()),
            shipping_address: Some(address()),
            ..Default::default()
        };
        assert!(billing_same_as_shipping(&order));

        order.billing_address.as_mut().unwrap().city = "Shelbyville".into();
        assert!(!billing_same_as_shipping(&order));
        assert!(!billing_same_as_shipping(&OrderDetails::default()));
    }
}
