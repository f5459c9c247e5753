//! Draft order page (MVVM Standard)

use super::panels::{OrderCustomer, OrderDraftDetails, OrderHistory};
use super::view_model::{
    created_caption, current_shipping_method, finalize_disabled, general_errors, page_title,
    shipping_method_payload, DraftDialog, DraftOrderDialogs,
};
use crate::domain::a001_draft_order::ui::dialogs::{
    ConfirmDialog, OrderAddressEditDialog, OrderProductAddDialog,
};
use crate::domain::a001_draft_order::ui::shipping_method_dialog::ShippingMethodEditDialog;
use crate::shared::components::{CardMenu, CardMenuItem, PageHeader, SaveButtonBar, Skeleton};
use crate::shared::config::use_config;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_draft_order::{
    AddressInput, CountryChoice, DraftOrderInput, NoteFormData, OrderDetails, OrderLineFormData,
    ProductAddFormData, ShippingMethodFormData, UserSearchItem, VariantSearchItem,
};
use contracts::domain::common::UserError;
use leptos::prelude::*;

#[component]
pub fn DraftOrderPage(
    /// Blocks the finalize action
    #[prop(into)]
    disabled: Signal<bool>,
    /// `None` until the order query has delivered a snapshot
    #[prop(into)]
    order: Signal<Option<OrderDetails>>,
    #[prop(into)]
    users: Signal<Vec<UserSearchItem>>,
    #[prop(into)]
    users_loading: Signal<bool>,
    #[prop(into)]
    countries: Signal<Vec<CountryChoice>>,
    #[prop(into)]
    variants: Signal<Vec<VariantSearchItem>>,
    #[prop(into)]
    variants_loading: Signal<bool>,
    #[prop(into)]
    errors: Signal<Vec<UserError>>,
    fetch_users: Callback<String>,
    fetch_variants: Callback<String>,
    on_back: Callback<()>,
    on_billing_address_edit: Callback<AddressInput>,
    on_customer_edit: Callback<DraftOrderInput>,
    on_draft_finalize: Callback<()>,
    on_draft_remove: Callback<()>,
    on_note_add: Callback<NoteFormData>,
    on_order_line_add: Callback<ProductAddFormData>,
    on_order_line_change: Callback<(String, OrderLineFormData)>,
    on_order_line_remove: Callback<String>,
    on_product_click: Callback<String>,
    on_shipping_address_edit: Callback<AddressInput>,
    on_shipping_method_edit: Callback<ShippingMethodFormData>,
) -> impl IntoView {
    let config = use_config();
    let dialogs = DraftOrderDialogs::new();

    let title = Signal::derive(move || order.with(|o| page_title(o.as_ref())));
    let datetime_format = StoredValue::new(config.display.datetime_format);
    let skeleton_width = config.layout.skeleton_width;
    let grid_style = format!(
        "display: grid; grid-column-gap: var(--spacing-lg); grid-template-columns: {};",
        config.layout.grid_columns
    );
    let finalize_blocked =
        Signal::derive(move || order.with(|o| finalize_disabled(disabled.get(), o.as_ref())));
    let banner_errors = Signal::derive(move || {
        let address_form_open = dialogs.flags.get().address_form_open();
        errors.with(|e| general_errors(e, address_form_open))
    });

    // Shipping method picked in the dialog, seeded from the order on open
    let selected_shipping_method = RwSignal::new(String::new());
    let shipping_method_open = dialogs.is_open(DraftDialog::ShippingMethodEdit);
    Effect::new(move |_| {
        if shipping_method_open.get() {
            selected_shipping_method
                .set(order.with_untracked(|o| current_shipping_method(o.as_ref())));
        }
    });
    let shipping_method_submit =
        dialogs.confirm_then_close(DraftDialog::ShippingMethodEdit, on_shipping_method_edit);
    let confirm_shipping_method = Callback::new(move |_: ()| {
        match shipping_method_payload(&selected_shipping_method.get_untracked()) {
            Some(data) => shipping_method_submit.run(data),
            None => dialogs.toggle(DraftDialog::ShippingMethodEdit),
        }
    });

    let menu_items = vec![CardMenuItem::new(
        "Cancel order",
        dialogs.toggler(DraftDialog::DraftRemove),
    )];

    view! {
        <PageFrame page_id="a001_draft_order--detail" category=PAGE_CAT_DETAIL class="page--md">
            <PageHeader title=title on_back=on_back>
                <CardMenu menu_items=menu_items class="page__menu" />
            </PageHeader>

            <div class="page__date">
                {move || match order.with(|o| created_caption(o.as_ref(), &datetime_format.get_value())) {
                    Some(caption) => view! { <span class="caption">{caption}</span> }.into_any(),
                    None => view! { <Skeleton width=skeleton_width.clone() /> }.into_any(),
                }}
            </div>

            <Show when=move || !banner_errors.get().is_empty()>
                <div class="page__errors" role="alert">
                    {move || banner_errors
                        .get()
                        .into_iter()
                        .map(|e| view! { <div class="page__error">{e.message}</div> })
                        .collect_view()}
                </div>
            </Show>

            <div class="page__content" style=grid_style>
                <div>
                    <OrderDraftDetails
                        order=order
                        on_order_line_add=dialogs.toggler(DraftDialog::OrderLineAdd)
                        on_order_line_change=on_order_line_change
                        on_order_line_remove=on_order_line_remove
                        on_product_click=on_product_click
                        on_shipping_method_edit=dialogs.toggler(DraftDialog::ShippingMethodEdit)
                    />
                    <OrderHistory
                        history=Signal::derive(move || order.get().and_then(|o| o.events))
                        on_note_add=on_note_add
                    />
                </div>
                <div>
                    <OrderCustomer
                        can_edit_addresses=true
                        can_edit_customer=true
                        order=order
                        users=users
                        loading=users_loading
                        fetch_users=fetch_users
                        on_billing_address_edit=dialogs.toggler(DraftDialog::BillingAddressEdit)
                        on_customer_edit=on_customer_edit
                        on_shipping_address_edit=dialogs.toggler(DraftDialog::ShippingAddressEdit)
                    />
                </div>
            </div>

            <SaveButtonBar
                disabled=finalize_blocked
                on_cancel=on_back
                on_save=dialogs.toggler(DraftDialog::DraftFinalize)
                save_label="Finalize"
            />

            <ConfirmDialog
                open=dialogs.is_open(DraftDialog::DraftRemove)
                title="Cancel order"
                message="Are you sure you want to remove this draft? This cannot be undone."
                confirm_label="Remove draft"
                danger=true
                on_close=dialogs.toggler(DraftDialog::DraftRemove)
                on_confirm=dialogs.confirm_then_close(DraftDialog::DraftRemove, on_draft_remove)
            />
            <ConfirmDialog
                open=dialogs.is_open(DraftDialog::DraftFinalize)
                title="Finalize draft order"
                message="The draft becomes a regular order and can no longer be edited as a draft."
                confirm_label="Finalize"
                on_close=dialogs.toggler(DraftDialog::DraftFinalize)
                on_confirm=dialogs.confirm_then_close(DraftDialog::DraftFinalize, on_draft_finalize)
            />
            <OrderProductAddDialog
                open=dialogs.is_open(DraftDialog::OrderLineAdd)
                variants=variants
                loading=variants_loading
                fetch_variants=fetch_variants
                on_close=dialogs.toggler(DraftDialog::OrderLineAdd)
                on_submit=dialogs.confirm_then_close(DraftDialog::OrderLineAdd, on_order_line_add)
            />
            <ShippingMethodEditDialog
                open=shipping_method_open
                shipping_method=selected_shipping_method
                shipping_methods=Signal::derive(move || {
                    order.get().and_then(|o| o.available_shipping_methods)
                })
                on_change=Callback::new(move |id: String| selected_shipping_method.set(id))
                on_close=dialogs.toggler(DraftDialog::ShippingMethodEdit)
                on_confirm=confirm_shipping_method
            />
            <OrderAddressEditDialog
                open=dialogs.is_open(DraftDialog::ShippingAddressEdit)
                title="Shipping address"
                address=Signal::derive(move || order.get().and_then(|o| o.shipping_address))
                countries=countries
                errors=errors
                on_close=dialogs.toggler(DraftDialog::ShippingAddressEdit)
                on_confirm=dialogs.confirm_then_close(DraftDialog::ShippingAddressEdit, on_shipping_address_edit)
            />
            <OrderAddressEditDialog
                open=dialogs.is_open(DraftDialog::BillingAddressEdit)
                title="Billing address"
                address=Signal::derive(move || order.get().and_then(|o| o.billing_address))
                countries=countries
                errors=errors
                on_close=dialogs.toggler(DraftDialog::BillingAddressEdit)
                on_confirm=dialogs.confirm_then_close(DraftDialog::BillingAddressEdit, on_billing_address_edit)
            />
        </PageFrame>
    }
}
