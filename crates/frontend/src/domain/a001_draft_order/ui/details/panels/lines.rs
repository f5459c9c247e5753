//! Line editor of the draft order

use crate::shared::icons::icon;
use crate::shared::money_format::format_money_opt;
use contracts::domain::a001_draft_order::{OrderDetails, OrderLine, OrderLineFormData};
use leptos::prelude::*;
use thaw::*;

/// Positive integer typed into a quantity cell
pub fn parse_quantity(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|q| *q > 0)
}

/// Outcome of typing into a quantity cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityEdit {
    Change(OrderLineFormData),
    /// Input is put back to the current quantity
    Revert(u32),
}

pub fn quantity_edit(line: &OrderLine, value: &str) -> QuantityEdit {
    match parse_quantity(value) {
        Some(quantity) if quantity != line.quantity => {
            QuantityEdit::Change(OrderLineFormData { quantity })
        }
        _ => QuantityEdit::Revert(line.quantity),
    }
}

pub fn shipping_method_label(order: &OrderDetails) -> Option<String> {
    order
        .shipping_method
        .as_ref()
        .map(|m| m.name.clone())
        .or_else(|| order.shipping_method_name.clone())
}

#[component]
pub fn OrderDraftDetails(
    #[prop(into)]
    order: Signal<Option<OrderDetails>>,
    on_order_line_add: Callback<()>,
    on_order_line_change: Callback<(String, OrderLineFormData)>,
    on_order_line_remove: Callback<String>,
    on_product_click: Callback<String>,
    on_shipping_method_edit: Callback<()>,
) -> impl IntoView {
    let lines = Signal::derive(move || {
        order
            .get()
            .and_then(|o| o.lines)
            .unwrap_or_default()
    });

    view! {
        <Card>
            <div class="details-section__header">
                <h4 class="details-section__title">"Order details"</h4>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_order_line_add.run(())
                >
                    {icon("plus")} "Add products"
                </Button>
            </div>

            <Show
                when=move || !lines.get().is_empty()
                fallback=|| view! { <div class="details-section__empty">"No products"</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || lines.get()
                            key=|line| (line.id.clone(), line.quantity)
                            children=move |line| {
                                let line = StoredValue::new(line);
                                let variant_id = line.with_value(|l| l.variant_id.clone());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {match variant_id {
                                                    Some(id) => view! {
                                                        <a
                                                            href="#"
                                                            on:click=move |e: leptos::ev::MouseEvent| {
                                                                e.prevent_default();
                                                                on_product_click.run(id.clone());
                                                            }
                                                        >
                                                            {line.with_value(|l| l.product_name.clone())}
                                                        </a>
                                                    }
                                                    .into_any(),
                                                    None => view! {
                                                        <span>{line.with_value(|l| l.product_name.clone())}</span>
                                                    }
                                                    .into_any(),
                                                }}
                                                {line.with_value(|l| l.product_sku.clone()).map(|sku| view! {
                                                    <div class="order-line__sku"><code>{sku}</code></div>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                min="1"
                                                class="form__input form__input--narrow"
                                                prop:value=line.with_value(|l| l.quantity.to_string())
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    match line.with_value(|l| quantity_edit(l, &value)) {
                                                        QuantityEdit::Change(data) => {
                                                            on_order_line_change.run((line.with_value(|l| l.id.clone()), data));
                                                        }
                                                        QuantityEdit::Revert(quantity) => {
                                                            event_target::<web_sys::HtmlInputElement>(&ev)
                                                                .set_value(&quantity.to_string());
                                                        }
                                                    }
                                                }
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {line.with_value(|l| format_money_opt(l.unit_price.as_ref()))}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {line.with_value(|l| format_money_opt(l.total_price().as_ref()))}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="button button--icon"
                                                title="Remove"
                                                on:click=move |_| on_order_line_remove.run(line.with_value(|l| l.id.clone()))
                                            >
                                                {icon("trash")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>

            {move || {
                let order = order.get().unwrap_or_default();
                let shipping_label = shipping_method_label(&order);
                view! {
                    <div class="order-totals">
                        <div class="order-totals__row">
                            <span>"Subtotal"</span>
                            <span>{format_money_opt(order.subtotal.as_ref())}</span>
                        </div>
                        <div class="order-totals__row">
                            <span>
                                <a
                                    href="#"
                                    on:click=move |e: leptos::ev::MouseEvent| {
                                        e.prevent_default();
                                        on_shipping_method_edit.run(());
                                    }
                                >
                                    "Shipping"
                                </a>
                                {match shipping_label {
                                    Some(name) => format!(" ({name})"),
                                    None => " (not set)".to_string(),
                                }}
                            </span>
                            <span>{format_money_opt(order.shipping_price.as_ref())}</span>
                        </div>
                        <div class="order-totals__row order-totals__row--total">
                            <span>"Total"</span>
                            <span>{format_money_opt(order.total.as_ref())}</span>
                        </div>
                    </div>
                }
            }}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_draft_order::ShippingMethod;

    fn line(quantity: u32) -> OrderLine {
        OrderLine {
            id: "line-1".into(),
            product_name: "Apple Juice".into(),
            product_sku: Some("AJ-1".into()),
            variant_id: Some("v-1".into()),
            quantity,
            unit_price: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("two"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_quantity_edit_changes_on_new_value() {
        assert_eq!(
            quantity_edit(&line(2), "5"),
            QuantityEdit::Change(OrderLineFormData { quantity: 5 })
        );
        assert_eq!(quantity_edit(&line(2), "2"), QuantityEdit::Revert(2));
    }

    #[test]
    fn test_rejected_quantity_reverts_input() {
        assert_eq!(quantity_edit(&line(2), "0"), QuantityEdit::Revert(2));
        assert_eq!(quantity_edit(&line(2), "abc"), QuantityEdit::Revert(2));
        assert_eq!(quantity_edit(&line(3), ""), QuantityEdit::Revert(3));
    }

    #[test]
    fn test_shipping_method_label() {
        let mut order = OrderDetails {
            shipping_method_name: Some("Courier".into()),
            ..Default::default()
        };
        assert_eq!(shipping_method_label(&order), Some("Courier".to_string()));

        order.shipping_method = Some(ShippingMethod {
            id: "A".into(),
            name: "Air".into(),
            price: None,
        });
        assert_eq!(shipping_method_label(&order), Some("Air".to_string()));
        assert_eq!(shipping_method_label(&OrderDetails::default()), None);
    }
}
