use crate::shared::components::ui::TextField;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_draft_order::{ProductAddFormData, ProductAddLine, VariantSearchItem};
use leptos::prelude::*;
use thaw::*;

/// Variants ticked in the product add dialog, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection {
    ids: Vec<String>,
}

impl VariantSelection {
    pub fn toggle(&mut self, variant_id: &str) {
        if let Some(pos) = self.ids.iter().position(|id| id == variant_id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(variant_id.to_string());
        }
    }

    pub fn contains(&self, variant_id: &str) -> bool {
        self.ids.iter().any(|id| id == variant_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// One unit of every selected variant
    pub fn to_form_data(&self) -> ProductAddFormData {
        ProductAddFormData {
            variants: self
                .ids
                .iter()
                .map(|id| ProductAddLine {
                    variant_id: id.clone(),
                    quantity: 1,
                })
                .collect(),
        }
    }
}

#[component]
pub fn OrderProductAddDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    variants: Signal<Vec<VariantSearchItem>>,
    #[prop(into)]
    loading: Signal<bool>,
    fetch_variants: Callback<String>,
    on_close: Callback<()>,
    on_submit: Callback<ProductAddFormData>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let selection = RwSignal::new(VariantSelection::default());

    let reset = move || {
        query.set(String::new());
        selection.set(VariantSelection::default());
    };

    let handle_close = move || {
        reset();
        on_close.run(());
    };

    let handle_submit = move |_| {
        let data = selection.get_untracked().to_form_data();
        reset();
        on_submit.run(data);
    };

    let handle_search = Callback::new(move |value: String| {
        query.set(value.clone());
        fetch_variants.run(value);
    });

    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=Callback::new(move |_| handle_close()) modal_class="dialog">
                <div class="dialog__title">"Add product"</div>
                <div class="dialog__content">
                    <TextField
                        name="query"
                        label="Search products"
                        value=query
                        on_input=handle_search
                        placeholder="Name or SKU"
                    />
                    {move || {
                        if loading.get() {
                            view! {
                                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-lg);">
                                    <Spinner />
                                    <span>"Loading..."</span>
                                </Flex>
                            }
                            .into_any()
                        } else if variants.get().is_empty() {
                            view! { <div class="dialog__empty">"No products found"</div> }.into_any()
                        } else {
                            view! {
                                <div class="variant-list">
                                    <For
                                        each=move || variants.get()
                                        key=|variant| variant.id.clone()
                                        children=move |variant| {
                                            let variant_id = variant.id.clone();
                                            let toggle_id = variant.id.clone();
                                            view! {
                                                <label class="variant-list__row">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || selection.get().contains(&variant_id)
                                                        on:change=move |_| selection.update(|s| s.toggle(&toggle_id))
                                                    />
                                                    <span class="variant-list__name">{variant.name.clone()}</span>
                                                    <code class="variant-list__sku">{variant.sku.clone()}</code>
                                                    <span class="variant-list__stock">
                                                        {format!("In stock: {}", variant.stock_quantity)}
                                                    </span>
                                                </label>
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle_close()>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || selection.get().is_empty())
                        on_click=handle_submit
                    >
                        "Confirm"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_toggle() {
        let mut selection = VariantSelection::default();
        selection.toggle("v-1");
        selection.toggle("v-2");
        assert!(selection.contains("v-1"));
        selection.toggle("v-1");
        assert!(!selection.contains("v-1"));
        assert!(selection.contains("v-2"));
    }

    #[test]
    fn test_selection_form_data_keeps_pick_order() {
        let mut selection = VariantSelection::default();
        selection.toggle("v-2");
        selection.toggle("v-1");
        let data = selection.to_form_data();
        let ids: Vec<_> = data.variants.iter().map(|l| l.variant_id.as_str()).collect();
        assert_eq!(ids, vec!["v-2", "v-1"]);
        assert!(data.variants.iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn test_empty_selection() {
        let selection = VariantSelection::default();
        assert!(selection.is_empty());
        assert!(selection.to_form_data().variants.is_empty());
    }
}
