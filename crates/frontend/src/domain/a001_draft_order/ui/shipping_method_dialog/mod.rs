//! Shipping method picker of a draft order

use crate::shared::components::ui::{is_selected, Choice, SingleSelectField};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_draft_order::ShippingMethod;
use leptos::prelude::*;
use thaw::*;

/// Choices of the select; an absent list gives no choices
pub fn shipping_method_choices(methods: Option<&[ShippingMethod]>) -> Vec<Choice> {
    methods
        .unwrap_or_default()
        .iter()
        .map(|m| Choice::new(m.name.clone(), m.id.clone()))
        .collect()
}

/// Choice shown as selected for the current method id, `None` while nothing is picked
pub fn preselected_choice<'a>(choices: &'a [Choice], current: &str) -> Option<&'a Choice> {
    choices.iter().find(|choice| is_selected(current, choice))
}

/// Cancel / Confirm handlers; a missing handler makes its button a no-op
#[derive(Clone, Copy, Default)]
pub struct DialogActions {
    pub on_close: Option<Callback<()>>,
    pub on_confirm: Option<Callback<()>>,
}

impl DialogActions {
    pub fn cancel(&self) {
        if let Some(handler) = self.on_close {
            handler.run(());
        }
    }

    pub fn confirm(&self) {
        if let Some(handler) = self.on_confirm {
            handler.run(());
        }
    }
}

#[component]
pub fn ShippingMethodEditDialog(
    #[prop(into)]
    open: Signal<bool>,
    /// Id of the selected shipping method
    #[prop(into)]
    shipping_method: Signal<String>,
    #[prop(optional, into)]
    shipping_methods: MaybeProp<Vec<ShippingMethod>>,
    on_change: Callback<String>,
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    #[prop(optional)]
    on_confirm: Option<Callback<()>>,
) -> impl IntoView {
    let actions = DialogActions {
        on_close,
        on_confirm,
    };
    let choices =
        Signal::derive(move || shipping_method_choices(shipping_methods.get().as_deref()));

    view! {
        <Show when=move || open.get()>
            <ModalFrame width="576px" modal_class="dialog shipping-method-dialog">
                <div class="dialog__title">"Edit shipping method"</div>
                <div class="dialog__content">
                    <SingleSelectField
                        name="shippingMethod"
                        value=shipping_method
                        choices=choices
                        placeholder="Select shipping method"
                        on_change=on_change
                    />
                </div>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| actions.cancel()>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| actions.confirm()>
                        "Confirm"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
