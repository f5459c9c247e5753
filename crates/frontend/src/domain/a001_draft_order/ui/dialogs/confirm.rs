use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// Yes/no confirmation before an irreversible draft action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    /// Label of the confirm button (default: "Confirm")
    #[prop(optional, into)]
    confirm_label: Option<String>,
    /// Render the confirm button as destructive
    #[prop(optional)]
    danger: bool,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let message = StoredValue::new(message);
    let confirm_label =
        StoredValue::new(confirm_label.unwrap_or_else(|| "Confirm".to_string()));
    let confirm_class = if danger { "button--danger" } else { "" };

    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=on_close width="444px" modal_class="dialog">
                <div class="dialog__title">{title.get_value()}</div>
                <div class="dialog__content">{message.get_value()}</div>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class=confirm_class
                        on_click=move |_| on_confirm.run(())
                    >
                        {confirm_label.get_value()}
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
