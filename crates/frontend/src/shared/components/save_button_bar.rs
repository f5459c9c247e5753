use leptos::prelude::*;
use thaw::*;

/// Sticky bar with Cancel / Save actions at the bottom of a detail page
#[component]
pub fn SaveButtonBar(
    /// Disables the save button only
    #[prop(into)]
    disabled: Signal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
    /// Save button label (default: "Save")
    #[prop(optional, into)]
    save_label: Option<String>,
) -> impl IntoView {
    let save_label = save_label.unwrap_or_else(|| "Save".to_string());

    view! {
        <div class="save-bar">
            <div class="save-bar__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=disabled
                    on_click=move |_| on_save.run(())
                >
                    {save_label}
                </Button>
            </div>
        </div>
    }
}
