use leptos::prelude::*;

/// Text input with label and inline error message
#[component]
pub fn TextField(
    /// Form field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validation message rendered under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let input_id = name.clone();
    let label_for = name.clone();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=input_id
                name=name
                class=move || {
                    if has_error() { "form__input form__input--error" } else { "form__input" }
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
