use leptos::prelude::*;

/// Option of a [`SingleSelectField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Whether `choice` is the one shown as selected for `value`
pub fn is_selected(value: &str, choice: &Choice) -> bool {
    !value.is_empty() && choice.value == value
}

/// Select with a single value out of a list of choices
#[component]
pub fn SingleSelectField(
    /// Form field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Available choices
    #[prop(into)]
    choices: Signal<Vec<Choice>>,
    /// Change event handler, receives the new value
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Text of an empty first option, shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message rendered under the select
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let select_id = name.clone();
    let label_for = name.clone();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=name
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" disabled=true selected=move || value.get().is_empty()>
                        {p}
                    </option>
                })}
                <For
                    each=move || choices.get()
                    key=|choice| choice.value.clone()
                    children=move |choice| {
                        let option = choice.clone();
                        let selected = move || value.with(|v| is_selected(v, &option));
                        view! {
                            <option value=choice.value selected=selected>
                                {choice.label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
