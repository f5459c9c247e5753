//! CardMenu - "more" button opening a list of actions.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone)]
pub struct CardMenuItem {
    pub label: String,
    pub on_select: Callback<()>,
}

impl CardMenuItem {
    pub fn new(label: impl Into<String>, on_select: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_select,
        }
    }
}

#[component]
pub fn CardMenu(
    menu_items: Vec<CardMenuItem>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let items = StoredValue::new(menu_items);

    let toggle_menu = move |_| {
        is_open.update(|open| *open = !*open);
    };

    view! {
        <div class=move || format!("card-menu {}", class.get().unwrap_or_default())>
            <button class="button button--icon card-menu__trigger" title="More" on:click=toggle_menu>
                {icon("more-vertical")}
            </button>
            <Show when=move || is_open.get()>
                <div class="card-menu__list" role="menu">
                    {items
                        .get_value()
                        .into_iter()
                        .map(|item| {
                            let on_select = item.on_select;
                            view! {
                                <button
                                    class="card-menu__item"
                                    role="menuitem"
                                    on:click=move |_| {
                                        is_open.set(false);
                                        on_select.run(());
                                    }
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
