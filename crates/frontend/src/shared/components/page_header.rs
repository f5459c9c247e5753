use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - header row of detail pages.
///
/// Renders a back button when `on_back` is given; the title is left empty
/// while it is not known yet.
#[component]
pub fn PageHeader(
    /// Page title, `None` while loading
    #[prop(into)]
    title: Signal<Option<String>>,

    /// Back navigation
    #[prop(optional)]
    on_back: Option<Callback<()>>,

    /// Header actions (menus, buttons)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {on_back.map(|back| view! {
                    <button
                        class="button button--icon page__back"
                        title="Back"
                        on:click=move |_| back.run(())
                    >
                        {icon("arrow-left")}
                    </button>
                })}
                <h1 class="page__title">{move || title.get().unwrap_or_default()}</h1>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
