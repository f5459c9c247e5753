use leptos::prelude::*;

/// Placeholder line shown while data is loading
#[component]
pub fn Skeleton(
    /// CSS width of the placeholder (default: `100%`)
    #[prop(optional, into)]
    width: Option<String>,
) -> impl IntoView {
    let style = format!(
        "display: inline-block; width: {};",
        width.unwrap_or_else(|| "100%".to_string())
    );

    // Zero-width non-joiner keeps the line height of regular text
    view! { <span class="skeleton" style=style aria-busy="true">"\u{200C}"</span> }
}
