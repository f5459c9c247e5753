//! PageFrame: standard root wrapper for every order screen.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_draft_order--detail"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Root wrapper that sets standard metadata on a page.
///
/// Adds the BEM modifier class based on category:
/// - `detail` → `page page--detail`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = page_class(category, class);

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}

fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_DETAIL, ""), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_DETAIL, "page--md"), "page page--detail page--md");
        assert_eq!(page_class("unknown", ""), "page");
    }
}
