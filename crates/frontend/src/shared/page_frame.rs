//! PageFrame: standard root wrapper for a page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the
//! root element so the page can be located from the DOM inspector.

use super::page_standard::*;
use leptos::prelude::*;

/// CSS class for the page root: `page` plus optional extra classes
pub fn page_class(extra: &str) -> String {
    if extra.is_empty() {
        "page".to_string()
    } else {
        format!("page {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div
            id=page_id
            class=page_class(class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(""), "page");
        assert_eq!(page_class("meal-planner"), "page meal-planner");
    }
}
