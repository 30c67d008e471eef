//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_meal_plan--usecase"`) plus `data-page-category`.

/// Use-case / action page (forms that do something).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
