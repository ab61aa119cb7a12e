use super::page_standard::{is_valid_page_id, page_class};
use leptos::prelude::*;

/// Root wrapper of a page: `id`, `data-page-category` and the BEM class
/// derived from the category.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"d404_fiscal_outlook--dashboard"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    /// Extra classes appended after the base one
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: page id '{}' is not in entity--category format", page_id);
    }

    let full_class = match class {
        "" => page_class(category).to_string(),
        extra => format!("{} {}", page_class(category), extra),
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
