//! Smooth scrolling for in-page anchors.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Element id an in-page `href` points at, if any.
///
/// A bare `#` names nothing.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
pub fn install(document: &Document) -> Result<Installed, BehaviorError> {
    let anchors = dom::query_all::<Element>(document, ANCHOR_SELECTOR)?;

    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();
        dom::listen(anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    Ok(Installed::from_count(anchors.len()))
}
