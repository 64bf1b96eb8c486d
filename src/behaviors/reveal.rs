//! Staggered entrance animation for task cards.
//!
//! Cards start transparent. The first time a card crosses the visibility
//! threshold it fades in, delayed by its position in the observer batch, and
//! is unobserved so it never animates twice.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const CARD_SELECTOR: &str = ".task-card";
pub const ENTRANCE_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// One card scheduled to animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Position of the entry in the observer batch.
    pub index: usize,
    pub delay_ms: u32,
}

/// Schedule the intersecting entries of one observer batch.
///
/// The stagger counts every entry in the batch, intersecting or not.
#[must_use]
pub fn plan_batch(intersecting: &[bool], stagger_ms: u32) -> Vec<Reveal> {
    intersecting
        .iter()
        .enumerate()
        .filter(|(_, visible)| **visible)
        .map(|(index, _)| Reveal {
            index,
            delay_ms: stagger_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
        })
        .collect()
}

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
use crate::config::BehaviorConfig;
#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn on_batch(entries: &js_sys::Array, observer: &IntersectionObserver, stagger_ms: u32) {
    let entries = entries
        .iter()
        .map(|value| value.unchecked_into::<IntersectionObserverEntry>())
        .collect::<Vec<_>>();
    let flags = entries.iter().map(IntersectionObserverEntry::is_intersecting).collect::<Vec<_>>();

    for reveal in plan_batch(&flags, stagger_ms) {
        let Some(entry) = entries.get(reveal.index) else {
            continue;
        };
        let target = entry.target();
        observer.unobserve(&target);
        let Ok(card) = target.dyn_into::<HtmlElement>() else {
            continue;
        };
        dom::after(reveal.delay_ms, move || {
            dom::report("card entrance", dom::set_style(&card, "animation", ENTRANCE_ANIMATION));
        });
    }
}

#[cfg(feature = "hydrate")]
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    let cards = dom::query_all::<HtmlElement>(document, CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(Installed::Skipped);
    }

    let stagger_ms = config.reveal_stagger_ms;
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        on_batch(&entries, &observer, stagger_ms);
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for card in &cards {
        dom::set_style(card, "opacity", "0")?;
        observer.observe(card);
    }

    Ok(Installed::Attached)
}
