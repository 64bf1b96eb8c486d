//! Thin `web-sys` helpers shared by the behavior installers.
//!
//! Requires a browser environment; the whole module is compiled only with
//! the `hydrate` feature.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::NoDocument)
}

/// All elements under `document` matching `selector`, cast to `T`.
///
/// Nodes that are not a `T` are dropped.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, BehaviorError> {
    Ok(collect(&document.query_selector_all(selector)?))
}

/// Descendants of `root` matching `selector`, cast to `T`.
pub fn query_within<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, BehaviorError> {
    Ok(collect(&root.query_selector_all(selector)?))
}

/// First element under `document` matching `selector`, cast to `T`.
pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, BehaviorError> {
    let Some(el) = document.query_selector(selector)? else {
        return Ok(None);
    };
    Ok(match el.dyn_into::<T>() {
        Ok(cast) => Some(cast),
        Err(_) => None,
    })
}

fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<T>() {
                out.push(el);
            }
        }
    }
    out
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run `f` once after `millis`, without keeping a handle to cancel it.
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, f).forget();
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), BehaviorError> {
    el.style().set_property(property, value)?;
    Ok(())
}

/// Apply a list of `(property, value)` pairs; an empty value clears the property.
pub fn apply_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), BehaviorError> {
    let style = el.style();
    for (property, value) in styles {
        if value.is_empty() {
            style.remove_property(property)?;
        } else {
            style.set_property(property, value)?;
        }
    }
    Ok(())
}

/// Log a failed callback step. Event callbacks have nowhere to propagate to.
pub fn report(context: &str, result: Result<(), BehaviorError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
