//! # taskmaster-ui
//!
//! WASM behavior layer for the server-rendered TaskMaster pages. Replaces the
//! hand-written `main.js` with Rust wired through `web-sys`.
//!
//! Every behavior is a leaf: it looks up its elements by selector, attaches
//! listeners or mutates classes and styles, and does nothing when its
//! elements are missing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`behaviors`] | One module per page behavior plus `install_all` |
//! | [`config`] | Timings and labels, optionally overridden by the page |
//! | [`error`] | [`error::BehaviorError`] and the install outcome |
//! | [`util`] | DOM helpers and debounce bookkeeping |
//!
//! Browser code is compiled only with the `hydrate` feature; without it the
//! pure cores build and test natively.

pub mod behaviors;
pub mod config;
pub mod error;
pub mod util;

/// Attribute set on `<html>` once behaviors are installed.
pub const READY_ATTRIBUTE: &str = "data-taskmaster-ready";

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }
}

#[cfg(feature = "hydrate")]
fn hydrate_page(document: &web_sys::Document) -> Result<(), error::BehaviorError> {
    let root = document.document_element().ok_or(error::BehaviorError::NoDocument)?;
    if root.has_attribute(READY_ATTRIBUTE) {
        log::debug!("behaviors already installed");
        return Ok(());
    }

    let config = match config::BehaviorConfig::from_document(document) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            config::BehaviorConfig::default()
        }
    };
    log::set_max_level(config.level().to_level_filter());

    let report = behaviors::install_all(document, &config);
    root.set_attribute(READY_ATTRIBUTE, "")?;
    log::info!("TaskMaster behaviors loaded ({})", report.summary());
    Ok(())
}

/// WASM entry point: install behaviors once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    init_logging(log::Level::Trace);

    let document = util::dom::document().map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
    if document.ready_state() == "loading" {
        let page = document.clone();
        util::dom::listen(&document, "DOMContentLoaded", move |_event| {
            util::dom::report("hydrate", hydrate_page(&page));
        })
        .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
    } else {
        util::dom::report("hydrate", hydrate_page(&document));
    }
    Ok(())
}
