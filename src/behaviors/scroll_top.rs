//! Floating "back to top" button.
//!
//! Created once and appended to `body`. It is always in the document; only
//! its opacity and visibility follow the scroll offset.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

pub const BUTTON_CLASS: &str = "scroll-to-top";
pub const BUTTON_ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;

/// Inline styling for the button. Starts hidden.
pub const BUTTON_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "30px"),
    ("right", "30px"),
    ("width", "50px"),
    ("height", "50px"),
    ("border-radius", "50%"),
    ("background", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    ("color", "white"),
    ("border", "none"),
    ("cursor", "pointer"),
    ("opacity", "0"),
    ("visibility", "hidden"),
    ("transition", "all 0.3s ease"),
    ("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
    ("z-index", "999"),
];

pub const HOVER_TRANSFORM: &str = "translateY(-5px)";
pub const REST_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Shown only once the page is scrolled strictly past `threshold_px`.
    #[must_use]
    pub fn for_offset(offset_px: f64, threshold_px: f64) -> Self {
        if offset_px > threshold_px { Self::Shown } else { Self::Hidden }
    }

    /// `(opacity, visibility)` declarations for this state.
    #[must_use]
    pub fn styles(self) -> [(&'static str, &'static str); 2] {
        match self {
            Self::Shown => [("opacity", "1"), ("visibility", "visible")],
            Self::Hidden => [("opacity", "0"), ("visibility", "hidden")],
        }
    }
}

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

#[cfg(feature = "hydrate")]
use crate::config::BehaviorConfig;
#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    let Some(body) = document.body() else {
        return Ok(Installed::Skipped);
    };
    let window = dom::window()?;

    let button = document
        .create_element("button")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BehaviorError::Js("created button is not an HtmlElement".to_owned()))?;
    button.set_inner_html(BUTTON_ICON);
    button.set_class_name(BUTTON_CLASS);
    dom::apply_styles(&button, BUTTON_STYLE)?;
    body.append_child(&button)?;

    {
        let button = button.clone();
        let scrolled = window.clone();
        let threshold_px = config.scroll_top_threshold_px;
        dom::listen(&window, "scroll", move |_event| {
            let offset = match scrolled.scroll_y() {
                Ok(offset) => offset,
                Err(err) => {
                    log::warn!("scroll offset unavailable: {}", BehaviorError::from(err));
                    return;
                }
            };
            let styles = Visibility::for_offset(offset, threshold_px).styles();
            dom::report("scroll-to-top visibility", dom::apply_styles(&button, &styles));
        })?;
    }

    {
        let window = window.clone();
        dom::listen(&button, "click", move |_event| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    for (event, transform) in [("mouseenter", HOVER_TRANSFORM), ("mouseleave", REST_TRANSFORM)] {
        let target = button.clone();
        dom::listen(&button, event, move |_event| {
            dom::report("scroll-to-top hover", dom::set_style(&target, "transform", transform));
        })?;
    }

    Ok(Installed::Attached)
}
