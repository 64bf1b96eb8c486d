//! Mobile navigation toggle.
//!
//! The open flag lives in the `active` class on `.nav-menu`; the three
//! `span` bars inside `.hamburger` morph into a cross while open. A click
//! anywhere outside `.navbar` closes an open menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const TRIGGER_SELECTOR: &str = ".hamburger";
pub const MENU_SELECTOR: &str = ".nav-menu";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const OPEN_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inline style for one hamburger bar. Empty strings clear the property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const CLEARED: BarStyle = BarStyle { transform: "", opacity: "" };

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { transform: "rotate(45deg) translateY(8px)", opacity: "" },
    BarStyle { transform: "", opacity: "0" },
    BarStyle { transform: "rotate(-45deg) translateY(-8px)", opacity: "" },
];

impl MenuState {
    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// State after a document click; only an outside click closes the menu.
    #[must_use]
    pub fn after_click(self, inside_navbar: bool) -> Self {
        if inside_navbar { self } else { Self::Closed }
    }

    /// Style for the bar at `index`. Bars past the third are always cleared.
    #[must_use]
    pub fn bar_style(self, index: usize) -> BarStyle {
        match self {
            Self::Open => OPEN_BARS.get(index).copied().unwrap_or(CLEARED),
            Self::Closed => CLEARED,
        }
    }
}

/// Both elements the toggle needs, or nothing. Pages missing either get no
/// listeners at all.
#[must_use]
pub fn resolve_targets<T, M>(trigger: Option<T>, menu: Option<M>) -> Option<(T, M)> {
    trigger.zip(menu)
}

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn paint_bars(trigger: &Element, state: MenuState) -> Result<(), BehaviorError> {
    for (index, bar) in dom::query_within::<HtmlElement>(trigger, "span")?.iter().enumerate() {
        let style = state.bar_style(index);
        dom::apply_styles(bar, &[("transform", style.transform), ("opacity", style.opacity)])?;
    }
    Ok(())
}

/// Wire the hamburger toggle and the outside-click close.
#[cfg(feature = "hydrate")]
pub fn install(document: &Document) -> Result<Installed, BehaviorError> {
    let Some((trigger, menu)) = resolve_targets(
        dom::query_one::<Element>(document, TRIGGER_SELECTOR)?,
        dom::query_one::<Element>(document, MENU_SELECTOR)?,
    ) else {
        return Ok(Installed::Skipped);
    };

    {
        let trigger_for_cb = trigger.clone();
        let menu = menu.clone();
        dom::listen(&trigger, "click", move |_event| {
            let class_list = menu.class_list();
            let next = MenuState::from_open(class_list.contains(OPEN_CLASS)).toggled();
            let result = class_list
                .toggle_with_force(OPEN_CLASS, next.is_open())
                .map_err(BehaviorError::from)
                .and_then(|_| paint_bars(&trigger_for_cb, next));
            dom::report("nav toggle", result);
        })?;
    }

    dom::listen(document, "click", move |event| {
        let state = MenuState::from_open(menu.class_list().contains(OPEN_CLASS));
        if !state.is_open() {
            return;
        }
        let inside = match event.target().map(|t| t.dyn_into::<Element>()) {
            Some(Ok(el)) => matches!(el.closest(NAVBAR_SELECTOR), Ok(Some(_))),
            _ => false,
        };
        if state.after_click(inside).is_open() {
            return;
        }
        let result = menu
            .class_list()
            .remove_1(OPEN_CLASS)
            .map_err(BehaviorError::from)
            .and_then(|()| paint_bars(&trigger, MenuState::Closed));
        dom::report("nav close", result);
    })?;

    Ok(Installed::Attached)
}
