//! Flash-message dismissal.
//!
//! Every `.alert` slides out after a fixed delay, or immediately when its
//! `.close-alert` button is clicked, then leaves the document once the fade
//! finishes. Each alert tracks its own phase so a late auto-dismiss timer
//! after a manual close does nothing.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::config::BehaviorConfig;

pub const ALERT_SELECTOR: &str = ".alert";
pub const CLOSE_SELECTOR: &str = ".close-alert";

/// CSS animation applied when an alert starts leaving.
#[must_use]
pub fn slide_out_animation(fade_ms: u32) -> String {
    format!("slideOutRight {}s ease forwards", f64::from(fade_ms) / 1000.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertPhase {
    #[default]
    Visible,
    FadingOut,
    Removed,
}

impl AlertPhase {
    /// Start the fade. Returns `false` if the alert is already leaving.
    pub fn begin_dismiss(&mut self) -> bool {
        if *self != Self::Visible {
            return false;
        }
        *self = Self::FadingOut;
        true
    }

    /// Finish the fade. Returns `false` unless the alert was fading.
    pub fn finish(&mut self) -> bool {
        if *self != Self::FadingOut {
            return false;
        }
        *self = Self::Removed;
        true
    }
}

/// Delays driving one alert's exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTimeline {
    dismiss_ms: u32,
    fade_ms: u32,
}

impl DismissTimeline {
    #[must_use]
    pub fn new(dismiss_ms: u32, fade_ms: u32) -> Self {
        Self { dismiss_ms, fade_ms }
    }

    #[must_use]
    pub fn from_config(config: &BehaviorConfig) -> Self {
        Self::new(config.alert_dismiss_ms, config.alert_fade_ms)
    }

    /// Delay from page load until an untouched alert starts fading.
    #[must_use]
    pub fn auto_dismiss_delay(self) -> u32 {
        self.dismiss_ms
    }

    /// Delay from the start of the fade until the alert leaves the document.
    #[must_use]
    pub fn removal_delay(self) -> u32 {
        self.fade_ms
    }

    #[must_use]
    pub fn animation(self) -> String {
        slide_out_animation(self.fade_ms)
    }
}

#[cfg(feature = "hydrate")]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn dismiss(alert: &HtmlElement, phase: &Rc<Cell<AlertPhase>>, timeline: DismissTimeline) {
    let mut current = phase.get();
    if !current.begin_dismiss() {
        return;
    }
    phase.set(current);
    dom::report(
        "alert fade",
        dom::set_style(alert, "animation", &timeline.animation()),
    );

    let alert = alert.clone();
    let phase = Rc::clone(phase);
    dom::after(timeline.removal_delay(), move || {
        let mut current = phase.get();
        if current.finish() {
            phase.set(current);
            alert.remove();
        }
    });
}

#[cfg(feature = "hydrate")]
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    let alerts = dom::query_all::<HtmlElement>(document, ALERT_SELECTOR)?;
    let timeline = DismissTimeline::from_config(config);

    for alert in &alerts {
        let phase = Rc::new(Cell::new(AlertPhase::Visible));

        {
            let alert = alert.clone();
            let phase = Rc::clone(&phase);
            dom::after(timeline.auto_dismiss_delay(), move || dismiss(&alert, &phase, timeline));
        }

        if let Some(close) = alert.query_selector(CLOSE_SELECTOR)? {
            let alert = alert.clone();
            dom::listen(&close, "click", move |_event| dismiss(&alert, &phase, timeline))?;
        }
    }

    Ok(Installed::from_count(alerts.len()))
}
