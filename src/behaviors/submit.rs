//! Busy state for form submit buttons.
//!
//! The button's original label is stashed in `data-original-text` at load.
//! Submitting disables the button behind a spinner label; if the page is
//! still here after the restore delay (a validation error re-rendered the
//! form, say) the button comes back with its exact original label.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

pub const FORM_SELECTOR: &str = "form";
pub const BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
/// `dataset` key backing the `data-original-text` attribute.
pub const ORIGINAL_TEXT_KEY: &str = "originalText";

/// Desired button state after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonPatch {
    pub disabled: bool,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitButtonState {
    original: Option<String>,
}

impl SubmitButtonState {
    /// State for a button whose label was captured at load.
    #[must_use]
    pub fn captured(original: Option<String>) -> Self {
        Self { original: original.filter(|label| !label.is_empty()) }
    }

    #[must_use]
    pub fn busy(&self, busy_label: &str) -> ButtonPatch {
        ButtonPatch { disabled: true, label: busy_label.to_owned() }
    }

    /// Re-enable; without a captured label the current one is kept.
    #[must_use]
    pub fn restore(&self, current_label: &str) -> ButtonPatch {
        ButtonPatch {
            disabled: false,
            label: self.original.clone().unwrap_or_else(|| current_label.to_owned()),
        }
    }
}

#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlButtonElement, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::config::BehaviorConfig;
#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn apply(button: &HtmlButtonElement, patch: &ButtonPatch) {
    button.set_disabled(patch.disabled);
    button.set_inner_html(&patch.label);
}

#[cfg(feature = "hydrate")]
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    let forms = dom::query_all::<HtmlElement>(document, FORM_SELECTOR)?;
    let mut wired = 0;

    for form in &forms {
        let Some(button) = dom::query_within::<HtmlButtonElement>(form, BUTTON_SELECTOR)?.into_iter().next() else {
            continue;
        };
        button.dataset().set(ORIGINAL_TEXT_KEY, &button.inner_html())?;

        let busy_label = config.busy_label.clone();
        let restore_ms = config.submit_restore_ms;
        dom::listen(form, "submit", move |_event| {
            let state = SubmitButtonState::captured(button.dataset().get(ORIGINAL_TEXT_KEY));
            apply(&button, &state.busy(&busy_label));

            let button = button.clone();
            dom::after(restore_ms, move || {
                apply(&button, &state.restore(&button.inner_html()));
            });
        })?;
        wired += 1;
    }

    Ok(Installed::from_count(wired))
}
