//! Confirmation gate on delete links.
//!
//! Links inside a `.delete-form` already sit behind a confirmation page and
//! are left alone.

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

pub const DELETE_SELECTOR: &str = r#"a[href*="delete"], .action-btn.delete"#;
pub const EXEMPT_ANCESTOR_SELECTOR: &str = ".delete-form";

/// Whether a matching link gets the prompt. Links inside a delete form are
/// already confirmed by the form page.
#[must_use]
pub fn should_guard(inside_exempt_form: bool) -> bool {
    !inside_exempt_form
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Proceed,
    Suppress,
}

impl ClickOutcome {
    /// Map the user's answer to the prompt. A failed prompt counts as "no".
    #[must_use]
    pub fn from_answer(confirmed: Option<bool>) -> Self {
        if confirmed == Some(true) { Self::Proceed } else { Self::Suppress }
    }
}

#[cfg(feature = "hydrate")]
use web_sys::{Document, Element};

#[cfg(feature = "hydrate")]
use crate::config::BehaviorConfig;
#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    let window = dom::window()?;
    let mut guarded = 0;

    for link in dom::query_all::<Element>(document, DELETE_SELECTOR)? {
        if !should_guard(link.closest(EXEMPT_ANCESTOR_SELECTOR)?.is_some()) {
            continue;
        }
        let window = window.clone();
        let message = config.delete_confirm_message.clone();
        dom::listen(&link, "click", move |event| {
            let answer = match window.confirm_with_message(&message) {
                Ok(confirmed) => Some(confirmed),
                Err(err) => {
                    log::warn!("delete confirm failed: {}", BehaviorError::from(err));
                    None
                }
            };
            if ClickOutcome::from_answer(answer) == ClickOutcome::Suppress {
                event.prevent_default();
            }
        })?;
        guarded += 1;
    }

    Ok(Installed::from_count(guarded))
}
