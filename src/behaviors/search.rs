//! Auto-submit for the task search box once typing pauses.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::config::BehaviorConfig;
use crate::util::debounce::{Debouncer, Ticket};

pub const SEARCH_INPUT_SELECTOR: &str = ".search-box input";

/// Keystroke bookkeeping for one search box.
#[derive(Clone, Debug)]
pub struct SearchDebounce {
    debouncer: Debouncer,
    delay_ms: u32,
}

impl SearchDebounce {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { debouncer: Debouncer::new(), delay_ms }
    }

    #[must_use]
    pub fn from_config(config: &BehaviorConfig) -> Self {
        Self::new(config.search_debounce_ms)
    }

    /// Record a keystroke; returns the ticket to check and the delay to wait.
    pub fn keystroke(&mut self) -> (Ticket, u32) {
        (self.debouncer.trigger(), self.delay_ms)
    }

    /// Whether the timer holding `ticket` should submit the form.
    pub fn should_submit(&mut self, ticket: Ticket) -> bool {
        self.debouncer.fire(ticket)
    }
}

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlInputElement};

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn submit_owner(input: &HtmlInputElement) {
    let Some(form) = input.form() else {
        log::debug!("search input has no form; nothing to submit");
        return;
    };
    dom::report("search submit", form.submit().map_err(BehaviorError::from));
}

#[cfg(feature = "hydrate")]
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    let Some(input) = dom::query_one::<HtmlInputElement>(document, SEARCH_INPUT_SELECTOR)? else {
        return Ok(Installed::Skipped);
    };

    let search = Rc::new(RefCell::new(SearchDebounce::from_config(config)));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let target = input.clone();
    dom::listen(&input, "input", move |_event| {
        let (ticket, delay_ms) = search.borrow_mut().keystroke();
        let search = Rc::clone(&search);
        let input = target.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if search.borrow_mut().should_submit(ticket) {
                submit_owner(&input);
            }
        });
        // Dropping the previous handle cancels its timer.
        *pending.borrow_mut() = Some(timeout);
    })?;

    Ok(Installed::Attached)
}
