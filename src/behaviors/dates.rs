//! Earliest-selectable date for empty date pickers.
//!
//! An empty `input[type="date"]` cannot pick a day before today. Inputs that
//! already carry a value (editing an existing task) keep their full range.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

pub const DATE_INPUT_SELECTOR: &str = r#"input[type="date"]"#;

/// Calendar date (`YYYY-MM-DD`) of an ISO-8601 timestamp.
#[must_use]
pub fn iso_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// The `min` to apply to an input with `value`, if any.
#[must_use]
pub fn min_for<'a>(value: &str, today: &'a str) -> Option<&'a str> {
    if value.is_empty() { Some(today) } else { None }
}

#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlInputElement};

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
pub fn install(document: &Document) -> Result<Installed, BehaviorError> {
    let inputs = dom::query_all::<HtmlInputElement>(document, DATE_INPUT_SELECTOR)?;
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let today = iso_date(&timestamp);

    let mut defaulted = 0;
    for input in &inputs {
        if let Some(min) = min_for(&input.value(), today) {
            input.set_min(min);
            defaulted += 1;
        }
    }
    log::debug!("date inputs: {} found, {defaulted} defaulted to {today}", inputs.len());

    Ok(Installed::from_count(inputs.len()))
}
