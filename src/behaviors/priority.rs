//! Color class on the task priority picker.
//!
//! The `<select name="priority">` carries exactly one `priority-*` class for
//! the current choice, so the stylesheet can tint it.

#[cfg(test)]
#[path = "priority_test.rs"]
mod priority_test;

pub const PRIORITY_SELECT_SELECTOR: &str = r#"select[name="priority"]"#;

/// Task priority choices offered by the server form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Low => "priority-low",
            Self::Medium => "priority-medium",
            Self::High => "priority-high",
        }
    }
}

/// Class for the selected value. Values outside the known choices still get
/// a `priority-<value>` class.
///
/// An empty selection gets no class at all, on purpose: a bare `priority-`
/// class matches no stylesheet rule and would only clutter the class list.
#[must_use]
pub fn class_for(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(Priority::from_value(value).map_or_else(|| format!("priority-{value}"), |p| p.class_name().to_owned()))
}

/// Class list after recomputing for `value`: known priority classes are
/// stripped, unrelated classes are kept in order.
#[must_use]
pub fn recompute(classes: &[&str], value: &str) -> Vec<String> {
    let mut next = classes
        .iter()
        .filter(|class| !Priority::ALL.iter().any(|p| p.class_name() == **class))
        .map(|class| (*class).to_owned())
        .collect::<Vec<_>>();
    if let Some(class) = class_for(value) {
        if !next.contains(&class) {
            next.push(class);
        }
    }
    next
}

/// Edits that turn `current` into `recompute(current, value)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassChanges {
    pub remove: Vec<String>,
    pub add: Vec<String>,
}

#[must_use]
pub fn class_changes(current: &[&str], value: &str) -> ClassChanges {
    let next = recompute(current, value);
    ClassChanges {
        remove: current
            .iter()
            .filter(|class| !next.iter().any(|n| n == **class))
            .map(|class| (*class).to_owned())
            .collect(),
        add: next
            .iter()
            .filter(|n| !current.contains(&n.as_str()))
            .cloned()
            .collect(),
    }
}

#[cfg(feature = "hydrate")]
use web_sys::{Document, DomTokenList, HtmlSelectElement};

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
fn classes_of(class_list: &DomTokenList) -> Vec<String> {
    (0..class_list.length()).filter_map(|i| class_list.item(i)).collect()
}

#[cfg(feature = "hydrate")]
fn paint(select: &HtmlSelectElement) -> Result<(), BehaviorError> {
    let class_list = select.class_list();
    let current = classes_of(&class_list);
    let current = current.iter().map(String::as_str).collect::<Vec<_>>();
    let changes = class_changes(&current, &select.value());
    for class in &changes.remove {
        class_list.remove_1(class)?;
    }
    for class in &changes.add {
        class_list.add_1(class)?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
pub fn install(document: &Document) -> Result<Installed, BehaviorError> {
    let Some(select) = dom::query_one::<HtmlSelectElement>(document, PRIORITY_SELECT_SELECTOR)? else {
        return Ok(Installed::Skipped);
    };

    let target = select.clone();
    dom::listen(&select, "change", move |_event| dom::report("priority color", paint(&target)))?;
    paint(&select)?;

    Ok(Installed::Attached)
}
