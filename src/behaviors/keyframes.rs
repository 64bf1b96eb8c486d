//! Injected `slideOutRight` keyframes used by alert dismissal.

#[cfg(test)]
#[path = "keyframes_test.rs"]
mod keyframes_test;

pub const STYLE_ELEMENT_ID: &str = "taskmaster-keyframes";

pub const SLIDE_OUT_RIGHT: &str = "
    @keyframes slideOutRight {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
";

#[cfg(feature = "hydrate")]
use web_sys::Document;

#[cfg(feature = "hydrate")]
use crate::error::{BehaviorError, Installed};

/// Append the keyframes to `head`, once per page.
#[cfg(feature = "hydrate")]
pub fn install(document: &Document) -> Result<Installed, BehaviorError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(Installed::Skipped);
    }
    let Some(head) = document.head() else {
        return Ok(Installed::Skipped);
    };

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(SLIDE_OUT_RIGHT));
    head.append_child(&style)?;

    Ok(Installed::Attached)
}
