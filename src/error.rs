//! Error type shared by every behavior installer.
//!
//! ERROR HANDLING
//! ==============
//! Missing page elements are not errors: installers report them as
//! [`Installed::Skipped`] and the page keeps working. Only browser globals
//! going missing, DOM calls throwing, or a bad config block surface here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Js(String),
    #[error("config is not valid json: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Outcome of wiring one behavior onto the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Installed {
    /// Listeners or mutations were applied.
    Attached,
    /// The elements the behavior needs are not on this page.
    Skipped,
}

impl Installed {
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        if count == 0 { Self::Skipped } else { Self::Attached }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Attached => "attached",
            Self::Skipped => "skipped",
        }
    }
}
