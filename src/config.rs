//! Page-level tuning for the behavior layer.
//!
//! The server may render an optional JSON block into the page:
//!
//! ```html
//! <script type="application/json" id="taskmaster-config">
//!   { "alert_dismiss_ms": 8000 }
//! </script>
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::BehaviorError;

/// Element id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "taskmaster-config";

pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5000;
pub const DEFAULT_ALERT_FADE_MS: u32 = 300;
pub const DEFAULT_SUBMIT_RESTORE_MS: u32 = 3000;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;
pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const DEFAULT_REVEAL_STAGGER_MS: u32 = 100;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;
pub const DEFAULT_DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    pub alert_dismiss_ms: u32,
    pub alert_fade_ms: u32,
    pub submit_restore_ms: u32,
    pub busy_label: String,
    pub delete_confirm_message: String,
    pub scroll_top_threshold_px: f64,
    pub search_debounce_ms: u32,
    pub reveal_stagger_ms: u32,
    pub reveal_threshold: f64,
    pub log_level: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            alert_fade_ms: DEFAULT_ALERT_FADE_MS,
            submit_restore_ms: DEFAULT_SUBMIT_RESTORE_MS,
            busy_label: DEFAULT_BUSY_LABEL.to_owned(),
            delete_confirm_message: DEFAULT_DELETE_CONFIRM_MESSAGE.to_owned(),
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl BehaviorConfig {
    /// Parse and validate a JSON config block.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the behaviors cannot honor.
    pub fn validate(&self) -> Result<(), BehaviorError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(BehaviorError::InvalidConfig(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if !self.scroll_top_threshold_px.is_finite() || self.scroll_top_threshold_px < 0.0 {
            return Err(BehaviorError::InvalidConfig(format!(
                "scroll_top_threshold_px must be a non-negative number, got {}",
                self.scroll_top_threshold_px
            )));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(BehaviorError::InvalidConfig(format!("unknown log_level {:?}", self.log_level)));
        }
        Ok(())
    }

    /// Console log level, falling back to `info` for an unparseable value.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Read the embedded config block, or the defaults when the page has none.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Result<Self, BehaviorError> {
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(el) => Self::from_json(&el.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}
