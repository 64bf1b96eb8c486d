//! Independent page behaviors.
//!
//! DESIGN
//! ======
//! Each module pairs a browser-free core (state, timing, predicates) with an
//! `install` function, compiled under `hydrate`, that binds the core to the
//! page. Behaviors share nothing; one failing to install never stops the
//! others.

pub mod alerts;
pub mod anchors;
pub mod dates;
pub mod delete;
pub mod keyframes;
pub mod nav;
pub mod priority;
pub mod reveal;
pub mod scroll_top;
pub mod search;
pub mod submit;


use crate::error::Installed;

/// Every behavior, in install order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Keyframes,
    Anchors,
    Nav,
    Alerts,
    Submit,
    Delete,
    ScrollTop,
    Search,
    Reveal,
    Dates,
    Priority,
}

impl Behavior {
    pub const ALL: [Self; 11] = [
        Self::Keyframes,
        Self::Anchors,
        Self::Nav,
        Self::Alerts,
        Self::Submit,
        Self::Delete,
        Self::ScrollTop,
        Self::Search,
        Self::Reveal,
        Self::Dates,
        Self::Priority,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyframes => "keyframes",
            Self::Anchors => "anchors",
            Self::Nav => "nav",
            Self::Alerts => "alerts",
            Self::Submit => "submit",
            Self::Delete => "delete",
            Self::ScrollTop => "scroll-top",
            Self::Search => "search",
            Self::Reveal => "reveal",
            Self::Dates => "dates",
            Self::Priority => "priority",
        }
    }
}

/// Tally of one `install_all` pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub attached: Vec<Behavior>,
    pub skipped: Vec<Behavior>,
    pub failed: Vec<Behavior>,
}

impl InstallReport {
    pub fn record(&mut self, behavior: Behavior, outcome: Option<Installed>) {
        match outcome {
            Some(Installed::Attached) => self.attached.push(behavior),
            Some(Installed::Skipped) => self.skipped.push(behavior),
            None => self.failed.push(behavior),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} attached, {} skipped, {} failed",
            self.attached.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

#[cfg(feature = "hydrate")]
use web_sys::Document;

#[cfg(feature = "hydrate")]
use crate::config::BehaviorConfig;
#[cfg(feature = "hydrate")]
use crate::error::BehaviorError;

#[cfg(feature = "hydrate")]
fn install_one(behavior: Behavior, document: &Document, config: &BehaviorConfig) -> Result<Installed, BehaviorError> {
    match behavior {
        Behavior::Keyframes => keyframes::install(document),
        Behavior::Anchors => anchors::install(document),
        Behavior::Nav => nav::install(document),
        Behavior::Alerts => alerts::install(document, config),
        Behavior::Submit => submit::install(document, config),
        Behavior::Delete => delete::install(document, config),
        Behavior::ScrollTop => scroll_top::install(document, config),
        Behavior::Search => search::install(document, config),
        Behavior::Reveal => reveal::install(document, config),
        Behavior::Dates => dates::install(document),
        Behavior::Priority => priority::install(document),
    }
}

/// Install every behavior, logging each outcome.
#[cfg(feature = "hydrate")]
pub fn install_all(document: &Document, config: &BehaviorConfig) -> InstallReport {
    let mut report = InstallReport::default();
    for behavior in Behavior::ALL {
        let outcome = match install_one(behavior, document, config) {
            Ok(installed) => {
                log::debug!("{}: {}", behavior.name(), installed.label());
                Some(installed)
            }
            Err(err) => {
                log::warn!("{} failed to install: {err}", behavior.name());
                None
            }
        };
        report.record(behavior, outcome);
    }
    report
}
