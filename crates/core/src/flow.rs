//! Per-app launch flow state machine
//!
//! Apps open through up to three screens: intro slides, terms, then the
//! webview. Which steps exist depends on the app's configuration; steps
//! with no data are skipped. Backing out of the webview always leaves the
//! flow, no matter which steps led into it.

use crate::apps::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStep {
    Info,
    Terms,
    Webview,
}

impl AppStep {
    /// First step for an app: info slides when present, else terms when
    /// present, else straight into the webview.
    pub fn initial(config: &AppConfig) -> Self {
        if !config.info_slides.is_empty() {
            Self::Info
        } else if config.terms.is_some() {
            Self::Terms
        } else {
            Self::Webview
        }
    }

    /// Step after completing the current one (continue/accept).
    pub fn advance(self, config: &AppConfig) -> Self {
        match self {
            Self::Info => {
                if config.terms.is_some() {
                    Self::Terms
                } else {
                    Self::Webview
                }
            }
            Self::Terms | Self::Webview => Self::Webview,
        }
    }

    /// Step when navigating back, `None` to exit the flow entirely.
    ///
    /// Terms returns to the intro only when slides exist; the webview never
    /// returns to earlier steps.
    pub fn back(self, config: &AppConfig) -> Option<Self> {
        match self {
            Self::Info | Self::Webview => None,
            Self::Terms => {
                if config.info_slides.is_empty() {
                    None
                } else {
                    Some(Self::Info)
                }
            }
        }
    }
}
