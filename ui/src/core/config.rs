//! Navbar configuration.
//!
//! Platforms may provide a `NavConfig` through Dioxus context; otherwise the
//! component uses `NavConfig::default()`. Labels are i18n message ids, looked
//! up at render time so a language switch relabels everything.

use serde::{Deserialize, Serialize};

use super::anchor::{Fragment, NavIntent, ROOT_PATH};
use super::error::NavError;

/// Secondary page reached by the "Our Team" control.
pub const GRATITUDE_PATH: &str = "/gratitude";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label_key: String,
    pub intent: NavIntent,
}

impl NavLink {
    pub fn new(label_key: impl Into<String>, intent: NavIntent) -> Self {
        Self {
            label_key: label_key.into(),
            intent,
        }
    }

    fn anchor(label_key: &str, id: &str) -> Self {
        Self::new(label_key, NavIntent::Anchor(section(id)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub logo_src: String,
    pub logo_alt_key: String,
    /// Call-to-action next to the logo. Always a route change, even on the
    /// home page, so the fragment lands in the URL.
    pub cta: NavLink,
    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            logo_src: "/img/logo.png".to_string(),
            logo_alt_key: "nav-logo-alt".to_string(),
            cta: NavLink::new(
                "nav-events",
                NavIntent::page(format!("{ROOT_PATH}{}", section("events").as_hash())),
            ),
            links: vec![
                NavLink::anchor("nav-about", "about"),
                NavLink::anchor("nav-announcements", "announcements"),
                NavLink::new("nav-team", NavIntent::page(GRATITUDE_PATH)),
            ],
        }
    }
}

impl NavConfig {
    pub fn from_json(src: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(src)?)
    }
}

fn section(id: &str) -> Fragment {
    // Built-in ids are plain words; `parse` only rejects empty or spaced ids.
    Fragment::parse(id).unwrap_or_else(|_| unreachable!("built-in section id {id:?}"))
}
