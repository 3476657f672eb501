//! Fragments, locations and the anchor-vs-route dispatch decision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NavError;

/// Application home path.
pub const ROOT_PATH: &str = "/";

/// In-page target identifier, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fragment(String);

impl Fragment {
    /// Accepts `about` or `#about`.
    pub fn parse(raw: &str) -> Result<Self, NavError> {
        let id = raw.strip_prefix('#').unwrap_or(raw);
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(NavError::InvalidFragment(raw.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// Element id, without `#`.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// `#id`, suitable for appending to a path.
    pub fn as_hash(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for Fragment {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Fragment {
    type Error = NavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fragment> for String {
    fn from(value: Fragment) -> Self {
        value.as_hash()
    }
}

/// Current route as the navbar sees it: path plus optional fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLocation {
    pub path: String,
    pub fragment: Option<Fragment>,
}

impl Default for NavLocation {
    fn default() -> Self {
        Self::root()
    }
}

impl NavLocation {
    pub fn root() -> Self {
        Self {
            path: ROOT_PATH.to_string(),
            fragment: None,
        }
    }

    /// Splits a route string such as `/#about` or `/gratitude?x=1`. Query
    /// strings are dropped; an empty or malformed fragment counts as absent.
    pub fn parse(route: &str) -> Self {
        let (before_hash, hash) = match route.split_once('#') {
            Some((before, hash)) => (before, Some(hash)),
            None => (route, None),
        };
        let path = before_hash.split('?').next().unwrap_or_default();
        let path = if path.is_empty() { ROOT_PATH } else { path };

        Self {
            path: path.to_string(),
            fragment: hash.and_then(|h| Fragment::parse(h).ok()),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }
}

impl fmt::Display for NavLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}{}", self.path, fragment),
            None => f.write_str(&self.path),
        }
    }
}

/// What a nav control points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIntent {
    /// Section on the home page.
    Anchor(Fragment),
    /// Separate page, always reached through a route change.
    Page(String),
}

impl NavIntent {
    pub fn anchor(raw: &str) -> Result<Self, NavError> {
        Fragment::parse(raw).map(Self::Anchor)
    }

    pub fn page(path: impl Into<String>) -> Self {
        Self::Page(path.into())
    }

    /// Route string a link for this intent points at.
    pub fn href(&self) -> String {
        match self {
            Self::Anchor(fragment) => format!("{ROOT_PATH}{}", fragment.as_hash()),
            Self::Page(path) => path.clone(),
        }
    }
}

/// Outcome of dispatching an intent from a given location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(Fragment),
    Navigate(String),
}

pub fn dispatch(location: &NavLocation, intent: &NavIntent) -> NavAction {
    match intent {
        NavIntent::Anchor(fragment) if location.is_root() => NavAction::ScrollTo(fragment.clone()),
        // The scroll happens once the new location arrives (see `arrival_target`).
        NavIntent::Anchor(_) | NavIntent::Page(_) => NavAction::Navigate(intent.href()),
    }
}

/// Element to bring into view after a location change, if any.
pub fn arrival_target(location: &NavLocation) -> Option<&Fragment> {
    location.fragment.as_ref()
}

/// Fragment to scroll to by hand when a link points at the location we are
/// already on. The router reports no change in that case, so
/// `arrival_target` never gets a chance to run.
pub fn revisit_target(location: &NavLocation, href: &str) -> Option<Fragment> {
    let target = NavLocation::parse(href);
    if target == *location {
        target.fragment
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about() -> NavIntent {
        NavIntent::anchor("#about").unwrap()
    }

    #[test]
    fn fragment_accepts_with_or_without_hash() {
        assert_eq!(Fragment::parse("#about").unwrap().id(), "about");
        assert_eq!(Fragment::parse("about").unwrap().id(), "about");
        assert_eq!(Fragment::parse("about").unwrap().to_string(), "#about");
    }

    #[test]
    fn fragment_rejects_empty_and_spaced_ids() {
        assert!(matches!(Fragment::parse("#"), Err(NavError::InvalidFragment(_))));
        assert!(matches!(Fragment::parse(""), Err(NavError::InvalidFragment(_))));
        assert!(Fragment::parse("#our team").is_err());
    }

    #[test]
    fn location_parsing_splits_path_and_fragment() {
        let loc = NavLocation::parse("/#about");
        assert!(loc.is_root());
        assert_eq!(loc.fragment.as_ref().map(Fragment::id), Some("about"));

        let loc = NavLocation::parse("/gratitude");
        assert_eq!(loc.path, "/gratitude");
        assert!(loc.fragment.is_none());

        let loc = NavLocation::parse("/gratitude?ref=nav#team");
        assert_eq!(loc.path, "/gratitude");
        assert_eq!(loc.to_string(), "/gratitude#team");
    }

    #[test]
    fn empty_route_and_bare_hash_mean_root_without_fragment() {
        assert_eq!(NavLocation::parse(""), NavLocation::root());
        assert_eq!(NavLocation::parse("/#"), NavLocation::root());
        assert_eq!(NavLocation::parse("#"), NavLocation::root());
    }

    #[test]
    fn anchor_on_root_scrolls_in_place() {
        let action = dispatch(&NavLocation::root(), &about());
        assert_eq!(action, NavAction::ScrollTo(Fragment::parse("about").unwrap()));
    }

    #[test]
    fn anchor_elsewhere_routes_home_with_hash() {
        let location = NavLocation::parse("/gratitude");
        assert_eq!(
            dispatch(&location, &about()),
            NavAction::Navigate("/#about".to_string())
        );

        let arrived = NavLocation::parse("/#about");
        assert_eq!(arrival_target(&arrived).map(Fragment::id), Some("about"));
    }

    #[test]
    fn page_intent_always_routes() {
        let team = NavIntent::page("/gratitude");
        for route in ["/", "/#events", "/gratitude"] {
            assert_eq!(
                dispatch(&NavLocation::parse(route), &team),
                NavAction::Navigate("/gratitude".to_string())
            );
        }
    }

    #[test]
    fn hrefs_point_home_for_anchors() {
        assert_eq!(about().href(), "/#about");
        assert_eq!(NavIntent::page("/gratitude").href(), "/gratitude");
    }

    #[test]
    fn link_to_current_fragment_scrolls_again() {
        let here = NavLocation::parse("/#events");
        assert_eq!(
            revisit_target(&here, "/#events").as_ref().map(Fragment::id),
            Some("events")
        );
    }

    #[test]
    fn link_elsewhere_leaves_scrolling_to_arrival() {
        assert!(revisit_target(&NavLocation::root(), "/#events").is_none());
        assert!(revisit_target(&NavLocation::parse("/gratitude"), "/#events").is_none());
        assert!(revisit_target(&NavLocation::parse("/#about"), "/#events").is_none());
        // Same page without a fragment: nothing to scroll to.
        assert!(revisit_target(&NavLocation::root(), "/").is_none());
    }

    #[test]
    fn no_arrival_target_without_fragment() {
        assert!(arrival_target(&NavLocation::parse("/gratitude")).is_none());
    }

    #[test]
    fn intents_deserialize_from_config_documents() {
        let intent: NavIntent = serde_json::from_str(r##"{"anchor":"#news"}"##).unwrap();
        assert_eq!(intent, NavIntent::anchor("news").unwrap());

        let intent: NavIntent = serde_json::from_str(r#"{"page":"/gratitude"}"#).unwrap();
        assert_eq!(intent, NavIntent::page("/gratitude"));

        assert!(serde_json::from_str::<NavIntent>(r##"{"anchor":"#"}"##).is_err());
    }
}
