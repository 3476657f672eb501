//! Platform detection and the two DOM capabilities the navbar needs:
//! reading the scroll offset and smooth-scrolling an element into view.

use super::anchor::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Reports `window.scrollY` through `dioxus.send` once on start and then on
/// every scroll event. A listener left behind by a previous mount is removed
/// first.
pub const SCROLL_LISTENER_JS: &str = r#"
if (window.__beaconNavScroll) {
    window.removeEventListener("scroll", window.__beaconNavScroll);
}
const report = () => dioxus.send(Math.round(window.scrollY));
window.__beaconNavScroll = report;
window.addEventListener("scroll", report, { passive: true });
report();
"#;

/// Outcome of a scroll-into-view request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Scrolled,
    /// No element carries the fragment's id. Not an error.
    Missing,
    /// Handed to the webview; the script itself skips missing elements.
    Delegated,
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_into_view(fragment: &Fragment) -> ScrollRequest {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return ScrollRequest::Missing;
    };
    let Some(target) = document.get_element_by_id(fragment.id()) else {
        return ScrollRequest::Missing;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    ScrollRequest::Scrolled
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_into_view(fragment: &Fragment) -> ScrollRequest {
    use dioxus::document;

    match scroll_into_view_script(fragment) {
        Ok(script) => {
            let _ = document::eval(&script);
            ScrollRequest::Delegated
        }
        Err(err) => {
            dioxus::logger::tracing::warn!("could not encode fragment {fragment}: {err}");
            ScrollRequest::Missing
        }
    }
}

/// Script equivalent of the wasm path, with the id JSON-escaped.
pub fn scroll_into_view_script(fragment: &Fragment) -> Result<String, serde_json::Error> {
    let id = serde_json::to_string(fragment.id())?;
    Ok(format!(
        "const target = document.getElementById({id});\n\
         if (target) {{ target.scrollIntoView({{ behavior: \"smooth\" }}); }}"
    ))
}
