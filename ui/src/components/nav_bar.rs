use std::rc::Rc;

use dioxus::logger::tracing::{debug, trace};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::anchor::{
    arrival_target, revisit_target, Fragment, NavIntent, NavLocation, ROOT_PATH,
};
use crate::core::config::NavConfig;
use crate::core::menu::{activate, ControlSource, MenuState, NavEffect};
use crate::core::motion::NavMotion;
use crate::core::platform::{self, Platform, ScrollRequest};
use crate::core::scroll::ScrollTracker;
use crate::hooks::use_window_scroll;
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms can (optionally) register a `LinkBuilder` so the logo and the
/// call-to-action render as real router links for their own `Route` enum,
/// which `ui` does not know about.
///
/// Without a builder those controls fall back to plain anchors whose clicks
/// go through `NavBar`'s `on_navigate`.
///
/// ```ignore
/// fn route_link(to: &str, class: &'static str, children: Element) -> Element {
///     match to.parse::<Route>() {
///         Ok(route) => rsx!( Link { class: "{class}", to: route, {children} } ),
///         Err(_) => rsx!( {children} ),
///     }
/// }
/// register_links(LinkBuilder { route_link });
/// ```
pub struct LinkBuilder {
    /// Wraps `children` in a link to the route string `to` (e.g. `/#events`).
    pub route_link: fn(to: &str, class: &'static str, children: Element) -> Element,
}

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    let _ = LINK_BUILDER.set(builder);
}

/// Site navigation bar.
///
/// Hides while the page scrolls down, comes back (floating) on scroll up and
/// sits flat at the very top. Section links scroll in place on the home page
/// and route home with the fragment from anywhere else; the fragment in the
/// new location is then scrolled into view.
#[component]
pub fn NavBar(location: ReadOnlySignal<NavLocation>, on_navigate: EventHandler<String>) -> Element {
    i18n::init();

    let config = try_use_context::<NavConfig>().unwrap_or_default();
    let scroll_y = use_window_scroll();

    let mut root = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut tracker = use_signal(ScrollTracker::new);
    let mut motion = use_signal(NavMotion::default);
    let mut menu = use_signal(MenuState::default);

    use_effect(move || {
        let y = scroll_y();
        let mounted = root.read().is_some();
        let Some(update) = tracker.with_mut(|t| t.observe_mounted(mounted, y)) else {
            return;
        };
        if let Some(next) = update.motion() {
            trace!(offset = y, phase = ?update.phase, "navbar visibility changed");
            motion.set(next);
        }
    });

    use_effect(move || {
        let location = location();
        if let Some(fragment) = arrival_target(&location) {
            scroll_to(fragment);
        }
    });

    let run = move |intent: NavIntent, source: ControlSource| {
        let mut menu = menu;
        let effects = activate(&menu.peek(), &location.peek(), &intent, source);
        for effect in effects {
            match effect {
                NavEffect::CloseMenu => menu.with_mut(MenuState::close),
                NavEffect::ScrollTo(fragment) => scroll_to(&fragment),
                NavEffect::Navigate(path) => {
                    debug!(%path, "navbar route change");
                    on_navigate.call(path);
                }
            }
        }
    };

    let nav_class = if tracker.read().floating() {
        "navbar navbar--floating"
    } else {
        "navbar"
    };
    let menu_open = menu.read().is_open();
    let style = motion.read().style();

    let logo_alt = i18n::tr(&config.logo_alt_key);
    let logo = route_link(
        ROOT_PATH.to_string(),
        "navbar__logo-link",
        rsx! {
            img { class: "navbar__logo", src: "{config.logo_src}", alt: "{logo_alt}" }
        },
        on_navigate,
        location,
    );

    let cta_label = i18n::tr(&config.cta.label_key);
    let cta = route_link(
        config.cta.intent.href(),
        "navbar__cta-link",
        rsx! {
            span { class: "navbar__cta",
                span { class: "navbar__cta-icon", aria_hidden: "true", "➤" }
                "{cta_label}"
            }
        },
        on_navigate,
        location,
    );

    let desktop_links = config.links.iter().map(|link| {
        let intent = link.intent.clone();
        let label = i18n::tr(&link.label_key);
        rsx! {
            button {
                key: "{link.label_key}",
                r#type: "button",
                class: "navbar__link",
                onclick: move |_| run(intent.clone(), ControlSource::Desktop),
                "{label}"
            }
        }
    });

    let mobile_links = config.links.iter().map(|link| {
        let intent = link.intent.clone();
        let label = i18n::tr(&link.label_key);
        rsx! {
            li { key: "{link.label_key}",
                button {
                    r#type: "button",
                    class: "navbar__mobile-link",
                    onclick: move |_| run(intent.clone(), ControlSource::MobileMenu),
                    "{label}"
                }
            }
        }
    });

    let toggle_label = if menu_open {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        div {
            id: "navbar",
            class: nav_class,
            style: "{style}",
            onmounted: move |evt| root.set(Some(evt.data())),

            header { class: "navbar__header",
                nav { class: "navbar__inner", aria_label: t!("nav-primary-label"),
                    div { class: "navbar__brand",
                        {logo}
                        {cta}
                    }

                    div { class: "navbar__toggle",
                        button {
                            r#type: "button",
                            class: "navbar__menu-button",
                            aria_expanded: "{menu_open}",
                            aria_label: "{toggle_label}",
                            onclick: move |_| menu.with_mut(MenuState::toggle),
                            if menu_open { "✕" } else { "☰" }
                        }
                    }

                    div { class: "navbar__links", {desktop_links} }
                }

                if menu_open {
                    div { class: "navbar__mobile",
                        ul { class: "navbar__mobile-list", {mobile_links} }
                    }
                }
            }
        }
    }
}

fn scroll_to(fragment: &Fragment) {
    match platform::scroll_into_view(fragment) {
        ScrollRequest::Missing => debug!("no element for {fragment}, skipping scroll"),
        ScrollRequest::Scrolled | ScrollRequest::Delegated => {
            trace!(platform = ?Platform::current(), "scrolling to {fragment}")
        }
    }
}

fn route_link(
    to: String,
    class: &'static str,
    children: Element,
    on_navigate: EventHandler<String>,
    location: ReadOnlySignal<NavLocation>,
) -> Element {
    let link = match LINK_BUILDER.get() {
        Some(builder) => (builder.route_link)(&to, class, children),
        None => {
            let href = to.clone();
            let target = to.clone();
            rsx! {
                a {
                    class: "{class}",
                    href: "{href}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(target.clone());
                    },
                    {children}
                }
            }
        }
    };

    // Re-clicking a link to the current fragment must scroll again.
    rsx! {
        span {
            class: "navbar__link-slot",
            onclick: move |_| {
                if let Some(fragment) = revisit_target(&location.peek(), &to) {
                    scroll_to(&fragment);
                }
            },
            {link}
        }
    }
}
