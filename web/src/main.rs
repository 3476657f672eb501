use dioxus::logger::tracing::{trace, warn, Level};
use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, NavBar};
use ui::core::anchor::NavLocation;
use ui::core::NavError;
use ui::views::{Gratitude, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/#:section", HomePage)]
    Home { section: String },
    #[route("/gratitude")]
    Gratitude {},
}

fn route_link(to: &str, class: &'static str, children: Element) -> Element {
    match to.parse::<Route>() {
        Ok(route) => rsx!(Link { class: "{class}", to: route, {children} }),
        Err(err) => {
            warn!("{}: {err}", NavError::UnknownRoute(to.to_string()));
            rsx!({children})
        }
    }
}

fn navigate_to(target: &str) {
    match target.parse::<Route>() {
        Ok(route) => {
            if let Some(failure) = navigator().push(route) {
                warn!(?failure, "navigation to {target} failed");
            }
        }
        Err(err) => warn!("{}: {err}", NavError::UnknownRoute(target.to_string())),
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Logo and call-to-action render as router links for our Route enum
        register_links(LinkBuilder { route_link });
    }

    rsx! {
        // Global app resources
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `NavBar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();
    let location = NavLocation::parse(&route.to_string());

    rsx! {
        NavBar {
            location,
            on_navigate: move |target: String| navigate_to(&target),
        }
        Outlet::<Route> {}
    }
}

#[component]
fn HomePage(section: String) -> Element {
    trace!(%section, "home page rendered");
    rsx! { Home {} }
}
