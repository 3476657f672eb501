#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

use dioxus::logger::tracing::{trace, warn, Level};
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, NavBar};
use ui::core::anchor::NavLocation;
use ui::core::NavError;
use ui::views::{Gratitude, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/#:section", HomePage)]
    Home { section: String },
    #[route("/gratitude")]
    Gratitude {},
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Beacon – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
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

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_links(LinkBuilder { route_link });

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared `NavBar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
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
