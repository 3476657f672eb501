//! Shared UI crate for Beacon: the site navbar, its pure policy core and the
//! pages it navigates between.

pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components {
    // Scroll-aware site navbar (components/nav_bar.rs)
    pub mod nav_bar;
    pub use nav_bar::register_links;
    pub use nav_bar::LinkBuilder;
    pub use nav_bar::NavBar;
}


/// Shared theme, inlined by every platform shell.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
