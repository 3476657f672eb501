//! Platform-agnostic navbar logic. Nothing in here touches the DOM except `platform`.

pub mod anchor;
pub mod config;
pub mod error;
pub mod menu;
pub mod motion;
pub mod platform;
pub mod scroll;

pub use error::NavError;
