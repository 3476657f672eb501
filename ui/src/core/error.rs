//! Error type shared by the navbar core.

/// Failures the navbar can run into. None of these reach the user: the
/// component logs them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("invalid fragment identifier: {0:?}")]
    InvalidFragment(String),
    #[error("no route matches {0:?}")]
    UnknownRoute(String),
    #[error("navbar config parsing error: {0}")]
    Config(#[from] serde_json::Error),
}
