//! Reactive sources the navbar subscribes to.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::platform::SCROLL_LISTENER_JS;

/// Current vertical scroll offset of the window, in whole pixels.
///
/// Starts at `0` and only notifies subscribers when the value actually changes.
pub fn use_window_scroll() -> ReadOnlySignal<i64> {
    let mut offset = use_signal(|| 0_i64);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        loop {
            match listener.recv::<i64>().await {
                Ok(y) => {
                    if *offset.peek() != y {
                        offset.set(y);
                    }
                }
                Err(err) => {
                    warn!("scroll listener stopped: {err}");
                    break;
                }
            }
        }
    });

    offset.into()
}
