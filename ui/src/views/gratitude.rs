use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Gratitude() -> Element {
    rsx! {
        section { class: "page page-gratitude",
            h1 { {t!("gratitude-title")} }
            p { {t!("gratitude-intro")} }
        }
    }
}
