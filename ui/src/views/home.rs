use dioxus::prelude::*;

use crate::t;

/// Landing page. Its sections are the targets of the navbar's anchor links.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { class: "page-home__intro", {t!("home-intro")} }

            section { id: "about", class: "page-section",
                h2 { {t!("section-about-title")} }
                p { {t!("section-about-body")} }
            }
            section { id: "events", class: "page-section",
                h2 { {t!("section-events-title")} }
                p { {t!("section-events-body")} }
            }
            section { id: "announcements", class: "page-section",
                h2 { {t!("section-announcements-title")} }
                p { {t!("section-announcements-body")} }
            }
        }
    }
}
