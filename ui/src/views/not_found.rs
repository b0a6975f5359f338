use dioxus::prelude::*;

use crate::core::{routes, Locale};
use crate::t;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let page_locale = segments
        .first()
        .and_then(|tag| Locale::parse(tag))
        .unwrap_or(Locale::DEFAULT);
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!(page_locale, "not-found-title")} }
            p { class: "page-not-found__path", code { "{path}" } }
            Link { class: "button button--primary", to: routes::courses_path(page_locale),
                {t!(page_locale, "back-to-courses")}
            }
        }
    }
}
