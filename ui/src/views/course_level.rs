use dioxus::prelude::*;

use crate::core::{routes, Level, Locale};
use crate::gallery::GalleryView;
use crate::i18n;
use crate::t;

#[component]
pub fn CourseLevel(locale: String, level: String) -> Element {
    let page_locale = Locale::resolve(&locale);
    let title = i18n::level_title(page_locale, &Level::new(&level));
    let back = routes::listing_path(&locale);

    rsx! {
        section { class: "page page-level",
            header { class: "page-level__header",
                Link {
                    class: "page-level__back",
                    to: back,
                    span { aria_hidden: "true", "← " }
                    {t!(page_locale, "back-to-courses")}
                }
                h1 { "{title}" }
            }
            GalleryView { locale, level }
        }
    }
}
