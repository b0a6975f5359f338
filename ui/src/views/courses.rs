use dioxus::prelude::*;

use crate::core::{routes, Level, Locale};
use crate::i18n;
use crate::t;

/// Course listing: one card per proficiency level, each opening its gallery.
#[component]
pub fn Courses(locale: String) -> Element {
    let page_locale = Locale::resolve(&locale);

    rsx! {
        section { class: "page page-courses",
            h1 { {t!(page_locale, "courses-title")} }
            p { {t!(page_locale, "courses-intro")} }

            ul { class: "course-list",
                for level in Level::known() {
                    li { key: "{level}", class: "course-list__item",
                        Link {
                            class: "course-list__link",
                            to: routes::level_path(page_locale, &level),
                            span { class: "course-list__badge", "{level}" }
                            span { class: "course-list__title", {i18n::level_title(page_locale, &level)} }
                        }
                    }
                }
            }

            p { class: "page-courses__exam",
                Link { class: "button button--ghost", to: routes::exam_info_path(page_locale),
                    {t!(page_locale, "nav-exam-info")}
                }
            }
        }
    }
}
