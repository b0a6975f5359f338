use crate::core::{routes, Locale};
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

// Navbar stylesheet (linked as an asset, and inlined in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header shared by every platform.
///
/// Platforms render it from their layout route and pass the current path
/// (`Route::to_string()`), so `ui` never needs to know a platform's `Route`
/// enum. The page locale is the first path segment; unsupported segments show
/// the default locale.
///
/// The locale switcher navigates to the same page under the chosen locale,
/// which re-renders every view with that locale's strings.
#[component]
pub fn AppNavbar(path: String) -> Element {
    let locale = routes::locale_from_path(&path).unwrap_or(Locale::DEFAULT);
    let router_nav = navigator();

    #[cfg(debug_assertions)]
    debug!(%locale, %path, "AppNavbar render");

    let switch_from = path.clone();
    let on_change = move |evt: FormEvent| {
        let Some(target) = Locale::parse(&evt.value()) else {
            return;
        };
        let next = routes::swap_locale(&switch_from, target);
        debug!(from = %switch_from, to = %next, "switching locale");
        let _ = router_nav.push(next);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    Link { class: "navbar__brand-link", to: routes::courses_path(locale),
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!(locale, "brand-name")} }
                    }
                    span { class: "navbar__brand-subtitle", {t!(locale, "tagline")} }
                }

                nav { class: "navbar__links",
                    Link { class: "navbar__link", to: routes::courses_path(locale),
                        {t!(locale, "nav-courses")}
                    }
                    Link { class: "navbar__link", to: routes::exam_info_path(locale),
                        {t!(locale, "nav-exam-info")}
                    }
                }

                // Locale switcher
                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!(locale, "nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{locale.tag()}",
                        oninput: on_change,
                        for choice in Locale::ALL {
                            option {
                                key: "{choice.tag()}",
                                value: "{choice.tag()}",
                                selected: choice == locale,
                                "{choice.native_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
