use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::{CourseLevel, Courses, ExamInfo, PageNotFound, Root};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Root {},
    #[route("/:locale/courses")]
    Courses { locale: String },
    #[route("/:locale/courses/:level")]
    CourseLevel { locale: String, level: String },
    #[route("/:locale/exam-info")]
    ExamInfo { locale: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

// Shared theme (ui/assets/theme/main.css), inlined so web and desktop render the same.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component, which only
/// needs the current path rather than the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar { path: route.to_string() }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}
