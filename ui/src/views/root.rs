use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::core::routes;
use crate::i18n;

/// `/`: send visitors to the course listing in their preferred locale.
#[component]
pub fn Root() -> Element {
    let nav = navigator();

    use_effect(move || {
        let locale = i18n::preferred_locale();
        info!(%locale, "redirecting to course listing");
        let _ = nav.replace(routes::courses_path(locale));
    });

    rsx! {}
}
