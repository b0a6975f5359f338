use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::{discover, platform_probe, DiscoveryState, ImageFolder, Lightbox, LightboxTarget};
use crate::core::{Level, Locale};
use crate::i18n;
use crate::t;

/// Thumbnail grid for one level plus its lightbox.
///
/// Discovery restarts whenever the locale or level props change; state from a
/// previous level is never shown for the new one.
#[component]
pub fn GalleryView(locale: String, level: String) -> Element {
    let mut discovery = use_signal(DiscoveryState::default);
    let mut lightbox = use_signal(Lightbox::default);

    use_effect(use_reactive((&locale, &level), move |(locale, level)| {
        let folder = ImageFolder::new(&locale, &level);
        let token = discovery.with_mut(DiscoveryState::begin);
        lightbox.with_mut(Lightbox::close);
        debug!(
            folder = %folder.path(),
            generation = token.generation(),
            "starting image discovery"
        );

        spawn(async move {
            let images = discover(&platform_probe(), &folder).await;
            let mut discovery = discovery;
            discovery.with_mut(|state| state.finish(token, images));
        });
    }));

    let page_locale = Locale::resolve(&locale);
    let title = i18n::level_title(page_locale, &Level::new(&level));
    let state = discovery();

    let body = if state.is_loading() {
        rsx! {
            div { class: "gallery__status",
                div { class: "gallery__spinner", aria_hidden: "true" }
                p { {t!(page_locale, "gallery-loading")} }
            }
        }
    } else if state.images().is_empty() {
        rsx! {
            div { class: "gallery__status",
                p { class: "gallery__empty", {t!(page_locale, "gallery-empty")} }
            }
        }
    } else {
        let images = state.images().to_vec();
        rsx! {
            div { class: "gallery__grid",
                for (index, src) in images.iter().enumerate() {
                    {render_thumb(page_locale, &title, &images, index, src, lightbox)}
                }
            }
        }
    };

    rsx! {
        {body}
        LightboxOverlay { lightbox, locale: page_locale, title }
    }
}

fn render_thumb(
    locale: Locale,
    title: &str,
    images: &[String],
    index: usize,
    src: &str,
    mut lightbox: Signal<Lightbox>,
) -> Element {
    let number = index + 1;
    let alt = t!(locale, "gallery-image-alt", title = title, number = number);
    let images = images.to_vec();

    rsx! {
        button {
            key: "{src}",
            r#type: "button",
            class: "gallery__thumb",
            onclick: move |_| {
                let opened = lightbox.with_mut(|lb| lb.open(images.clone(), index));
                debug!(index, opened, "lightbox open requested");
            },
            img { class: "gallery__image", src: "{src}", alt: "{alt}" }
        }
    }
}

/// Overlay shown while the lightbox is open.
///
/// The overlay owns the keyboard bindings: it only exists while the lightbox
/// is open and grabs focus on mount, so keys stop being handled as soon as it
/// closes or the page unmounts.
#[component]
fn LightboxOverlay(lightbox: Signal<Lightbox>, locale: Locale, title: String) -> Element {
    let mut lightbox = lightbox;
    let snapshot = lightbox();
    let (Some(src), Some((number, total))) = (
        snapshot.current().map(str::to_string),
        snapshot.position(),
    ) else {
        return rsx! {};
    };

    let alt = t!(locale, "gallery-image-alt", title = title.as_str(), number = number);
    let counter = t!(locale, "lightbox-counter", current = number, total = total);

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            tabindex: 0,
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.data().set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string();
                if lightbox.with_mut(|lb| lb.handle_key(&key)) {
                    evt.prevent_default();
                }
            },

            // Clicking the dimmed background closes.
            div {
                class: "lightbox__backdrop",
                onclick: move |_| lightbox.with_mut(|lb| lb.click(LightboxTarget::Backdrop)),
            }

            button {
                r#type: "button",
                class: "lightbox__close",
                aria_label: t!(locale, "lightbox-close"),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    lightbox.with_mut(|lb| lb.click(LightboxTarget::Close));
                },
                "×"
            }
            button {
                r#type: "button",
                class: "lightbox__nav lightbox__nav--prev",
                aria_label: t!(locale, "lightbox-previous"),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    lightbox.with_mut(|lb| lb.click(LightboxTarget::Previous));
                },
                "‹"
            }
            button {
                r#type: "button",
                class: "lightbox__nav lightbox__nav--next",
                aria_label: t!(locale, "lightbox-next"),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    lightbox.with_mut(|lb| lb.click(LightboxTarget::Next));
                },
                "›"
            }

            div {
                class: "lightbox__stage",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    lightbox.with_mut(|lb| lb.click(LightboxTarget::Stage));
                },
                img { class: "lightbox__image", src: "{src}", alt: "{alt}" }
                if total > 1 {
                    div { class: "lightbox__counter", "{counter}" }
                }
            }
        }
    }
}
