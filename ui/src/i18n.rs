//! Internationalization (i18n) support for `courseview-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/courseview-ui.ftl        (fallback/reference)
//!   zh-Hant/courseview-ui.ftl
//!   zh-Hans/courseview-ui.ftl
//! ```
//!
//! Unlike a single app-wide language, every page is addressed by a locale path
//! segment, so one loader is kept per supported [`Locale`] and lookups name the
//! locale explicitly:
//! ```ignore
//! use crate::t;
//! let back = t!(locale, "back-to-courses");
//! let counter = t!(locale, "lightbox-counter", current = 2, total = 5);
//! ```
//!
//! Messages missing from a locale fall back to `en`.
//!
//! Platform notes:
//! - Desktop: `DesktopLanguageRequester` (OS locale list) feeds [`preferred_locale`].
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` feature in the target-specific section).
//!
//! NOTE: The hyphenated filename `courseview-ui.ftl` is canonical across all locales.
use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::{Level, Locale};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(locale, "nav-courses")
///     t!(locale, "gallery-image-alt", title = title, number = 3)
///
/// This expands to `fl!(loader(locale), ...)` so keys stay compile-time checked
/// against the fallback `.ftl`.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "courseview-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// One loader per supported locale, indexed by [`Locale::index`].
static LOADERS: Lazy<[FluentLanguageLoader; 3]> = Lazy::new(|| Locale::ALL.map(build_loader));

fn fallback_language() -> LanguageIdentifier {
    Locale::DEFAULT.language_id()
}

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    match i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        Ok(selected) => debug!(locale = %locale, ?selected, "loaded localization bundle"),
        Err(err) => warn!(locale = %locale, %err, "failed selecting languages; continuing with fallback"),
    }
    // Only reaches bundles that are already loaded, so it must follow `select`.
    // Plain text in alt attributes and counters, no bidi isolation marks.
    loader.set_use_isolating(false);
    loader
}

/// Loader for `locale` (used by the [`t!`] macro).
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    &LOADERS[locale.index()]
}

/// Runtime lookup for message ids that are only known at runtime
/// (schedule rows, level titles). Returns `None` when no bundle has the id.
pub fn lookup(locale: Locale, key: &str) -> Option<String> {
    let loader = loader(locale);
    loader.has(key).then(|| loader.get(key))
}

/// Localized level title (`B1 - Intermediate Level`), or the raw level when
/// no title exists.
pub fn level_title(locale: Locale, level: &Level) -> String {
    lookup(locale, &level.title_key()).unwrap_or_else(|| level.as_str().to_string())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// First supported locale in the user's OS/browser preference list.
pub fn preferred_locale() -> Locale {
    requested_languages()
        .iter()
        .find_map(Locale::from_language_id)
        .unwrap_or(Locale::DEFAULT)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_locale_is_embedded() {
        let langs = available_languages();
        for locale in Locale::ALL {
            assert!(
                langs.iter().any(|l| l == locale.tag()),
                "missing i18n/{} folder",
                locale.tag()
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(t!(Locale::En, "back-to-courses"), "Back to Courses");
        assert_eq!(t!(Locale::ZhHant, "back-to-courses"), "返回課程");
        assert_eq!(t!(Locale::ZhHans, "back-to-courses"), "返回课程");
    }

    #[test]
    fn unsupported_locale_reads_english_table() {
        let locale = Locale::resolve("fr");
        assert_eq!(t!(locale, "nav-courses"), t!(Locale::En, "nav-courses"));
    }

    #[test]
    fn level_title_translates_known_levels() {
        assert_eq!(
            level_title(Locale::En, &Level::new("b1")),
            "B1 - Intermediate Level"
        );
        assert_eq!(level_title(Locale::ZhHans, &Level::new("A0")), "A0 - 零基础");
    }

    #[test]
    fn level_title_falls_back_to_raw_level() {
        assert_eq!(level_title(Locale::ZhHant, &Level::new("x9")), "X9");
    }

    #[test]
    fn formatted_messages_carry_no_isolation_marks() {
        for locale in Locale::ALL {
            let alt = t!(locale, "gallery-image-alt", title = "B1", number = 2);
            assert!(
                !alt.contains(['\u{2068}', '\u{2069}']),
                "{locale}: {alt:?}"
            );
        }
    }

    #[test]
    fn arguments_are_interpolated() {
        let counter = t!(Locale::En, "lightbox-counter", current = 2, total = 5);
        assert_eq!(counter, "2 / 5");
        assert_eq!(
            t!(Locale::ZhHant, "gallery-image-alt", title = "A1", number = 3),
            "A1 圖片 3"
        );
    }
}
