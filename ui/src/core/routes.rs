//! Site path conventions. Platform crates map these onto their `Route` enums;
//! views link with plain path strings so `ui` stays router-agnostic.

use super::{Level, Locale};

pub fn courses_path(locale: Locale) -> String {
    listing_path(locale.tag())
}

/// Course listing under a raw locale segment, kept as typed in the URL.
/// Unsupported tags still render English on the listing page.
pub fn listing_path(locale_tag: &str) -> String {
    format!("/{locale_tag}/courses")
}

pub fn level_path(locale: Locale, level: &Level) -> String {
    format!("/{}/courses/{}", locale.tag(), level.as_str())
}

pub fn exam_info_path(locale: Locale) -> String {
    format!("/{}/exam-info", locale.tag())
}

/// Contact page of the main site (not served by this app).
pub fn contact_path(locale: Locale) -> String {
    format!("/{}/contact", locale.tag())
}

/// First path segment, when it names a supported locale.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Locale::parse)
}

/// Same page under another locale. Paths without a locale segment go to the
/// course listing of `target`.
pub fn swap_locale(path: &str, target: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((_, rest)) if locale_from_path(path).is_some() => {
            format!("/{}/{rest}", target.tag())
        }
        _ => courses_path(target),
    }
}
