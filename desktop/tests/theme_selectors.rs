#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the selectors the shared views render (gallery grid, lightbox, exam
page, course list) remain present in `ui/assets/theme/main.css`, so a refactor
that drops or renames a class fails here instead of in a packaged build.

A substring presence check is enough as an early warning. When you rename or
remove a selector, update the component markup and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Course listing
    ".course-list",
    ".course-list__link",
    ".course-list__badge",
    // Level page + gallery
    ".page-level__back",
    ".gallery__status",
    ".gallery__spinner",
    ".gallery__grid",
    ".gallery__thumb",
    ".gallery__image",
    // Lightbox
    ".lightbox {",
    ".lightbox__backdrop",
    ".lightbox__close",
    ".lightbox__nav--prev",
    ".lightbox__nav--next",
    ".lightbox__stage",
    ".lightbox__image",
    ".lightbox__counter",
    // Exam page
    ".exam-hero",
    ".exam-section__heading",
    ".exam-schedule__table",
    ".exam-card",
    ".exam-contacts",
    ".exam-actions",
    ".numbered-list__number",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_500,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn lightbox_navigation_buttons_share_a_base_rule() {
    let has_base = THEME_CSS.contains(".lightbox__nav {");
    let has_hover = THEME_CSS.contains(".lightbox__nav:hover");
    assert!(
        has_base && has_hover,
        "Lightbox nav rules missing (base: {has_base}, hover: {has_hover})"
    );
}
