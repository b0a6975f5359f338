//! Shared UI crate for the course site. Localization, gallery logic and page views live here.

pub mod content;
pub mod core;
pub mod gallery;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized site navbar with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
