//! Core, platform-agnostic building blocks shared by the views.

pub mod format;
pub mod level;
pub mod locale;
pub mod platform;
pub mod routes;

pub use level::Level;
pub use locale::{Locale, Variant};
