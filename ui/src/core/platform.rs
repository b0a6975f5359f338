//! Platform glue: where static assets live on native targets.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::OnceCell;

#[cfg(not(target_arch = "wasm32"))]
static ASSET_ROOT: OnceCell<PathBuf> = OnceCell::new();

/// Register the directory that backs absolute asset URLs (`/images/...`).
///
/// Only the first registration wins; the desktop launcher calls this once at
/// startup with its resolved resource directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn register_asset_root(root: PathBuf) {
    let _ = ASSET_ROOT.set(root);
}

/// Registered asset root, or `./assets` when nothing was registered.
#[cfg(not(target_arch = "wasm32"))]
pub fn asset_root() -> &'static Path {
    ASSET_ROOT.get_or_init(|| PathBuf::from("assets"))
}
