//! Image existence probes.
//!
//! A probe answers one question per URL: does it load as an image? Network
//! errors, missing files and undecodable data all answer `false`.

use futures::future::LocalBoxFuture;

/// Checks whether an image URL resolves.
///
/// Futures are local (`!Send`): probes run on the UI thread's executor.
pub trait ImageProbe {
    fn probe(&self, url: &str) -> LocalBoxFuture<'static, bool>;
}

/// A callback host that can unregister its handlers.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
trait Detach {
    fn detach(&self);
}

/// Handlers registered on `target`, kept alive for as long as the target can
/// call them. Dropping detaches the target first and only then frees the
/// handlers, so a cancelled probe never leaves dangling callbacks behind.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct Attached<T: Detach, H> {
    target: T,
    handlers: H,
}

impl<T: Detach, H> Drop for Attached<T, H> {
    fn drop(&mut self) {
        self.target.detach();
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::HtmlImageProbe;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{FileProbe, ProbeError};

/// Probe for the current platform: the browser's image loader on the web,
/// the registered asset directory on native targets.
#[cfg(target_arch = "wasm32")]
pub fn platform_probe() -> HtmlImageProbe {
    HtmlImageProbe
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_probe() -> FileProbe {
    FileProbe::new(crate::core::platform::asset_root())
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::logger::tracing::debug;
    use futures::future::LocalBoxFuture;
    use futures::FutureExt;
    use futures_channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlImageElement;

    use super::{Attached, Detach, ImageProbe};

    impl Detach for HtmlImageElement {
        fn detach(&self) {
            self.set_onload(None);
            self.set_onerror(None);
            // Abort any in-flight fetch.
            self.set_src("");
        }
    }

    /// Loads each URL into a detached `<img>` and waits for `load` / `error`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct HtmlImageProbe;

    impl ImageProbe for HtmlImageProbe {
        fn probe(&self, url: &str) -> LocalBoxFuture<'static, bool> {
            let url = url.to_string();
            async move { load_image(&url).await }.boxed_local()
        }
    }

    async fn load_image(url: &str) -> bool {
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(err) => {
                debug!(?err, "could not create image element");
                return false;
            }
        };

        let (tx, rx) = oneshot::channel::<bool>();
        let sender = Rc::new(RefCell::new(Some(tx)));

        let settle = |loaded: bool| {
            let sender = sender.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(loaded);
                }
            })
        };
        let pending = Attached {
            target: img,
            handlers: (settle(true), settle(false)),
        };
        let (on_load, on_error) = &pending.handlers;
        pending.target.set_onload(Some(on_load.as_ref().unchecked_ref()));
        pending.target.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        pending.target.set_src(url);

        // If the gallery goes away mid-load this future is dropped here and
        // `pending` detaches the element before the closures are freed.
        let loaded = rx.await.unwrap_or(false);
        drop(pending);

        debug!(url, loaded, "image probe settled");
        loaded
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Component, Path, PathBuf};

    use dioxus::logger::tracing::debug;
    use futures::future::LocalBoxFuture;
    use futures::FutureExt;
    use image::ImageReader;
    use thiserror::Error;

    use super::ImageProbe;

    #[derive(Debug, Error)]
    pub enum ProbeError {
        #[error("asset url `{0}` does not map to a file under the asset root")]
        OutsideRoot(String),
        #[error("failed reading {}: {source}", .path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("{} is not a decodable image: {source}", .path.display())]
        Decode {
            path: PathBuf,
            #[source]
            source: image::ImageError,
        },
        #[error("probe task for {} did not complete: {source}", .path.display())]
        Task {
            path: PathBuf,
            #[source]
            source: tokio::task::JoinError,
        },
    }

    /// Resolves absolute asset URLs (`/images/...`) against a directory and
    /// checks that the file decodes as an image.
    #[derive(Debug, Clone)]
    pub struct FileProbe {
        root: PathBuf,
    }

    impl FileProbe {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        /// Map `url` onto the asset root. Only plain relative segments are
        /// accepted, so `..` cannot escape the root.
        pub fn resolve(&self, url: &str) -> Result<PathBuf, ProbeError> {
            let relative = Path::new(url.trim_start_matches('/'));
            let plain = relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
            if !plain || relative.as_os_str().is_empty() {
                return Err(ProbeError::OutsideRoot(url.to_string()));
            }
            Ok(self.root.join(relative))
        }

        /// Decode the header of the file behind `url` and return the image
        /// dimensions. Only the header is read, on the blocking pool.
        pub async fn check(&self, url: &str) -> Result<(u32, u32), ProbeError> {
            let path = self.resolve(url)?;
            let task_path = path.clone();
            tokio::task::spawn_blocking(move || read_dimensions(task_path))
                .await
                .map_err(|source| ProbeError::Task { path, source })?
        }
    }

    fn read_dimensions(path: PathBuf) -> Result<(u32, u32), ProbeError> {
        let reader = ImageReader::open(&path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|source| ProbeError::Io {
                path: path.clone(),
                source,
            })?;
        reader
            .into_dimensions()
            .map_err(|source| ProbeError::Decode { path, source })
    }

    impl ImageProbe for FileProbe {
        fn probe(&self, url: &str) -> LocalBoxFuture<'static, bool> {
            let probe = self.clone();
            let url = url.to_string();
            async move {
                match probe.check(&url).await {
                    Ok((width, height)) => {
                        debug!(url = %url, width, height, "image probe resolved");
                        true
                    }
                    Err(err) => {
                        debug!(url = %url, %err, "image probe failed");
                        false
                    }
                }
            }
            .boxed_local()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::gallery::{discover, ImageFolder};

        fn runtime() -> tokio::runtime::Runtime {
            tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("current-thread runtime")
        }

        /// Encodes a tiny image; the format follows the file extension.
        fn write_image(path: &Path) {
            image::RgbImage::new(2, 2).save(path).expect("encode test image");
        }

        #[test]
        fn resolve_rejects_escaping_urls() {
            let probe = FileProbe::new("/srv/site");
            assert_eq!(
                probe.resolve("/images/courses/A1P/1.png").unwrap(),
                PathBuf::from("/srv/site/images/courses/A1P/1.png")
            );
            assert!(matches!(
                probe.resolve("/images/../secret.png"),
                Err(ProbeError::OutsideRoot(_))
            ));
            assert!(matches!(probe.resolve("/"), Err(ProbeError::OutsideRoot(_))));
        }

        #[test]
        fn discovers_existing_decodable_files_in_candidate_order() {
            let dir = tempfile::tempdir().expect("temp dir");
            let folder_dir = dir.path().join("images/courses/B1G");
            std::fs::create_dir_all(&folder_dir).expect("create folder");

            write_image(&folder_dir.join("2.jpg"));
            write_image(&folder_dir.join("1.png"));
            // Present but not an image.
            std::fs::write(folder_dir.join("3.png"), b"not an image").expect("write junk");

            let probe = FileProbe::new(dir.path());
            let folder = ImageFolder::new("zh-Hans", "b1");
            let found = runtime().block_on(discover(&probe, &folder));

            assert_eq!(
                found,
                vec![
                    "/images/courses/B1G/1.png".to_string(),
                    "/images/courses/B1G/2.jpg".to_string(),
                ]
            );
        }

        #[test]
        fn undecodable_file_is_a_decode_error() {
            let dir = tempfile::tempdir().expect("temp dir");
            std::fs::write(dir.path().join("broken.png"), b"\x89PNG but not really")
                .expect("write junk");

            let probe = FileProbe::new(dir.path());
            let err = runtime()
                .block_on(probe.check("/broken.png"))
                .expect_err("junk must not decode");
            assert!(matches!(err, ProbeError::Decode { .. }));
        }

        #[test]
        fn dimensions_come_from_the_header() {
            let dir = tempfile::tempdir().expect("temp dir");
            image::RgbImage::new(5, 3)
                .save(dir.path().join("wide.jpg"))
                .expect("encode test image");

            let probe = FileProbe::new(dir.path());
            let dims = runtime().block_on(probe.check("/wide.jpg")).expect("decodes");
            assert_eq!(dims, (5, 3));
        }

        #[test]
        fn missing_file_is_an_io_error() {
            let dir = tempfile::tempdir().expect("temp dir");
            let probe = FileProbe::new(dir.path());
            let err = runtime()
                .block_on(probe.check("/images/courses/A0P/1.png"))
                .expect_err("nothing there");
            assert!(matches!(err, ProbeError::Io { .. }));
        }
    }
}
