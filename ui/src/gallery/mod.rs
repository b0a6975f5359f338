//! Course image gallery: candidate discovery, probing and the lightbox viewer.

pub mod discovery;
pub mod lightbox;
pub mod probe;
pub mod view;

pub use discovery::{discover, Candidate, DiscoveryState, DiscoveryToken, ImageFolder, ImageFormat};
pub use lightbox::{Lightbox, LightboxKey, LightboxTarget};
pub use probe::{platform_probe, ImageProbe};
pub use view::GalleryView;
