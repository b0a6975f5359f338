//! Candidate construction and concurrent probing of course images.
//!
//! A level's slides live under `/images/courses/{LEVEL}{VARIANT}/` and are
//! numbered, but the folder contents are not listed anywhere, so the gallery
//! probes a fixed candidate set and keeps whatever resolves:
//!
//! - `1.png` … `3.png`, then
//! - `1.jpg` … `8.jpg` (always probed, whatever the png results).
//!
//! Probes run concurrently and are joined before anything is published; the
//! result keeps candidate order, never completion order.

use std::ops::RangeInclusive;

use dioxus::logger::tracing::debug;
use futures::future::join_all;

use super::probe::ImageProbe;
use crate::core::{Level, Variant};

/// URL prefix of all course image folders.
pub const IMAGE_BASE: &str = "/images/courses";

/// Png indices probed for every folder.
pub const PNG_INDICES: RangeInclusive<u8> = 1..=3;

/// Jpg indices probed for every folder.
pub const JPG_INDICES: RangeInclusive<u8> = 1..=8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

/// An unverified image location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub format: ImageFormat,
    pub index: u8,
    pub url: String,
}

/// Folder holding one level's slides for one script variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFolder {
    level: Level,
    variant: Variant,
}

impl ImageFolder {
    /// Folder for a page addressed by raw route segments. The variant comes
    /// from the raw locale tag, so unsupported locales use the default set.
    pub fn new(locale_tag: &str, level: &str) -> Self {
        Self {
            level: Level::new(level),
            variant: Variant::for_tag(locale_tag),
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// `/images/courses/B1G`
    pub fn path(&self) -> String {
        format!("{IMAGE_BASE}/{}{}", self.level, self.variant)
    }

    /// Every candidate in probe order: pngs first, then jpgs, ascending.
    pub fn candidates(&self) -> Vec<Candidate> {
        let base = self.path();
        let pngs = PNG_INDICES.map(|index| (ImageFormat::Png, index));
        let jpgs = JPG_INDICES.map(|index| (ImageFormat::Jpg, index));

        pngs.chain(jpgs)
            .map(|(format, index)| Candidate {
                format,
                index,
                url: format!("{base}/{index}.{}", format.extension()),
            })
            .collect()
    }
}

/// Probe every candidate of `folder` concurrently and return the URLs that
/// resolved, in candidate order. Failed probes are dropped silently.
pub async fn discover<P: ImageProbe + ?Sized>(probe: &P, folder: &ImageFolder) -> Vec<String> {
    let candidates = folder.candidates();
    let outcomes = join_all(candidates.iter().map(|candidate| probe.probe(&candidate.url))).await;

    let images: Vec<String> = candidates
        .into_iter()
        .zip(outcomes)
        .filter_map(|(candidate, found)| found.then_some(candidate.url))
        .collect();

    debug!(folder = %folder.path(), found = images.len(), "image discovery settled");
    images
}

/// Identifies one discovery run; results carrying an older token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryToken(u64);

impl DiscoveryToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Gallery-owned discovery state.
///
/// `loading` is true from [`DiscoveryState::begin`] until the matching
/// [`DiscoveryState::finish`]; results from superseded runs never touch the
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryState {
    generation: u64,
    loading: bool,
    images: Vec<String>,
}

impl Default for DiscoveryState {
    fn default() -> Self {
        Self {
            generation: 0,
            loading: true,
            images: Vec::new(),
        }
    }
}

impl DiscoveryState {
    /// Start a new run, invalidating any run still in flight.
    pub fn begin(&mut self) -> DiscoveryToken {
        self.generation += 1;
        self.loading = true;
        self.images.clear();
        DiscoveryToken(self.generation)
    }

    /// Publish the result of a run. Returns `false` (and changes nothing)
    /// when the run was superseded or already finished.
    pub fn finish(&mut self, token: DiscoveryToken, images: Vec<String>) -> bool {
        if token.0 != self.generation || !self.loading {
            debug!(
                stale = token.0,
                current = self.generation,
                "discarding superseded discovery result"
            );
            return false;
        }
        self.images = images;
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
