//! Lightbox navigation state: which image is shown and how keys move it.

/// Full-screen viewer state.
///
/// Closed means no image list; when open, `index` is always a valid position
/// in the list and navigation wraps at both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    images: Option<Vec<String>>,
    index: usize,
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` name. Other keys are not bound.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" | "Esc" => Some(Self::Close),
            "ArrowLeft" | "Left" => Some(Self::Previous),
            "ArrowRight" | "Right" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Parts of the open overlay a click can land on. Stage and button clicks
/// stop propagating, so every click reaches exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    Backdrop,
    Stage,
    Close,
    Previous,
    Next,
}

impl Lightbox {
    /// Open on `images[start]`. An empty list or out-of-range start leaves
    /// the lightbox closed and returns `false`.
    pub fn open(&mut self, images: Vec<String>, start: usize) -> bool {
        if start >= images.len() {
            return false;
        }
        self.images = Some(images);
        self.index = start;
        true
    }

    pub fn close(&mut self) {
        self.images = None;
        self.index = 0;
    }

    pub fn prev(&mut self) {
        if let Some(len) = self.len() {
            self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
        }
    }

    pub fn next(&mut self) {
        if let Some(len) = self.len() {
            self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
        }
    }

    /// Apply a bound key. Does nothing while closed.
    pub fn apply(&mut self, key: LightboxKey) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::Close => self.close(),
            LightboxKey::Previous => self.prev(),
            LightboxKey::Next => self.next(),
        }
    }

    /// Route a `keydown` by its DOM key name. Returns whether the key was
    /// consumed; unbound keys and keys while closed are left alone.
    pub fn handle_key(&mut self, key_name: &str) -> bool {
        match LightboxKey::from_key_name(key_name) {
            Some(key) if self.is_open() => {
                self.apply(key);
                true
            }
            _ => false,
        }
    }

    /// Apply a click on `target`. Only the backdrop and the close button
    /// dismiss the viewer; the stage swallows clicks.
    pub fn click(&mut self, target: LightboxTarget) {
        match target {
            LightboxTarget::Backdrop | LightboxTarget::Close => self.close(),
            LightboxTarget::Stage => {}
            LightboxTarget::Previous => self.prev(),
            LightboxTarget::Next => self.next(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.images.is_some()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> Option<&[String]> {
        self.images.as_deref()
    }

    /// URL of the image on screen.
    pub fn current(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.get(self.index))
            .map(String::as_str)
    }

    /// 1-based position and total, for the `n / total` counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.len().map(|len| (self.index + 1, len))
    }

    fn len(&self) -> Option<usize> {
        self.images.as_ref().map(Vec::len)
    }
}
