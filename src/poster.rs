//! Poster images and the one-time fallback applied when one fails to load.
//!
//! The terminal cannot draw bitmaps, so "loading" a poster means handing its
//! URI to whatever the platform uses to show images (see [`SystemViewer`]).
//! Every failure cause is treated the same way: the poster swaps to a fixed
//! placeholder once, and never again.

use std::io;

use log::{debug, warn};
use thiserror::Error;

/// Dimensions, colours and label encoded into the placeholder URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub foreground: String,
    pub label: String,
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self {
            width: 300,
            height: 450,
            background: "333".to_string(),
            foreground: "FFF".to_string(),
            label: "Not Found".to_string(),
        }
    }
}

/// Build the placeholder image URI, e.g.
/// `https://placehold.co/300x450/333/FFF?text=Not+Found`.
pub fn placeholder_uri(spec: &PlaceholderSpec) -> String {
    format!(
        "https://placehold.co/{}x{}/{}/{}?text={}",
        spec.width,
        spec.height,
        spec.background,
        spec.foreground,
        spec.label.trim().replace(' ', "+")
    )
}

/// Why a poster could not be shown. Callers do not branch on the variant; it
/// only ends up in the log.
#[derive(Debug, Error)]
pub enum PosterError {
    #[error("poster has no URI")]
    EmptyUri,
    #[error("failed to hand {uri} to the image viewer")]
    Launch {
        uri: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can try to display an image by URI.
pub trait PosterLoader {
    fn load(&mut self, uri: &str) -> Result<(), PosterError>;
}

/// Opens posters with the operating system's default handler.
#[derive(Debug, Default)]
pub struct SystemViewer;

impl PosterLoader for SystemViewer {
    fn load(&mut self, uri: &str) -> Result<(), PosterError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(PosterError::EmptyUri);
        }
        open::that(uri).map_err(|source| PosterError::Launch {
            uri: uri.to_string(),
            source,
        })
    }
}

/// Lifecycle of a poster's fallback guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterStatus {
    /// Showing the original URI, never loaded.
    Pending,
    /// The original URI loaded.
    Loaded,
    /// The original failed and the placeholder was substituted. The failure
    /// handler is now disabled.
    FailedOnce,
    /// The placeholder's own outcome is known. Nothing changes any more.
    Settled,
}

/// Poster state for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    source: String,
    placeholder: String,
    status: PosterStatus,
    substitutions: u8,
}

impl Poster {
    pub fn new(uri: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            source: uri.into(),
            placeholder: placeholder.into(),
            status: PosterStatus::Pending,
            substitutions: 0,
        }
    }

    /// URI currently shown by the card.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn status(&self) -> PosterStatus {
        self.status
    }

    pub fn is_placeholder(&self) -> bool {
        self.substitutions > 0
    }

    /// How many times the placeholder was swapped in. Never exceeds one.
    pub fn substitutions(&self) -> u8 {
        self.substitutions
    }

    pub fn mark_loaded(&mut self) {
        self.status = match self.status {
            PosterStatus::Pending | PosterStatus::Loaded => PosterStatus::Loaded,
            PosterStatus::FailedOnce | PosterStatus::Settled => PosterStatus::Settled,
        };
    }

    /// React to a load failure. Returns `true` only for the call that swapped
    /// in the placeholder.
    pub fn mark_failed(&mut self) -> bool {
        match self.status {
            PosterStatus::Pending | PosterStatus::Loaded => {
                self.source = self.placeholder.clone();
                self.substitutions += 1;
                self.status = PosterStatus::FailedOnce;
                true
            }
            PosterStatus::FailedOnce | PosterStatus::Settled => {
                self.status = PosterStatus::Settled;
                false
            }
        }
    }

    /// Ask `loader` to show the current source and fold the outcome into the
    /// fallback guard. Failures are absorbed here and only logged.
    pub fn load_with(&mut self, loader: &mut dyn PosterLoader) -> PosterStatus {
        debug!("loading poster {}", self.source);
        match loader.load(&self.source) {
            Ok(()) => self.mark_loaded(),
            Err(err) => {
                if self.mark_failed() {
                    warn!("poster failed ({err}); substituted placeholder");
                } else {
                    warn!("placeholder poster failed ({err}); giving up");
                }
            }
        }
        self.status
    }
}
