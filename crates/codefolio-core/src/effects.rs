//! Cosmetic effects: link handling and the matrix overlay

use rand::Rng;
use serde::Serialize;
use url::Url;

pub const MATRIX_GLYPHS: usize = 100;

/// Where a clicked link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page `#anchor`
    Anchor(String),
    /// `http`/`https` URL
    External(Url),
    Other,
}

impl LinkTarget {
    pub fn classify(href: &str) -> Self {
        let href = href.trim();
        if let Some(anchor) = href.strip_prefix('#') {
            return LinkTarget::Anchor(anchor.to_string());
        }

        match Url::parse(href) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => LinkTarget::External(url),
            _ => LinkTarget::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixGlyph {
    pub glyph: char,
    /// Horizontal position, percent of the viewport width
    pub left: f32,
    /// Seconds to fall the full height
    pub fall_secs: f32,
}

/// Full-screen falling-characters overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRain {
    pub glyphs: Vec<MatrixGlyph>,
}

impl MatrixRain {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let glyphs = (0..MATRIX_GLYPHS)
            .map(|_| MatrixGlyph {
                glyph: char::from(rng.gen_range(0u8..128)),
                left: rng.gen_range(0.0..100.0),
                fall_secs: rng.gen_range(2.0..5.0),
            })
            .collect();

        Self { glyphs }
    }
}
