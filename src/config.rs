//! Cover configuration.
//!
//! Defines the value objects the renderer consumes: [`Settings`] for the
//! book's visual geometry and animation timing, and [`CoverRequest`] which
//! pairs settings with the presentation fields (image source, alt text,
//! optional link target).
//!
//! Both structs resolve missing fields to the documented defaults, whether
//! they are built through their `derive_builder` builders or deserialized
//! from a partial TOML table. Nothing here validates anything: nonsensical
//! values (negative widths, malformed colours) are carried through to the
//! stylesheet untouched.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Visual geometry and animation timing for one book cover.
///
/// All lengths are in pixels, rotations in degrees, and durations in
/// seconds. Values are substituted into the generated stylesheet verbatim.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct Settings {
    /// Resting rotation of the book, in degrees.
    pub rotate: f64,
    /// Rotation of the book while hovered, in degrees.
    pub rotate_hover: f64,
    /// Scene perspective distance, in pixels. 600 reads as realistic.
    pub perspective: f64,
    /// Duration of the hover transition, in seconds.
    pub transition_duration: f64,
    /// Radius of the right-hand corners, in pixels.
    pub radius: f64,
    /// Book thickness, in pixels.
    pub thickness: f64,
    /// Colour of the cover boards, any CSS colour syntax.
    pub bg_color: String,
    /// Width of the book, in pixels.
    pub width: f64,
    /// Height of the book, in pixels.
    pub height: f64,
    /// Inset between the page block and the cover edge, in pixels.
    /// Should be less than half the height.
    pub pages_offset: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotate: 30.0,
            rotate_hover: 5.0,
            perspective: 600.0,
            transition_duration: 1.0,
            radius: 2.0,
            thickness: 50.0,
            bg_color: "#01060f".to_string(),
            width: 200.0,
            height: 300.0,
            pages_offset: 3.0,
        }
    }
}

/// Everything needed to render one cover: the settings plus the image and
/// link presentation fields.
#[derive(Builder, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct CoverRequest {
    /// URL of the cover image. An empty value renders an image element
    /// with an empty source rather than failing.
    pub image_url: String,
    /// Image alt text. Can be the book name.
    pub image_alt: String,
    /// Link target. Keep empty for no link wrapper.
    pub href: String,
    /// Visual settings for this cover.
    pub settings: Settings,
}

impl CoverRequest {
    /// Returns the link target, if one was configured.
    pub fn href_opt(&self) -> Option<&str> {
        if self.href.is_empty() {
            None
        } else {
            Some(&self.href)
        }
    }
}
