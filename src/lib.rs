//! Animated 3D book covers from plain HTML and CSS.
//!
//! This crate turns a cover image into a pseudo-3D book:
//! - A perspective container centres the book and sets the scene depth
//! - The image forms the front face, pushed forward by half the book's
//!   thickness; generated content supplies the page edge and back cover
//! - A one-shot keyframe animation swings the book to its resting angle on
//!   mount, and a hover transition rotates it towards the viewer
//!
//! No script is emitted; the host's style engine drives all motion. The
//! whole surface is two pure functions plus their configuration types:
//! [`generate_stylesheet`] maps [`Settings`] to stylesheet text, and
//! [`render`] wraps that text and the image markup into an embeddable
//! fragment, with an optional link wrapper.
//!
//! ```
//! use book_cover_3d::{render, CoverRequestBuilder};
//!
//! let request = CoverRequestBuilder::default()
//!     .image_url("https://example.com/cover.jpg")
//!     .image_alt("An Example Book")
//!     .build()
//!     .expect("can build request");
//!
//! let html = render(&request);
//! assert!(html.contains("rotateY(-30deg)"));
//! ```

pub mod config;
pub mod render;
pub mod styles;

pub use config::{CoverRequest, CoverRequestBuilder, Settings, SettingsBuilder};
pub use render::{render, render_page};
pub use styles::generate_stylesheet;
