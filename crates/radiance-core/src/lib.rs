//! Radiance (`.hdr`) image decoding and cubemap face assembly.
//!
//! This crate holds everything about environment-map loading that does not
//! touch a graphics API:
//!
//! - [`RadianceImage`] is a decoded radiance file as tightly packed RGB `f32`.
//! - [`CubeFace`] / [`CubeFaces`] model the six faces of a cubemap in GL
//!   order and enforce that they are square and equally sized.
//! - [`cross::split_horizontal_cross`] cuts a 4 × 3 horizontal-cross image
//!   into its six faces.
//! - [`LoadOptions`] configures how images are uploaded later on.
//!
//! The `logging` feature adds `logging::init`, a `RUST_LOG`-filtered
//! subscriber for binaries and tests.
//!
//! Decoding itself is done by the `image` crate. The GL side lives in
//! `radiance-gl`.

pub mod cross;
pub mod decode;
pub mod error;
pub mod face;
#[cfg(feature = "logging")]
pub mod logging;
pub mod options;

pub use decode::RadianceImage;
pub use error::{LoadError, Result};
pub use face::{CubeFace, CubeFaces};
pub use options::{Filter, HdrFormat, LoadOptions};
