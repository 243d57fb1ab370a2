//! Error type shared by the decoding and upload paths.

use std::path::PathBuf;

use crate::face::CubeFace;

/// Convenience alias used throughout the radiance crates.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// Everything that can go wrong between a path on disk and a texture name.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {} as a radiance image: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} decoded to an empty image", path.display())]
    EmptyImage { path: PathBuf },

    #[error("cubemap face {face} is not square ({width}x{height})")]
    NonSquareFace {
        face: CubeFace,
        width: u32,
        height: u32,
    },

    #[error("cubemap face {face} is {found}x{found}, expected {expected}x{expected}")]
    FaceSizeMismatch {
        face: CubeFace,
        expected: u32,
        found: u32,
    },

    #[error("{width}x{height} is not a 4x3 horizontal cross layout")]
    CrossLayout { width: u32, height: u32 },

    #[error("{width}x{height} exceeds the largest texture size OpenGL can address")]
    TooLarge { width: u32, height: u32 },

    #[error("OpenGL reported error 0x{code:04X} during texture upload")]
    Gl { code: u32 },
}
