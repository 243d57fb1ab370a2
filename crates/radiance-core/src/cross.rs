//! Horizontal-cross environment maps.
//!
//! A horizontal cross stores all six faces in one 4 × 3 grid of square
//! tiles:
//!
//! ```text
//!         [+Y]
//!   [-X]  [+Z]  [+X]  [-Z]
//!         [-Y]
//! ```

use tracing::debug;

use crate::decode::RadianceImage;
use crate::error::{LoadError, Result};
use crate::face::{CubeFace, CubeFaces};

/// Grid cell `(column, row)` holding each face, indexed like [`CubeFace::ALL`].
const TILES: [(u32, u32); 6] = [
    (2, 1), // +X
    (0, 1), // -X
    (1, 0), // +Y
    (1, 2), // -Y
    (1, 1), // +Z
    (3, 1), // -Z
];

/// Grid cell holding `face` in a horizontal cross.
pub fn tile_of(face: CubeFace) -> (u32, u32) {
    TILES[face.index()]
}

/// Cut a horizontal-cross image into its six faces.
///
/// The image must be exactly four tiles wide and three tiles high.
pub fn split_horizontal_cross(image: &RadianceImage) -> Result<CubeFaces> {
    let (width, height) = image.dimensions();
    let layout_err = || LoadError::CrossLayout { width, height };

    if width == 0 || u64::from(width) * 3 != u64::from(height) * 4 {
        return Err(layout_err());
    }
    let tile = width / 4;

    debug!(width, height, tile, "splitting horizontal cross");

    let mut faces = Vec::with_capacity(CubeFace::ALL.len());
    for face in CubeFace::ALL {
        let (col, row) = tile_of(face);
        let cropped = image
            .crop(col * tile, row * tile, tile, tile)
            .ok_or_else(layout_err)?;
        faces.push(cropped);
    }

    CubeFaces::validated(faces)
}
