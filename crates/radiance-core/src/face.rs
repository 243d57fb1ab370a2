//! Cubemap faces and validated face sets.

use std::fmt;
use std::path::Path;

use crate::decode::RadianceImage;
use crate::error::{LoadError, Result};

/// One face of a cubemap.
///
/// Discriminants follow the GL convention: face `i` is uploaded to
/// `GL_TEXTURE_CUBE_MAP_POSITIVE_X + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX = 0,
    NegativeX = 1,
    PositiveY = 2,
    NegativeY = 3,
    PositiveZ = 4,
    NegativeZ = 5,
}

impl CubeFace {
    /// All faces in upload order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            CubeFace::PositiveX => "+X",
            CubeFace::NegativeX => "-X",
            CubeFace::PositiveY => "+Y",
            CubeFace::NegativeY => "-Y",
            CubeFace::PositiveZ => "+Z",
            CubeFace::NegativeZ => "-Z",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Six square, equally sized images in [`CubeFace::ALL`] order.
#[derive(Debug, Clone)]
pub struct CubeFaces {
    size: u32,
    /// Always exactly six entries.
    faces: Vec<RadianceImage>,
}

impl CubeFaces {
    /// Validate six decoded faces given in GL order.
    ///
    /// Every face must be square and match the size of `+X`. Faces of
    /// different sizes are rejected rather than resampled.
    pub fn new(faces: [RadianceImage; 6]) -> Result<Self> {
        Self::validated(faces.into())
    }

    /// Decode six radiance files given in GL order, then validate them.
    ///
    /// Every file is decoded before any size check runs, and decoding stops
    /// at the first file that fails.
    pub fn open<P: AsRef<Path>>(paths: &[P; 6]) -> Result<Self> {
        let faces = paths
            .iter()
            .map(RadianceImage::open)
            .collect::<Result<Vec<_>>>()?;
        Self::validated(faces)
    }

    /// `faces` must hold exactly six images in GL order.
    pub(crate) fn validated(faces: Vec<RadianceImage>) -> Result<Self> {
        debug_assert_eq!(faces.len(), CubeFace::ALL.len());

        let size = faces[0].width();
        for (face, image) in CubeFace::ALL.into_iter().zip(&faces) {
            let (width, height) = image.dimensions();
            if width != height {
                return Err(LoadError::NonSquareFace {
                    face,
                    width,
                    height,
                });
            }
            if width != size {
                return Err(LoadError::FaceSizeMismatch {
                    face,
                    expected: size,
                    found: width,
                });
            }
        }

        Ok(Self { size, faces })
    }

    /// Edge length shared by every face.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn face(&self, face: CubeFace) -> &RadianceImage {
        &self.faces[face.index()]
    }

    /// Faces paired with their images, in upload order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &RadianceImage)> {
        CubeFace::ALL.into_iter().zip(self.faces.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, value: f32) -> RadianceImage {
        RadianceImage::from_rgb32f(w, h, vec![value; (w * h * 3) as usize]).unwrap()
    }

    fn six(size: u32) -> [RadianceImage; 6] {
        std::array::from_fn(|i| solid(size, size, i as f32))
    }

    #[test]
    fn faces_keep_gl_order() {
        let faces = CubeFaces::new(six(4)).unwrap();
        assert_eq!(faces.size(), 4);
        for (i, (face, image)) in faces.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(image.pixel(0, 0), Some([i as f32; 3]));
        }
        assert_eq!(faces.face(CubeFace::NegativeZ).pixel(3, 3), Some([5.0; 3]));
    }

    #[test]
    fn rejects_mismatched_face() {
        let mut faces = six(4);
        faces[3] = solid(8, 8, 0.0);
        match CubeFaces::new(faces) {
            Err(LoadError::FaceSizeMismatch {
                face,
                expected,
                found,
            }) => {
                assert_eq!(face, CubeFace::NegativeY);
                assert_eq!((expected, found), (4, 8));
            }
            other => panic!("expected size mismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_square_face() {
        let mut faces = six(4);
        faces[0] = solid(4, 2, 0.0);
        assert!(matches!(
            CubeFaces::new(faces),
            Err(LoadError::NonSquareFace {
                face: CubeFace::PositiveX,
                width: 4,
                height: 2,
            })
        ));
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = CubeFace::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, ["+X", "-X", "+Y", "-Y", "+Z", "-Z"]);
    }
}
