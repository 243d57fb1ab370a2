//! Decoding radiance files into flat RGB `f32` buffers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use image::codecs::hdr::HdrDecoder;
use image::error::{LimitError, LimitErrorKind};
use image::{DynamicImage, ImageDecoder, ImageError, Limits};
use tracing::debug;

use crate::error::{LoadError, Result};

/// Floats per pixel in a [`RadianceImage`] buffer.
pub const CHANNELS: usize = 3;

/// A decoded radiance image.
///
/// Pixels are row-major RGB triples, top row first, `width * height * 3`
/// floats with no row padding. This is the layout `glTexImage2D` expects for
/// `GL_RGB` / `GL_FLOAT` with an unpack alignment of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RadianceImage {
    width: u32,
    height: u32,
    pixels: Vec<f32>,
    exposure: Option<f32>,
}

impl RadianceImage {
    /// Decode the radiance file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(BufReader::new(file), path)
    }

    /// Decode a radiance stream. `origin` is only used for error reporting
    /// and logging.
    ///
    /// Headers declaring a pixel buffer larger than `image`'s default
    /// allocation limit are rejected before any pixel memory is allocated.
    pub fn decode(reader: impl BufRead, origin: &Path) -> Result<Self> {
        let decode_err = |source| LoadError::Decode {
            path: origin.to_path_buf(),
            source,
        };

        let mut decoder = HdrDecoder::new(reader).map_err(decode_err)?;
        let exposure = decoder.metadata().exposure;

        let limits = Limits::default();
        if limits
            .max_alloc
            .is_some_and(|max_alloc| decoder.total_bytes() > max_alloc)
        {
            let (width, height) = decoder.dimensions();
            debug!(path = %origin.display(), width, height, "radiance image exceeds allocation limit");
            return Err(decode_err(ImageError::Limits(LimitError::from_kind(
                LimitErrorKind::InsufficientMemory,
            ))));
        }
        decoder.set_limits(limits).map_err(decode_err)?;
        let rgb = DynamicImage::from_decoder(decoder)
            .map_err(decode_err)?
            .into_rgb32f();

        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(LoadError::EmptyImage {
                path: origin.to_path_buf(),
            });
        }

        debug!(path = %origin.display(), width, height, ?exposure, "decoded radiance image");

        Ok(Self {
            width,
            height,
            pixels: rgb.into_raw(),
            exposure,
        })
    }

    /// Build an image from raw RGB floats.
    ///
    /// Returns `None` if `pixels` does not hold exactly `width * height * 3`
    /// values.
    pub fn from_rgb32f(width: u32, height: u32, pixels: Vec<f32>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize * CHANNELS {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
            exposure: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Flat RGB pixel data, top row first.
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    /// `EXPOSURE` header value, if the file declared one.
    pub fn exposure(&self) -> Option<f32> {
        self.exposure
    }

    /// RGB value at `(x, y)`, with `y = 0` the first stored row.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Reverse the row order in place, so the last stored row comes first.
    ///
    /// GL treats the first row of uploaded data as the bottom of the texture.
    pub fn flip_vertically(&mut self) {
        let stride = self.width as usize * CHANNELS;
        let rows = self.height as usize;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (head, tail) = self.pixels.split_at_mut(bottom * stride);
            head[top * stride..(top + 1) * stride].swap_with_slice(&mut tail[..stride]);
        }
    }

    /// Copy out the `w × h` region whose top-left corner is `(x, y)`.
    ///
    /// Returns `None` if the region does not fit inside the image.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Option<Self> {
        if x.checked_add(w)? > self.width || y.checked_add(h)? > self.height {
            return None;
        }

        let stride = self.width as usize * CHANNELS;
        let row_len = w as usize * CHANNELS;
        let mut pixels = Vec::with_capacity(row_len * h as usize);
        for row in y as usize..(y + h) as usize {
            let start = row * stride + x as usize * CHANNELS;
            pixels.extend_from_slice(&self.pixels[start..start + row_len]);
        }

        Some(Self {
            width: w,
            height: h,
            pixels,
            exposure: self.exposure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x3 image where each pixel's red channel encodes its row.
    fn rows_image() -> RadianceImage {
        let mut pixels = Vec::new();
        for y in 0..3 {
            for x in 0..2 {
                pixels.extend_from_slice(&[y as f32, x as f32, 0.0]);
            }
        }
        RadianceImage::from_rgb32f(2, 3, pixels).unwrap()
    }

    #[test]
    fn from_rgb32f_rejects_wrong_length() {
        assert!(RadianceImage::from_rgb32f(2, 2, vec![0.0; 11]).is_none());
        assert!(RadianceImage::from_rgb32f(2, 2, vec![0.0; 12]).is_some());
    }

    #[test]
    fn flip_reverses_rows() {
        let mut image = rows_image();
        image.flip_vertically();
        assert_eq!(image.pixel(0, 0), Some([2.0, 0.0, 0.0]));
        assert_eq!(image.pixel(1, 1), Some([1.0, 1.0, 0.0]));
        assert_eq!(image.pixel(1, 2), Some([0.0, 1.0, 0.0]));
    }

    #[test]
    fn flip_twice_is_identity() {
        let original = rows_image();
        let mut image = original.clone();
        image.flip_vertically();
        image.flip_vertically();
        assert_eq!(image, original);
    }

    #[test]
    fn crop_copies_region() {
        let image = rows_image();
        let region = image.crop(1, 1, 1, 2).unwrap();
        assert_eq!(region.dimensions(), (1, 2));
        assert_eq!(region.pixels(), &[1.0, 1.0, 0.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn crop_out_of_bounds() {
        let image = rows_image();
        assert!(image.crop(1, 0, 2, 1).is_none());
        assert!(image.crop(0, 2, 1, 2).is_none());
        assert!(image.crop(u32::MAX, 0, 2, 1).is_none());
    }

    #[test]
    fn pixel_out_of_bounds() {
        assert_eq!(rows_image().pixel(2, 0), None);
    }
}
