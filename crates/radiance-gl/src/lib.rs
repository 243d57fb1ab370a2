//! Load radiance (`.hdr`) files as OpenGL textures for HDR environment
//! lighting.
//!
//! - [`texture_from_radiance_file`] decodes one file into a 2D texture.
//! - [`cubemap_from_radiance_files`] decodes six files, one per face in
//!   [`CubeFace::ALL`] order, into a cubemap.
//! - [`cubemap_from_horizontal_cross`] decodes one 4 × 3 cross image into a
//!   cubemap.
//!
//! Each has a `_with` variant that takes any [`TextureUploader`] and explicit
//! [`LoadOptions`]. Every call decodes and validates first and only then
//! touches the GPU, so a failed load never creates a texture.
//!
//! ### Warning
//!
//! The plain variants drive the GL context that is current on the calling
//! thread. They are `unsafe` because that cannot be checked.

use std::path::Path;

use radiance_core::cross::split_horizontal_cross;
use tracing::debug;

mod binding;
pub mod glium_interop;
mod loader;
pub mod texture;
pub mod upload;

pub use radiance_core::{CubeFace, CubeFaces, Filter, HdrFormat, LoadError, LoadOptions, RadianceImage, Result};
pub use texture::{cube_face_target, RadianceTexture, TextureKind};
pub use upload::{GlUploader, TextureUploader};

/// Decode a radiance file and upload it as a 2D texture.
pub fn texture_from_radiance_file_with<U: TextureUploader + ?Sized>(
    uploader: &mut U,
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<RadianceTexture> {
    let path = path.as_ref();
    let mut image = RadianceImage::open(path)?;
    if options.flip_vertically {
        image.flip_vertically();
    }

    let name = uploader.create_texture_2d(&image, options)?;
    debug!(path = %path.display(), name, "loaded radiance texture");

    Ok(RadianceTexture::new(
        name,
        image.dimensions(),
        TextureKind::Texture2d,
        options.internal_format,
        options.generate_mipmaps,
    ))
}

/// Decode six radiance files and upload them as the faces of one cubemap.
///
/// `paths` follow [`CubeFace::ALL`]: +X, -X, +Y, -Y, +Z, -Z. All faces must
/// be square and share one size; see [`CubeFaces::new`].
pub fn cubemap_from_radiance_files_with<U, P>(
    uploader: &mut U,
    paths: &[P; 6],
    options: &LoadOptions,
) -> Result<RadianceTexture>
where
    U: TextureUploader + ?Sized,
    P: AsRef<Path>,
{
    let faces = CubeFaces::open(paths)?;
    upload_cubemap(uploader, &faces, options)
}

/// Decode a horizontal-cross radiance file and upload it as a cubemap.
pub fn cubemap_from_horizontal_cross_with<U: TextureUploader + ?Sized>(
    uploader: &mut U,
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<RadianceTexture> {
    let image = RadianceImage::open(path)?;
    let faces = split_horizontal_cross(&image)?;
    upload_cubemap(uploader, &faces, options)
}

/// Upload already validated faces as a cubemap.
pub fn upload_cubemap<U: TextureUploader + ?Sized>(
    uploader: &mut U,
    faces: &CubeFaces,
    options: &LoadOptions,
) -> Result<RadianceTexture> {
    let name = uploader.create_cubemap(faces, options)?;
    let size = faces.size();
    debug!(name, size, "loaded radiance cubemap");

    Ok(RadianceTexture::new(
        name,
        (size, size),
        TextureKind::Cubemap,
        options.internal_format,
        options.generate_mipmaps,
    ))
}

/// Decode a radiance file into a 2D texture in the current GL context,
/// using [`LoadOptions::default`].
///
/// # Safety
///
/// A GL 3.0+ context must be current on this thread.
pub unsafe fn texture_from_radiance_file(path: impl AsRef<Path>) -> Result<RadianceTexture> {
    texture_from_radiance_file_with(&mut GlUploader::new(), path, &LoadOptions::default())
}

/// Decode six radiance files into a cubemap in the current GL context,
/// using [`LoadOptions::default`].
///
/// # Safety
///
/// A GL 3.0+ context must be current on this thread.
pub unsafe fn cubemap_from_radiance_files<P: AsRef<Path>>(paths: &[P; 6]) -> Result<RadianceTexture> {
    cubemap_from_radiance_files_with(&mut GlUploader::new(), paths, &LoadOptions::default())
}

/// Decode a horizontal-cross radiance file into a cubemap in the current GL
/// context, using [`LoadOptions::default`].
///
/// # Safety
///
/// A GL 3.0+ context must be current on this thread.
pub unsafe fn cubemap_from_horizontal_cross(path: impl AsRef<Path>) -> Result<RadianceTexture> {
    cubemap_from_horizontal_cross_with(&mut GlUploader::new(), path, &LoadOptions::default())
}
