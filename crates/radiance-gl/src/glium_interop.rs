//! Hand radiance textures to glium.
//!
//! glium tracks texture state itself, so a texture created by
//! [`GlUploader`](crate::GlUploader) has to be wrapped with `from_id` before
//! it can be used as a glium uniform.

use glium::backend::Facade;
use glium::texture::{Cubemap, Dimensions, MipmapsOption, Texture2d, UncompressedFloatFormat};

use crate::texture::{RadianceTexture, TextureKind};
use radiance_core::HdrFormat;

fn float_format(format: HdrFormat) -> UncompressedFloatFormat {
    match format {
        HdrFormat::Rgb16F => UncompressedFloatFormat::F16F16F16,
        HdrFormat::Rgb32F => UncompressedFloatFormat::F32F32F32,
    }
}

fn mipmaps(texture: &RadianceTexture) -> MipmapsOption {
    if texture.is_mipmapped() {
        MipmapsOption::AutoGeneratedMipmaps
    } else {
        MipmapsOption::NoMipmap
    }
}

/// Wrap a 2D radiance texture as a glium [`Texture2d`].
///
/// With `owned` set, glium deletes the GL texture when the returned value is
/// dropped; otherwise the caller keeps that responsibility. Returns the
/// handle back unchanged if it is not a 2D texture.
///
/// # Safety
///
/// `facade` must wrap the context the texture was created in.
pub unsafe fn texture_2d<F: Facade + ?Sized>(
    facade: &F,
    texture: RadianceTexture,
    owned: bool,
) -> Result<Texture2d, RadianceTexture> {
    if texture.kind() != TextureKind::Texture2d {
        return Err(texture);
    }

    let (width, height) = texture.dimensions();
    let mipmaps = mipmaps(&texture);
    let format = float_format(texture.format());
    Ok(Texture2d::from_id(
        facade,
        format,
        texture.into_raw(),
        owned,
        mipmaps,
        Dimensions::Texture2d { width, height },
    ))
}

/// Wrap a radiance cubemap as a glium [`Cubemap`].
///
/// Ownership works as in [`texture_2d`]. Returns the handle back unchanged
/// if it is not a cubemap.
///
/// # Safety
///
/// `facade` must wrap the context the texture was created in.
pub unsafe fn cubemap<F: Facade + ?Sized>(
    facade: &F,
    texture: RadianceTexture,
    owned: bool,
) -> Result<Cubemap, RadianceTexture> {
    if texture.kind() != TextureKind::Cubemap {
        return Err(texture);
    }

    let dimension = texture.width();
    let mipmaps = mipmaps(&texture);
    let format = float_format(texture.format());
    Ok(Cubemap::from_id(
        facade,
        format,
        texture.into_raw(),
        owned,
        mipmaps,
        Dimensions::Cubemap { dimension },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_match_internal_storage() {
        assert!(matches!(
            float_format(HdrFormat::Rgb16F),
            UncompressedFloatFormat::F16F16F16
        ));
        assert!(matches!(
            float_format(HdrFormat::Rgb32F),
            UncompressedFloatFormat::F32F32F32
        ));
    }

    #[test]
    fn mipmap_option_follows_handle() {
        let plain = RadianceTexture::new(1, (4, 4), TextureKind::Texture2d, HdrFormat::Rgb16F, false);
        let mipped = RadianceTexture::new(2, (4, 4), TextureKind::Cubemap, HdrFormat::Rgb16F, true);
        assert!(matches!(mipmaps(&plain), MipmapsOption::NoMipmap));
        assert!(matches!(mipmaps(&mipped), MipmapsOption::AutoGeneratedMipmaps));
        let _ = (plain.into_raw(), mipped.into_raw());
    }
}
