//! The seam between decoded images and the graphics API.

use std::marker::PhantomData;

use gl::types::{GLenum, GLint, GLsizei, GLuint};
use radiance_core::{CubeFaces, Filter, HdrFormat, LoadError, LoadOptions, RadianceImage, Result};
use tracing::{debug, trace, warn};

use crate::binding::{self, SavedBinding, TextureTarget};
use crate::loader;
use crate::texture::cube_face_target;

/// Creates and deletes texture objects from decoded radiance data.
///
/// [`GlUploader`] is the OpenGL implementation. The loader functions in the
/// crate root are generic over this trait so they can be driven without a
/// live context.
pub trait TextureUploader {
    /// Create a 2D texture holding `image` as given. Returns its name.
    fn create_texture_2d(&mut self, image: &RadianceImage, options: &LoadOptions) -> Result<GLuint>;

    /// Create a cubemap with one face per entry of `faces`. Returns its name.
    fn create_cubemap(&mut self, faces: &CubeFaces, options: &LoadOptions) -> Result<GLuint>;

    /// Delete a texture created by this uploader.
    fn delete_texture(&mut self, name: GLuint);
}

/// [`TextureUploader`] for the GL context current on this thread.
pub struct GlUploader {
    // GL contexts are bound per thread.
    _not_send: PhantomData<*const ()>,
}

impl GlUploader {
    /// Create an uploader for the current context, loading GL function
    /// pointers on first use.
    ///
    /// # Safety
    ///
    /// A GL 3.0+ context must be current on this thread whenever the
    /// returned uploader is used.
    pub unsafe fn new() -> Self {
        loader::ensure_loaded();
        Self {
            _not_send: PhantomData,
        }
    }

    /// Allocate a texture name, bind it and run `fill`. On a GL error the
    /// texture is deleted again and the error returned.
    unsafe fn create(
        &mut self,
        target: TextureTarget,
        options: &LoadOptions,
        fill: impl FnOnce(),
    ) -> Result<GLuint> {
        let _saved = SavedBinding::capture(target);
        binding::clear_errors();

        let mut name = 0;
        gl::GenTextures(1, &mut name);
        gl::BindTexture(target.target, name);
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);

        fill();
        set_sampling(target.target, options);
        if options.generate_mipmaps {
            gl::GenerateMipmap(target.target);
        }

        if let Some(code) = binding::first_error() {
            warn!(name, code, "GL error during upload, discarding texture");
            gl::DeleteTextures(1, &name);
            return Err(LoadError::Gl { code });
        }

        Ok(name)
    }
}

impl TextureUploader for GlUploader {
    fn create_texture_2d(&mut self, image: &RadianceImage, options: &LoadOptions) -> Result<GLuint> {
        let (width, height) = image.dimensions();
        let extent = gl_extent(width, height)?;
        let internal = internal_format(options.internal_format);

        // SAFETY: the constructor's contract guarantees a current context.
        let name = unsafe {
            self.create(binding::TEXTURE_2D, options, || {
                tex_image(gl::TEXTURE_2D, internal, extent, image);
            })?
        };

        debug!(name, width, height, format = ?options.internal_format, "created HDR texture");
        Ok(name)
    }

    fn create_cubemap(&mut self, faces: &CubeFaces, options: &LoadOptions) -> Result<GLuint> {
        let extent = gl_extent(faces.size(), faces.size())?;
        let internal = internal_format(options.internal_format);

        // SAFETY: the constructor's contract guarantees a current context.
        let name = unsafe {
            self.create(binding::TEXTURE_CUBE_MAP, options, || {
                for (face, image) in faces.iter() {
                    trace!(%face, size = faces.size(), "uploading cubemap face");
                    tex_image(cube_face_target(face), internal, extent, image);
                }
            })?
        };

        debug!(name, size = faces.size(), format = ?options.internal_format, "created HDR cubemap");
        Ok(name)
    }

    fn delete_texture(&mut self, name: GLuint) {
        // SAFETY: the constructor's contract guarantees a current context.
        unsafe {
            gl::DeleteTextures(1, &name);
        }
    }
}

/// Texture size as the signed extents GL takes.
fn gl_extent(width: u32, height: u32) -> Result<(GLsizei, GLsizei)> {
    match (GLsizei::try_from(width), GLsizei::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(LoadError::TooLarge { width, height }),
    }
}

fn internal_format(format: HdrFormat) -> GLint {
    match format {
        HdrFormat::Rgb16F => gl::RGB16F as GLint,
        HdrFormat::Rgb32F => gl::RGB32F as GLint,
    }
}

/// Min and mag filter values for `options`.
fn filters(options: &LoadOptions) -> (GLenum, GLenum) {
    match (options.filter, options.generate_mipmaps) {
        (Filter::Linear, false) => (gl::LINEAR, gl::LINEAR),
        (Filter::Linear, true) => (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR),
        (Filter::Nearest, false) => (gl::NEAREST, gl::NEAREST),
        (Filter::Nearest, true) => (gl::NEAREST_MIPMAP_NEAREST, gl::NEAREST),
    }
}

/// # Safety
///
/// A GL context must be current with a texture bound to `target`.
unsafe fn set_sampling(target: GLenum, options: &LoadOptions) {
    let (min, mag) = filters(options);
    gl::TexParameteri(target, gl::TEXTURE_MIN_FILTER, min as GLint);
    gl::TexParameteri(target, gl::TEXTURE_MAG_FILTER, mag as GLint);
    gl::TexParameteri(target, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint);
    gl::TexParameteri(target, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);
    if target == gl::TEXTURE_CUBE_MAP {
        gl::TexParameteri(target, gl::TEXTURE_WRAP_R, gl::CLAMP_TO_EDGE as GLint);
    }
}

/// Upload `image` as level 0 of `target`. `extent` is the image size from
/// [`gl_extent`].
///
/// # Safety
///
/// A GL context must be current with unpack alignment 1 and the owning
/// texture bound.
unsafe fn tex_image(
    target: GLenum,
    internal: GLint,
    (width, height): (GLsizei, GLsizei),
    image: &RadianceImage,
) {
    gl::TexImage2D(
        target,
        0,
        internal,
        width,
        height,
        0,
        gl::RGB,
        gl::FLOAT,
        image.pixels().as_ptr().cast(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mipmaps_switch_min_filter() {
        let linear = LoadOptions::default();
        assert_eq!(filters(&linear), (gl::LINEAR, gl::LINEAR));
        assert_eq!(
            filters(&linear.with_generate_mipmaps(true)),
            (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR)
        );

        let nearest = LoadOptions::default().with_filter(Filter::Nearest);
        assert_eq!(filters(&nearest), (gl::NEAREST, gl::NEAREST));
        assert_eq!(
            filters(&nearest.with_generate_mipmaps(true)),
            (gl::NEAREST_MIPMAP_NEAREST, gl::NEAREST)
        );
    }

    #[test]
    fn extents_beyond_glsizei_are_rejected() {
        assert_eq!(gl_extent(640, 480).unwrap(), (640, 480));
        let max = i32::MAX as u32;
        assert_eq!(gl_extent(max, 1).unwrap(), (i32::MAX, 1));
        assert!(matches!(
            gl_extent(max + 1, 1),
            Err(LoadError::TooLarge {
                width: 2147483648,
                height: 1,
            })
        ));
        assert!(matches!(
            gl_extent(4, u32::MAX),
            Err(LoadError::TooLarge { width: 4, .. })
        ));
    }

    #[test]
    fn internal_formats() {
        assert_eq!(internal_format(HdrFormat::Rgb16F), gl::RGB16F as GLint);
        assert_eq!(internal_format(HdrFormat::Rgb32F), gl::RGB32F as GLint);
    }
}
