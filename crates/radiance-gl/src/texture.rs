//! Texture handles returned by the loaders.

use gl::types::{GLenum, GLuint};
use radiance_core::{CubeFace, HdrFormat};

use crate::upload::TextureUploader;

/// What kind of texture object a [`RadianceTexture`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Texture2d,
    Cubemap,
}

impl TextureKind {
    /// GL bind target for this kind.
    pub fn gl_target(self) -> GLenum {
        match self {
            TextureKind::Texture2d => gl::TEXTURE_2D,
            TextureKind::Cubemap => gl::TEXTURE_CUBE_MAP,
        }
    }
}

/// GL upload target of a single cubemap face.
pub fn cube_face_target(face: CubeFace) -> GLenum {
    gl::TEXTURE_CUBE_MAP_POSITIVE_X + face.index() as GLenum
}

/// A texture created from radiance data.
///
/// The name belongs to the GL context that was current when it was created.
/// The caller owns it: release it with [`RadianceTexture::delete`], or take
/// the raw name with [`RadianceTexture::into_raw`] and manage it yourself.
/// Dropping the handle does not free the GL object.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a RadianceTexture leaks its GL texture"]
pub struct RadianceTexture {
    name: GLuint,
    width: u32,
    height: u32,
    kind: TextureKind,
    format: HdrFormat,
    mipmapped: bool,
}

impl RadianceTexture {
    pub(crate) fn new(
        name: GLuint,
        (width, height): (u32, u32),
        kind: TextureKind,
        format: HdrFormat,
        mipmapped: bool,
    ) -> Self {
        Self {
            name,
            width,
            height,
            kind,
            format,
            mipmapped,
        }
    }

    /// GL texture name.
    pub fn name(&self) -> GLuint {
        self.name
    }

    /// Width in texels. For cubemaps, the edge length of every face.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels. For cubemaps, equal to [`width`](Self::width).
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    pub fn format(&self) -> HdrFormat {
        self.format
    }

    pub fn is_mipmapped(&self) -> bool {
        self.mipmapped
    }

    /// Give up ownership and return the raw GL name.
    pub fn into_raw(self) -> GLuint {
        self.name
    }

    /// Delete the GL texture through `uploader`.
    pub fn delete<U: TextureUploader + ?Sized>(self, uploader: &mut U) {
        uploader.delete_texture(self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_targets_follow_gl_order() {
        let targets = CubeFace::ALL.map(cube_face_target);
        assert_eq!(
            targets,
            [
                gl::TEXTURE_CUBE_MAP_POSITIVE_X,
                gl::TEXTURE_CUBE_MAP_NEGATIVE_X,
                gl::TEXTURE_CUBE_MAP_POSITIVE_Y,
                gl::TEXTURE_CUBE_MAP_NEGATIVE_Y,
                gl::TEXTURE_CUBE_MAP_POSITIVE_Z,
                gl::TEXTURE_CUBE_MAP_NEGATIVE_Z,
            ]
        );
    }

    #[test]
    fn kind_targets() {
        assert_eq!(TextureKind::Texture2d.gl_target(), gl::TEXTURE_2D);
        assert_eq!(TextureKind::Cubemap.gl_target(), gl::TEXTURE_CUBE_MAP);
    }
}
