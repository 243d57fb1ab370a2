//! Save and restore the GL state touched while uploading.

use gl::types::{GLenum, GLint, GLuint};

/// A texture target together with the query that reports its binding.
#[derive(Debug, Clone, Copy)]
pub struct TextureTarget {
    pub target: GLenum,
    pub binding: GLenum,
}

pub const TEXTURE_2D: TextureTarget = TextureTarget {
    target: gl::TEXTURE_2D,
    binding: gl::TEXTURE_BINDING_2D,
};

pub const TEXTURE_CUBE_MAP: TextureTarget = TextureTarget {
    target: gl::TEXTURE_CUBE_MAP,
    binding: gl::TEXTURE_BINDING_CUBE_MAP,
};

/// Captures the caller's binding for one target on the active texture unit,
/// plus the unpack alignment, and puts both back on drop.
pub(crate) struct SavedBinding {
    target: TextureTarget,
    texture: GLuint,
    unpack_alignment: GLint,
}

impl SavedBinding {
    /// # Safety
    ///
    /// A GL context must be current and function pointers loaded.
    pub(crate) unsafe fn capture(target: TextureTarget) -> Self {
        let mut texture = 0;
        gl::GetIntegerv(target.binding, &mut texture);
        let mut unpack_alignment = 4;
        gl::GetIntegerv(gl::UNPACK_ALIGNMENT, &mut unpack_alignment);

        Self {
            target,
            texture: texture as GLuint,
            unpack_alignment,
        }
    }
}

impl Drop for SavedBinding {
    fn drop(&mut self) {
        // SAFETY: only constructed through `capture`, on the same context.
        unsafe {
            gl::BindTexture(self.target.target, self.texture);
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, self.unpack_alignment);
        }
    }
}

/// Discard any errors left in the GL error queue by earlier calls.
///
/// # Safety
///
/// A GL context must be current and function pointers loaded.
pub(crate) unsafe fn clear_errors() {
    // Bounded: a lost context can report errors forever.
    for _ in 0..32 {
        let code = gl::GetError();
        if code == gl::NO_ERROR {
            break;
        }
        tracing::trace!(code, "discarding stale GL error");
    }
}

/// First error reported since the last [`clear_errors`], if any.
///
/// # Safety
///
/// A GL context must be current and function pointers loaded.
pub(crate) unsafe fn first_error() -> Option<GLenum> {
    let first = gl::GetError();
    if first == gl::NO_ERROR {
        return None;
    }
    clear_errors();
    Some(first)
}
