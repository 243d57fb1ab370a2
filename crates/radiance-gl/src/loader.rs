//! One-time loading of OpenGL function pointers.

use std::sync::Once;

static GL_INIT_ONCE: Once = Once::new();

/// Load GL function pointers for the current context via `gl_loader`.
///
/// Pointers are process-global and loaded exactly once; later calls are
/// no-ops.
pub(crate) fn ensure_loaded() {
    GL_INIT_ONCE.call_once(|| {
        gl_loader::init_gl();
        gl::load_with(|s| gl_loader::get_proc_address(s).cast());
        tracing::debug!("loaded OpenGL function pointers");
    });
}
