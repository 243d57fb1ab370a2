//! Upload configuration.

/// Internal storage format of the uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HdrFormat {
    /// Half-float RGB.
    #[default]
    Rgb16F,
    /// Full-float RGB.
    Rgb32F,
}

/// Sampling filter applied to minification and magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Linear,
    Nearest,
}

/// How a decoded radiance image becomes a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reverse row order before uploading 2D textures so the image's top row
    /// lands at the top of GL's bottom-left-origin texture space. Ignored for
    /// cubemaps.
    pub flip_vertically: bool,
    pub internal_format: HdrFormat,
    pub filter: Filter,
    /// Allocate a full mip chain and let the driver fill it in.
    pub generate_mipmaps: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            flip_vertically: false,
            internal_format: HdrFormat::Rgb16F,
            filter: Filter::Linear,
            generate_mipmaps: false,
        }
    }
}

impl LoadOptions {
    pub fn with_flip_vertically(mut self, flip: bool) -> Self {
        self.flip_vertically = flip;
        self
    }

    pub fn with_internal_format(mut self, format: HdrFormat) -> Self {
        self.internal_format = format;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_generate_mipmaps(mut self, mipmaps: bool) -> Self {
        self.generate_mipmaps = mipmaps;
        self
    }
}
