use crate::error::{PixelArtError, Result};

/// Number of colors extracted when the caller does not choose.
pub const DEFAULT_COLORS: usize = 16;
/// Longest side of the thumbnail when the caller does not choose.
pub const DEFAULT_SIZE: u32 = 64;

/// How the source is fitted into the `size` box before quantizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fit {
    /// Stretch to `size`×`size`, ignoring the aspect ratio.
    #[default]
    Square,
    /// Keep the aspect ratio; the longest side becomes `size`.
    Contain,
}

/// Filter used to shrink the source to thumbnail size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resample {
    /// Bilinear. Blends neighbours, so the quantizer sees colors outside the palette.
    #[default]
    Smooth,
    Nearest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PixelArtOptions {
    /// Palette size `K` used for extraction.
    pub n_colors: usize,
    pub size: u32,
    pub fit: Fit,
    pub resample: Resample,
    /// Nearest-neighbour upscale of the result so its longest side is this many pixels.
    pub output_size: Option<u32>,
    /// Hex colors to use instead of extracting a palette.
    pub palette: Option<Vec<String>>,
}

impl Default for PixelArtOptions {
    fn default() -> Self {
        Self {
            n_colors: DEFAULT_COLORS,
            size: DEFAULT_SIZE,
            fit: Fit::default(),
            resample: Resample::default(),
            output_size: None,
            palette: None,
        }
    }
}

impl PixelArtOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_colors(mut self, n: usize) -> Self {
        self.n_colors = n;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    pub fn resample(mut self, resample: Resample) -> Self {
        self.resample = resample;
        self
    }

    pub fn output_size(mut self, size: Option<u32>) -> Self {
        self.output_size = size;
        self
    }

    pub fn palette(mut self, palette: Option<Vec<String>>) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_none() && self.n_colors == 0 {
            return Err(PixelArtError::ZeroColors);
        }
        if let Some(p) = &self.palette {
            if p.is_empty() {
                return Err(PixelArtError::EmptyPalette);
            }
        }
        if self.size == 0 || self.output_size == Some(0) {
            return Err(PixelArtError::ZeroSize);
        }
        Ok(())
    }
}
