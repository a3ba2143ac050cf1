use image::{RgbaImage, imageops::{self, FilterType}};

use crate::options::{Fit, Resample};

/// Thumbnail dimensions for a `w`×`h` source.
pub fn target_dimensions(w: u32, h: u32, size: u32, fit: Fit) -> (u32, u32) {
    match fit {
        Fit::Square => (size, size),
        Fit::Contain => scale_longest_side(w, h, size),
    }
}

/// Scale so the longest side equals `size`, never dropping below 1 pixel.
pub fn scale_longest_side(w: u32, h: u32, size: u32) -> (u32, u32) {
    let max_side = w.max(h).max(1) as f32;
    let ratio = size as f32 / max_side;
    (
        ((w as f32) * ratio).round().max(1.0) as u32,
        ((h as f32) * ratio).round().max(1.0) as u32,
    )
}

pub fn downsample(img: &RgbaImage, size: u32, fit: Fit, resample: Resample) -> RgbaImage {
    let (w, h) = target_dimensions(img.width(), img.height(), size, fit);

    // Fast path – no scaling required.
    if (w, h) == img.dimensions() {
        return img.clone();
    }

    let filter = match resample {
        Resample::Smooth => FilterType::Triangle,
        Resample::Nearest => FilterType::Nearest,
    };
    imageops::resize(img, w, h, filter)
}

/// Nearest-neighbour upscale so hard pixel edges survive.
pub fn upscale(img: &RgbaImage, output_size: u32) -> RgbaImage {
    let (w, h) = scale_longest_side(img.width(), img.height(), output_size);
    if (w, h) == img.dimensions() {
        return img.clone();
    }
    imageops::resize(img, w, h, FilterType::Nearest)
}
