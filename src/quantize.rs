use image::RgbaImage;
use log::debug;

use crate::color;
use crate::error::{PixelArtError, Result};
use crate::palette_set::Palette;

/// Recolor every pixel of `image` with its nearest palette color and hand it back.
pub fn quantize(mut image: RgbaImage, palette: &Palette) -> Result<RgbaImage> {
    quantize_in_place(&mut image, palette)?;
    Ok(image)
}

/// Overwrite R, G and B of every pixel with the nearest palette color.
///
/// Pixels already in the palette are left alone. Otherwise the entry with the
/// smallest Manhattan distance is written, the earliest entry winning ties.
/// Alpha is never touched. Returns the number of pixels that changed color.
pub fn quantize_in_place(image: &mut RgbaImage, palette: &Palette) -> Result<usize> {
    if palette.is_empty() {
        return Err(PixelArtError::EmptyPalette);
    }

    let mut remapped = 0usize;
    for px in image.pixels_mut() {
        let c = color::color_of(px.0);
        if palette.contains(c) {
            continue;
        }
        let Some(nearest) = palette.nearest(c) else {
            continue;
        };
        px.0[0] = nearest.red;
        px.0[1] = nearest.green;
        px.0[2] = nearest.blue;
        remapped += 1;
    }

    debug!(
        "remapped {} of {} pixels onto {} colors",
        remapped,
        image.width() as usize * image.height() as usize,
        palette.len()
    );
    Ok(remapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use palette::Srgb;

    #[test]
    fn tie_goes_to_first_entry() {
        let palette = Palette::new(vec![Srgb::new(0, 0, 0), Srgb::new(20, 20, 20)]);
        let img = RgbaImage::from_pixel(1, 1, Rgba([10, 10, 10, 255]));
        let out = quantize(img, &palette).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn alpha_passes_through() {
        let palette = Palette::new(vec![Srgb::new(200, 100, 50)]);
        let img = RgbaImage::from_fn(2, 1, |x, _| Rgba([0, 0, 0, x as u8 * 77]));
        let out = quantize(img, &palette).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [200, 100, 50, 0]);
        assert_eq!(out.get_pixel(1, 0).0, [200, 100, 50, 77]);
    }

    #[test]
    fn members_are_not_counted_as_remapped() {
        let palette = Palette::new(vec![Srgb::new(1, 2, 3), Srgb::new(250, 250, 250)]);
        let mut img = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([1, 2, 3, 255]),
            1 => Rgba([240, 255, 250, 255]),
            _ => Rgba([250, 250, 250, 10]),
        });
        assert_eq!(quantize_in_place(&mut img, &palette).unwrap(), 1);
        assert_eq!(img.get_pixel(1, 0).0, [250, 250, 250, 255]);
    }

    #[test]
    fn empty_palette_is_rejected_untouched() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([7, 8, 9, 255]));
        let before = img.clone();
        assert!(matches!(
            quantize_in_place(&mut img, &Palette::default()),
            Err(PixelArtError::EmptyPalette)
        ));
        assert_eq!(img, before);
    }

    #[test]
    fn dimensions_are_preserved() {
        let palette = Palette::new(vec![Srgb::new(0, 0, 0)]);
        let out = quantize(RgbaImage::new(5, 3), &palette).unwrap();
        assert_eq!(out.dimensions(), (5, 3));
    }
}
