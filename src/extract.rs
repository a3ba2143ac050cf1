use std::collections::HashMap;

use image::RgbaImage;
use log::debug;

use crate::color::{self, Color};
use crate::error::{PixelArtError, Result};
use crate::palette_set::Palette;

/// Pixel counts per distinct color, remembering the order colors were first seen.
#[derive(Clone, Debug, Default)]
pub struct ColorFrequencyTable {
    slots: HashMap<[u8; 3], usize>,
    entries: Vec<(Color, u32)>,
}

impl ColorFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pixel of `image` in row-major order.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut table = Self::new();
        for px in image.pixels() {
            table.add(color::color_of(px.0));
        }
        table
    }

    pub fn add(&mut self, c: Color) {
        match self.slots.get(&color::key(c)) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(color::key(c), self.entries.len());
                self.entries.push((c, 1));
            }
        }
    }

    pub fn count(&self, c: Color) -> u32 {
        self.slots
            .get(&color::key(c))
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct colors seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(Color, u32)> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `k` most frequent colors.
    pub fn top(&self, k: usize) -> Palette {
        self.ranked()
            .into_iter()
            .take(k)
            .map(|(c, _)| c)
            .collect::<Vec<_>>()
            .into()
    }
}

/// Return the `k` most frequent colors of `image`, most frequent first.
///
/// Ties are broken by scan order (row-major, top-left first). An image with
/// fewer than `k` distinct colors yields all of them and no padding.
pub fn extract(image: &RgbaImage, k: usize) -> Result<Palette> {
    if k == 0 {
        return Err(PixelArtError::ZeroColors);
    }

    let table = ColorFrequencyTable::from_image(image);
    let palette = table.top(k);
    debug!(
        "extracted {} of {} distinct colors from {}x{} image",
        palette.len(),
        table.len(),
        image.width(),
        image.height()
    );
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use palette::Srgb;

    fn image_from(w: u32, h: u32, pixels: &[[u8; 4]]) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| Rgba(pixels[(y * w + x) as usize]))
    }

    #[test]
    fn counts_ignore_alpha() {
        let img = image_from(3, 1, &[[9, 9, 9, 255], [9, 9, 9, 0], [1, 1, 1, 128]]);
        let table = ColorFrequencyTable::from_image(&img);
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(Srgb::new(9, 9, 9)), 2);
        assert_eq!(table.count(Srgb::new(1, 1, 1)), 1);
        assert_eq!(table.count(Srgb::new(2, 2, 2)), 0);
    }

    #[test]
    fn most_frequent_first_then_first_seen() {
        let img = image_from(
            2,
            2,
            &[[255, 0, 0, 255], [255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]],
        );
        let palette = extract(&img, 2).unwrap();
        assert_eq!(palette.colors(), &[Srgb::new(255, 0, 0), Srgb::new(0, 255, 0)]);
    }

    #[test]
    fn later_color_can_overtake_earlier_one() {
        let img = image_from(
            4,
            1,
            &[[1, 1, 1, 255], [2, 2, 2, 255], [2, 2, 2, 255], [3, 3, 3, 255]],
        );
        let ranked = ColorFrequencyTable::from_image(&img).ranked();
        assert_eq!(
            ranked,
            vec![
                (Srgb::new(2, 2, 2), 2),
                (Srgb::new(1, 1, 1), 1),
                (Srgb::new(3, 3, 3), 1)
            ]
        );
    }

    #[test]
    fn fewer_distinct_colors_than_k() {
        let img = image_from(3, 1, &[[5, 5, 5, 255], [6, 6, 6, 255], [5, 5, 5, 255]]);
        assert_eq!(extract(&img, 16).unwrap().len(), 2);
    }

    #[test]
    fn zero_k_is_rejected() {
        let img = image_from(1, 1, &[[0, 0, 0, 255]]);
        assert!(matches!(extract(&img, 0), Err(PixelArtError::ZeroColors)));
    }

    #[test]
    fn empty_image_gives_empty_palette() {
        assert!(extract(&RgbaImage::new(0, 0), 4).unwrap().is_empty());
    }
}
