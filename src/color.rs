use palette::Srgb;

use crate::error::{PixelArtError, Result};

/// An opaque 8-bit RGB color. Alpha is never part of a color's identity.
pub type Color = Srgb<u8>;

/// Read the color of an RGBA pixel, ignoring alpha.
#[inline(always)]
pub fn color_of(pixel: [u8; 4]) -> Color {
    Srgb::new(pixel[0], pixel[1], pixel[2])
}

#[inline(always)]
pub(crate) fn key(c: Color) -> [u8; 3] {
    [c.red, c.green, c.blue]
}

/// Manhattan (L1) distance between two colors over R, G and B.
#[inline(always)]
pub fn manhattan(a: Color, b: Color) -> u32 {
    a.red.abs_diff(b.red) as u32 + a.green.abs_diff(b.green) as u32 + a.blue.abs_diff(b.blue) as u32
}

/// `rgb(R, G, B)` with decimal components.
pub fn to_css(c: Color) -> String {
    format!("rgb({}, {}, {})", c.red, c.green, c.blue)
}

/// Upper-case `RRGGBB`, no leading `#`.
pub fn to_hex(c: Color) -> String {
    format!("{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
}

/// Parse `RRGGBB` or `#RRGGBB`.
pub fn parse_hex(s: &str) -> Result<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(PixelArtError::InvalidHex(s.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| PixelArtError::InvalidHex(s.to_owned()))
    };
    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_channel_differences() {
        let a = Srgb::new(10, 200, 30);
        let b = Srgb::new(20, 100, 30);
        assert_eq!(manhattan(a, b), 110);
        assert_eq!(manhattan(b, a), 110);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(manhattan(Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)), 765);
    }

    #[test]
    fn alpha_is_not_part_of_the_color() {
        assert_eq!(color_of([1, 2, 3, 0]), color_of([1, 2, 3, 255]));
    }

    #[test]
    fn display_forms() {
        let c = Srgb::new(255, 8, 0);
        assert_eq!(to_css(c), "rgb(255, 8, 0)");
        assert_eq!(to_hex(c), "FF0800");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#ff0800").unwrap(), Srgb::new(255, 8, 0));
        assert_eq!(parse_hex("00FF7f").unwrap(), Srgb::new(0, 255, 127));
        assert!(matches!(parse_hex("fff"), Err(PixelArtError::InvalidHex(_))));
        assert!(matches!(parse_hex("gg0000"), Err(PixelArtError::InvalidHex(_))));
        assert!(matches!(parse_hex("ÿÿÿ"), Err(PixelArtError::InvalidHex(_))));
    }
}
