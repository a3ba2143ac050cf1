use crate::color::{self, Color};
use crate::error::Result;

/// An ordered, immutable list of colors. Earlier entries win ties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Build a palette from `RRGGBB` strings, keeping their order.
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let colors = entries
            .iter()
            .map(|s| color::parse_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(colors))
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, c: Color) -> bool {
        self.colors.contains(&c)
    }

    /// Index of the entry closest to `c` by Manhattan distance.
    ///
    /// Scans left to right and only moves on a strictly smaller distance,
    /// so the first of several equidistant entries is returned. `None` for
    /// an empty palette.
    pub fn nearest_index(&self, c: Color) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (idx, &entry) in self.colors.iter().enumerate() {
            let dist = color::manhattan(c, entry);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => {
                    best = Some((idx, dist));
                    if dist == 0 {
                        break;
                    }
                }
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub fn nearest(&self, c: Color) -> Option<Color> {
        self.nearest_index(c).map(|idx| self.colors[idx])
    }

    pub fn to_css(&self) -> Vec<String> {
        self.colors.iter().copied().map(color::to_css).collect()
    }

    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().copied().map(color::to_hex).collect()
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}
