use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixelArtError {
    #[error("palette size must be at least 1")]
    ZeroColors,

    #[error("cannot quantize against an empty palette")]
    EmptyPalette,

    #[error("target size must be at least 1 pixel")]
    ZeroSize,

    #[error("invalid hex color {0:?}, expected RRGGBB")]
    InvalidHex(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = PixelArtError> = std::result::Result<T, E>;
