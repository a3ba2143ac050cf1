use wasm_bindgen::prelude::*;
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use js_sys::{Uint8Array, Array, Object, Reflect};
use log::info;

pub mod color;
pub mod error;
pub mod extract;
pub mod options;
pub mod palette_set;
pub mod quantize;
pub mod resize;

pub use color::Color;
pub use error::{PixelArtError, Result};
pub use extract::{ColorFrequencyTable, extract};
pub use options::{Fit, PixelArtOptions, Resample};
pub use palette_set::Palette;
pub use quantize::{quantize, quantize_in_place};

/// A quantized thumbnail together with the palette it is restricted to.
#[derive(Clone, Debug)]
pub struct PixelArt {
    pub image: RgbaImage,
    pub palette: Palette,
}

impl PixelArt {
    pub fn to_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// Convert a decoded image to low-color pixel art.
///
/// Steps performed:
/// 1. Count every pixel of the full-resolution image and keep the `n_colors`
///    most frequent colors, unless a palette was supplied.
/// 2. Down-scale to the thumbnail size.
/// 3. Re-color every thumbnail pixel with its nearest palette entry.
/// 4. Optionally up-scale with nearest-neighbour for display.
pub fn render(img: &DynamicImage, opts: &PixelArtOptions) -> Result<PixelArt> {
    opts.validate()?;
    let (orig_w, orig_h) = img.dimensions();
    let rgba = img.to_rgba8();

    let palette = match &opts.palette {
        Some(hex) => Palette::from_hex(hex)?,
        None => extract(&rgba, opts.n_colors)?,
    };
    info!("palette: {}", palette.to_css().join(", "));

    let thumb = resize::downsample(&rgba, opts.size, opts.fit, opts.resample);
    let mut quantized = quantize(thumb, &palette)?;

    if let Some(size) = opts.output_size {
        quantized = resize::upscale(&quantized, size);
    }

    info!(
        "rendered {}x{} source as {}x{} pixel art with {} colors",
        orig_w,
        orig_h,
        quantized.width(),
        quantized.height(),
        palette.len()
    );
    Ok(PixelArt { image: quantized, palette })
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn js_err(e: PixelArtError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn js_strings(items: Vec<String>) -> Array {
    let arr = Array::new();
    for s in items {
        arr.push(&JsValue::from_str(&s));
    }
    arr
}

/// Browser entry point.
///
/// Returns `{ image: Uint8Array (PNG), palette: string[] (RRGGBB) }`.
/// Passing `palette` (hex strings) skips extraction.
#[wasm_bindgen]
pub fn pixelate(
    input: Vec<u8>,
    n_colors: usize,
    size: u32,
    output_size: Option<u32>,
    palette: Option<Array>,
) -> Result<Object, JsValue> {
    let custom = match palette {
        Some(js_palette) => {
            let mut tmp = Vec::new();
            for val in js_palette.iter() {
                let s = val.as_string().ok_or_else(|| JsValue::from_str("Palette values must be strings"))?;
                tmp.push(s);
            }
            Some(tmp)
        }
        None => None,
    };
    let opts = PixelArtOptions::new()
        .n_colors(n_colors)
        .size(size)
        .output_size(output_size)
        .palette(custom);

    let (png, palette_hex) = pixelate_bytes(&input, &opts).map_err(js_err)?;

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("image"), &Uint8Array::from(png.as_slice()))?;
    Reflect::set(&result, &JsValue::from_str("palette"), &js_strings(palette_hex))?;
    Ok(result)
}

/// Browser entry point returning only the `n_colors` most frequent colors as `RRGGBB`.
#[wasm_bindgen]
pub fn extract_palette(input: Vec<u8>, n_colors: usize) -> Result<Array, JsValue> {
    let palette = extract_palette_bytes(&input, n_colors).map_err(js_err)?;
    Ok(js_strings(palette.to_hex()))
}

/// Decode, render and PNG-encode. Returns the PNG and the palette as `RRGGBB`.
pub fn pixelate_bytes(input: &[u8], opts: &PixelArtOptions) -> Result<(Vec<u8>, Vec<String>)> {
    opts.validate()?;
    let img = image::load_from_memory(input)?;
    let art = render(&img, opts)?;
    Ok((art.to_png()?, art.palette.to_hex()))
}

pub fn extract_palette_bytes(input: &[u8], n_colors: usize) -> Result<Palette> {
    if n_colors == 0 {
        return Err(PixelArtError::ZeroColors);
    }
    let img = image::load_from_memory(input)?;
    extract(&img.to_rgba8(), n_colors)
}
