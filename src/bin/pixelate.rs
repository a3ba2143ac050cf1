use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use palette_pixel_art_wasm::{Fit, PixelArtOptions, Resample, render};
use anyhow::Context;
use anyhow::Result;
use log::info;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FitArg {
    /// Stretch to a size×size square
    Square,
    /// Keep aspect ratio, longest side = size
    Contain,
}

impl From<FitArg> for Fit {
    fn from(f: FitArg) -> Self {
        match f {
            FitArg::Square => Fit::Square,
            FitArg::Contain => Fit::Contain,
        }
    }
}

/// Turn images into palette-restricted pixel art thumbnails.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of most frequent colors kept in the palette
    #[arg(short = 'k', long, default_value_t = palette_pixel_art_wasm::options::DEFAULT_COLORS)]
    n_colors: usize,

    /// Thumbnail size (side of the square, or longest side with --fit contain)
    #[arg(short, long, default_value_t = palette_pixel_art_wasm::options::DEFAULT_SIZE)]
    size: u32,

    /// How the image is fitted into the thumbnail
    #[arg(long, value_enum, default_value_t = FitArg::Square)]
    fit: FitArg,

    /// Downsample with nearest-neighbour instead of bilinear filtering
    #[arg(long)]
    nearest: bool,

    /// Optional nearest-neighbour upscale of the result (longest side)
    #[arg(short, long)]
    output_size: Option<u32>,

    /// Comma-separated list of hex colors to use as palette (skip extraction)
    #[arg(short = 'c', long)]
    palette: Option<String>,

    /// Output directory
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,

    /// Output filename prefix (ignored when --out-dir supplied)
    #[arg(short = 'p', long, default_value = "pixelated_")]
    prefix: String,

    /// Print a JSON report of each input's palette to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let palette_vec: Option<Vec<String>> = args.palette.as_ref().map(|s| {
        s.split(',').map(|x| x.trim().trim_start_matches('#').to_uppercase()).collect()
    });

    let opts = PixelArtOptions::new()
        .n_colors(args.n_colors)
        .size(args.size)
        .fit(args.fit.into())
        .resample(if args.nearest { Resample::Nearest } else { Resample::Smooth })
        .output_size(args.output_size)
        .palette(palette_vec);
    opts.validate().context("invalid options")?;

    let mut report = Vec::new();
    for input in &args.inputs {
        let img = image::open(input).with_context(|| format!("failed to read {}", input.display()))?;
        let art = render(&img, &opts).context("pixelate processing failed")?;
        let png = art.to_png().context("PNG encode failed")?;

        let out_path = if let Some(dir) = &args.out_dir {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            dir.join(format!("{stem}.png"))
        } else {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            PathBuf::from(format!("{}{}.png", args.prefix, stem))
        };

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, png).with_context(|| format!("failed to write {}", out_path.display()))?;
        info!("saved → {}", out_path.display());

        report.push(serde_json::json!({
            "input": input.display().to_string(),
            "output": out_path.display().to_string(),
            "width": art.image.width(),
            "height": art.image.height(),
            "palette": art.palette.to_css(),
        }));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
