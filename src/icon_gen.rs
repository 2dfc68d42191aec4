use crate::config::{IconConfig, ResolvedPalette};
use crate::shapes::{fill_disc, fill_rect, fill_triangle, Disc, Rect, Triangle};
use anyhow::{Context, Result};
use image::{DynamicImage, Rgba, RgbaImage};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const APP_ICON_FILE: &str = "app_icon.png";
pub const FOREGROUND_ICON_FILE: &str = "app_icon_foreground.png";

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Heart coordinates derived from the canvas size
///
/// The heart sits inside a margin of a third of the canvas on every side.
/// Its top is two discs of radius `r`, its point is a triangle whose apex
/// is `bottom`, and a rectangle fills the seam between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartGeometry {
    pub margin: i32,
    pub r: i32,
    pub cx_left: i32,
    pub cx_right: i32,
    pub cy: i32,
    pub bottom: (i32, i32),
}

impl HeartGeometry {
    pub fn for_size(size: u32) -> Self {
        let size = size as i32;
        let margin = size / 3;
        let heart_size = size - 2 * margin;
        let r = heart_size / 4;

        Self {
            margin,
            r,
            cx_left: margin + r,
            cx_right: size - margin - r,
            cy: margin + r,
            bottom: (size / 2, size - margin),
        }
    }

    pub fn left_lobe(&self) -> Disc {
        Disc::from_center(self.cx_left, self.cy, self.r)
    }

    pub fn right_lobe(&self) -> Disc {
        Disc::from_center(self.cx_right, self.cy, self.r)
    }

    pub fn point(&self) -> Triangle {
        Triangle::new(
            (self.cx_left - self.r, self.cy),
            (self.cx_right + self.r, self.cy),
            self.bottom,
        )
    }

    pub fn filler(&self) -> Rect {
        Rect::new(
            self.cx_left - self.r,
            self.cy,
            self.cx_right + self.r,
            self.bottom.1,
        )
    }

    /// Bounding box of every heart pixel, inclusive
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.cx_left - self.r,
            self.cy - self.r,
            self.cx_right + self.r,
            self.bottom.1,
        )
    }
}

/// Alpha of the vignette disc drawn at gradient step `i`
///
/// Step 0 is the outermost disc and fully opaque; the alpha falls linearly
/// toward the center.
pub fn gradient_alpha(i: u32, size: u32) -> u8 {
    let half = (size / 2).max(1) as f32;
    (255.0 * (1.0 - i as f32 / half)).round().clamp(0.0, 255.0) as u8
}

/// Bounding box of the flat background disc, inset by an eighth of the canvas
pub fn background_disc(size: u32) -> Disc {
    let size = size as i32;
    let margin = size / 8;
    Disc::from_bounds(margin, margin, size - margin, size - margin)
}

pub fn generate_icons(config: &IconConfig) -> Result<()> {
    println!("Generating Veda AI app icons...");
    log::debug!(
        "Rendering {}px icons into {}",
        config.size,
        config.output_dir.display()
    );

    // The render steps expect the directory to exist already
    create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Can't create output directory {}",
            config.output_dir.display()
        )
    })?;

    render_app_icon(config)?;
    render_foreground_icon(config)?;

    println!("\n✅ Icon generation complete!");
    println!("Run: flutter pub run flutter_launcher_icons");
    Ok(())
}

/// Render the main app icon: vignette, flat disc and heart
pub fn render_app_icon(config: &IconConfig) -> Result<PathBuf> {
    let palette = config.palette.resolve()?;
    let img = draw_app_icon(config.size, &palette);

    let path = config.output_dir.join(APP_ICON_FILE);
    save_png(&img, &path)?;
    println!("✓ Created {}", APP_ICON_FILE);
    Ok(path)
}

/// Render the adaptive foreground: the heart alone on a transparent canvas
pub fn render_foreground_icon(config: &IconConfig) -> Result<PathBuf> {
    let palette = config.palette.resolve()?;
    let img = draw_foreground_icon(config.size, &palette);

    let path = config.output_dir.join(FOREGROUND_ICON_FILE);
    save_png(&img, &path)?;
    println!("✓ Created {}", FOREGROUND_ICON_FILE);
    Ok(path)
}

pub fn draw_app_icon(size: u32, palette: &ResolvedPalette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let edge = size as i32;
    let [r, g, b, _] = palette.primary.0;

    for i in 0..size / 2 {
        let step = i as i32;
        let color = Rgba([r, g, b, gradient_alpha(i, size)]);
        fill_disc(
            &mut img,
            Disc::from_bounds(step, step, edge - step, edge - step),
            color,
        );
    }

    // Covers all but the outer ring of the vignette
    fill_disc(&mut img, background_disc(size), palette.primary);

    draw_heart(&mut img, size, palette.heart);
    img
}

pub fn draw_foreground_icon(size: u32, palette: &ResolvedPalette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    draw_heart(&mut img, size, palette.heart);
    img
}

fn draw_heart(img: &mut RgbaImage, size: u32, color: Rgba<u8>) {
    let heart = HeartGeometry::for_size(size);
    log::debug!("Heart geometry for {size}px canvas: {heart:?}");

    fill_disc(img, heart.left_lobe(), color);
    fill_disc(img, heart.right_lobe(), color);
    fill_triangle(img, heart.point(), color);

    // Lobes and triangle alone leave a seam along the lobes' center line
    fill_rect(img, heart.filler(), color);
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    if !dir.as_os_str().is_empty() && !dir.is_dir() {
        anyhow::bail!("Output directory {} does not exist", dir.display());
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut writer, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;

    log::info!("Wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}
