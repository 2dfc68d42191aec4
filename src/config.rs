//! Built-in render constants for the Veda AI icons
//!
//! The constants are kept as an embedded JSON document and deserialized at
//! startup, so a malformed color is reported as an error instead of being
//! silently replaced.

use anyhow::{Context, Result};
use image::Rgba;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

const BUILTIN_CONFIG_JSON: &str = r##"
{
  "size": 1024,
  "output_dir": "assets/icon",
  "palette": {
    "primary": "#6C63FF",
    "accent": "#FF6B6B",
    "heart": "#FFFFFF"
  }
}
"##;

/// Everything a render pass needs to know
#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    /// Edge length of the square canvas in pixels
    pub size: u32,

    /// Directory the PNG files are written into
    pub output_dir: PathBuf,

    /// Hex colors used by the renderer
    pub palette: Palette,
}

/// Theme colors as CSS hex strings
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    /// Background purple
    pub primary: String,

    /// Coral from the brand theme, not drawn by either icon
    pub accent: String,

    /// Heart fill
    pub heart: String,
}

/// Palette converted to pixel values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub primary: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub heart: Rgba<u8>,
}

impl IconConfig {
    /// Parses the embedded constants
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_CONFIG_JSON).context("Failed to parse built-in icon config")
    }

    /// Returns a copy rendering at a different canvas size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Returns a copy writing into a different directory
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Palette {
    pub fn resolve(&self) -> Result<ResolvedPalette> {
        Ok(ResolvedPalette {
            primary: parse_color(&self.primary).context("palette.primary")?,
            accent: parse_color(&self.accent).context("palette.accent")?,
            heart: parse_color(&self.heart).context("palette.heart")?,
        })
    }
}

/// Parse a CSS color into an opaque RGBA pixel
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid color: {}", color))?;

    // Round instead of truncating so 0x6C survives the f32 trip as 108
    let channel = |c: f32| (c * 255.).round().clamp(0., 255.) as u8;

    Ok(Rgba([
        channel(srgb.red),
        channel(srgb.green),
        channel(srgb.blue),
        255,
    ]))
}
