use crate::manifest::{self, IconEntry};
use crate::renderer::{IconRenderer, Palette, RenderConfig};
use anyhow::{Context, Result};
use image::RgbImage;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Resolved invocation options, kept clap-free for library callers.
#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub variant: String,
    pub route_a_color: Option<String>,
    pub route_b_color: Option<String>,
}

/// Which optional layers each named variant enables. The presets retrace the
/// iterations the icon went through — flat fill, gradient, soft vignette,
/// glossy sheen — ending at the shipped bold look, which bakes in no gloss or
/// shadow and leaves surface effects to the platform.
const VARIANTS_JSON: &str = r#"
{
  "flat":     { "gradient": false, "vignette": false, "sheen": false, "face_ring": false },
  "gradient": { "gradient": true,  "vignette": false, "sheen": false, "face_ring": false },
  "soft":     { "gradient": true,  "vignette": true,  "sheen": false, "face_ring": false },
  "glossy":   { "gradient": true,  "vignette": true,  "sheen": true,  "face_ring": false },
  "bold":     { "gradient": true,  "vignette": false, "sheen": false, "face_ring": true }
}
"#;

#[derive(Debug, Deserialize)]
struct VariantSpec {
    gradient: bool,
    vignette: bool,
    sheen: bool,
    face_ring: bool,
}

fn resolve_variant(name: &str) -> Result<VariantSpec> {
    let mut table: HashMap<String, VariantSpec> = serde_json::from_str(VARIANTS_JSON).unwrap();

    match table.remove(name) {
        Some(found) => Ok(found),
        None => {
            let mut known: Vec<String> = table.into_keys().collect();
            known.sort();
            anyhow::bail!(
                "Unknown variant: {}. Available variants: {}",
                name,
                known.join(", ")
            )
        }
    }
}

/// Apply CSS color overrides onto the default palette. Unparseable values
/// fall back to the built-in color.
fn build_palette(opts: &Options) -> Palette {
    let mut palette = Palette::default();

    if let Some(color) = &opts.route_a_color {
        palette.route_a = parse_css_color(color).unwrap_or(palette.route_a);
    }
    if let Some(color) = &opts.route_b_color {
        palette.route_b = parse_css_color(color).unwrap_or(palette.route_b);
    }

    palette
}

fn parse_css_color(color: &str) -> Option<[u8; 3]> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            [
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
            ]
        })
        .ok()
}

pub fn generate_icons(opts: Options) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&opts.output).context("Can't create output directory")?;

    let layers = resolve_variant(&opts.variant)?;
    let config = RenderConfig {
        palette: build_palette(&opts),
        gradient: layers.gradient,
        vignette: layers.vignette,
        sheen: layers.sheen,
        face_ring: layers.face_ring,
        ..RenderConfig::default()
    };
    let renderer = IconRenderer::new(config);

    println!("Generating {} clock-face icons...", opts.variant);

    let mut entries = Vec::new();
    for &size in &opts.sizes {
        let icon = renderer.render(size)?;
        let filename = format!("icon-{size}.png");
        save_png(&icon, &opts.output.join(&filename))?;
        println!("  ✓ Generated {filename} ({size}x{size})");

        entries.push(IconEntry::new(filename, size, opts.variant.clone()));
    }

    manifest::write_manifest(&opts.output, entries)?;

    Ok(())
}

fn save_png(icon: &RgbImage, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    icon.write_to(&mut file, image::ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    Ok(())
}
