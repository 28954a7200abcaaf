use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use image::imageops::{self, FilterType};

use crate::bleed::alpha_bleed;
use crate::cli::Cli;
use crate::iconset;
use crate::manifest::{ManifestEntry, MACOS_ICONSET};
use crate::package::{self, Iconutil, Packager};

pub fn run(cli: &Cli, source: &Path, bleed: bool) -> Result<()> {
    resize_and_package(
        source,
        &cli.iconset,
        &cli.output,
        MACOS_ICONSET,
        bleed,
        &Iconutil::default(),
    )
}

/// Resizes `source` into `iconset`, then hands the directory to `packager`.
pub fn resize_and_package(
    source: &Path,
    iconset: &Path,
    output: &Path,
    manifest: &[ManifestEntry],
    bleed: bool,
    packager: &dyn Packager,
) -> Result<()> {
    resize(source, iconset, manifest, bleed)?;
    package::package_iconset(packager, iconset, output)
}

/// Writes one Lanczos-resampled PNG per manifest entry into a fresh `dir`.
///
/// Nothing on disk is touched until the source has been found and decoded.
pub fn resize(source: &Path, dir: &Path, manifest: &[ManifestEntry], bleed: bool) -> Result<()> {
    if !source.exists() {
        bail!("Source image not found: {}", source.display());
    }

    let mut img = image::open(source)
        .with_context(|| format!("Failed to open source image: {}", source.display()))?
        .to_rgba8();

    let (w, h) = img.dimensions();
    if w != h {
        println!(
            "{} {} is {}x{}, not square; icons will be stretched",
            "!".yellow(),
            source.display(),
            w,
            h
        );
    }

    if bleed {
        alpha_bleed(&mut img);
    }

    iconset::recreate_dir(dir)?;

    println!("Resizing {}...", source.display());
    for entry in manifest {
        println!(
            "  Creating {} ({}x{})...",
            entry.file_name, entry.size, entry.size
        );
        let resized = imageops::resize(&img, entry.size, entry.size, FilterType::Lanczos3);
        iconset::save_png(&resized, &dir.join(entry.file_name))?;
    }

    Ok(())
}
