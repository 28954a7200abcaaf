use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "iconsmith",
    about = "Render or resize macOS app icons into an iconset and package them as .icns"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Iconset directory to (re)create
    #[arg(long, global = true, default_value = "ScreenshotManager.iconset")]
    pub iconset: PathBuf,

    /// Path of the .icns file to produce when packaging
    #[arg(long, global = true, default_value = "ScreenshotManager.icns")]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the built-in translucent icon at every iconset size
    Generate {
        /// Run iconutil on the iconset right after rendering
        #[arg(long)]
        package: bool,
    },

    /// Resample a square source image to every iconset size and package it
    Resize {
        /// Source image, ideally 1024x1024
        #[arg(default_value = "icon.png")]
        source: PathBuf,

        /// Bleed opaque colours into transparent pixels before resampling
        #[arg(
            long,
            long_help = "\
Bleed opaque colours into fully transparent pixels before resampling.

Lanczos resampling mixes neighbouring pixels, so transparent pixels
(usually stored as transparent black) darken the edges of the artwork
in the smaller sizes. Bleeding gives them the colour of the nearest
opaque pixels while keeping them invisible."
        )]
        bleed: bool,
    },
}
