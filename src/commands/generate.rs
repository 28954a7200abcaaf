use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::iconset;
use crate::manifest::{ManifestEntry, MACOS_ICONSET};
use crate::package::{self, Iconutil};
use crate::render::{self, IconStyle};

pub fn run(cli: &Cli, package: bool) -> Result<()> {
    let style = IconStyle::default();
    generate(&cli.iconset, MACOS_ICONSET, &style)?;

    println!(
        "\n{} Icon set created: {}/",
        "✓".green(),
        cli.iconset.display()
    );

    if package {
        return package::package_iconset(&Iconutil::default(), &cli.iconset, &cli.output);
    }

    println!("\n{} To convert to .icns format, run:", "ℹ".blue());
    println!("  {}", package::suggested_command(&cli.iconset));
    Ok(())
}

/// Renders every manifest entry into a freshly created `dir`.
pub fn generate(dir: &Path, manifest: &[ManifestEntry], style: &IconStyle) -> Result<()> {
    iconset::recreate_dir(dir)?;

    println!("Generating icon sizes...");
    for entry in manifest {
        println!(
            "  Creating {} ({}x{})...",
            entry.file_name, entry.size, entry.size
        );
        let icon = render::render_icon(entry.size, style);
        iconset::save_png(&icon, &dir.join(entry.file_name))?;
    }

    Ok(())
}
