use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use colored::Colorize;

/// Bundles an iconset directory into a single icon container file.
pub trait Packager {
    fn package(&self, iconset: &Path, output: &Path) -> Result<()>;
}

/// Runs macOS `iconutil -c icns <iconset> -o <output>` and waits for it.
#[derive(Debug, Clone)]
pub struct Iconutil {
    program: OsString,
}

impl Default for Iconutil {
    fn default() -> Self {
        Self::with_program("iconutil")
    }
}

impl Iconutil {
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Packager for Iconutil {
    fn package(&self, iconset: &Path, output: &Path) -> Result<()> {
        let result = Command::new(&self.program)
            .args(["-c", "icns"])
            .arg(iconset)
            .arg("-o")
            .arg(output)
            .output()
            .with_context(|| {
                format!(
                    "Failed to run {} (it ships with macOS)",
                    self.program.to_string_lossy()
                )
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            bail!(
                "{} exited with {}: {}",
                self.program.to_string_lossy(),
                result.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}

/// The command to run by hand to turn `iconset` into an `.icns` file.
pub fn suggested_command(iconset: &Path) -> String {
    format!("iconutil -c icns {}", iconset.display())
}

/// Packages `iconset` into `output` and reports the outcome on stdout.
///
/// A packager failure is printed and returned as a short error, so callers
/// only need `?` to turn it into a non-zero exit.
pub fn package_iconset(packager: &dyn Packager, iconset: &Path, output: &Path) -> Result<()> {
    println!("\nPackaging {}...", output.display());

    if let Err(err) = packager.package(iconset, output) {
        println!("{} Packaging failed: {:#}", "✗".red(), err);
        bail!("Failed to create {}", output.display());
    }

    println!("{} Iconset: {}", "✓".green(), iconset.display());
    println!("{} Icon: {}", "✓".green(), output.display());
    Ok(())
}
