//! iconmask - icon sheet to CSS masks
//!
//! iconmask reads an SVG of icon `<path>` elements and emits CSS mask rules,
//! a text dump of the same rules, or one standalone SVG file per icon.

mod ast;
mod emit;
mod error;
mod export;
mod icons;
mod parse;
mod path;

pub use ast::*;
pub use emit::*;
pub use error::*;
pub use export::*;
pub use icons::*;
pub use parse::*;
pub use path::*;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

/// Default icon sheet read by every command.
pub const DEFAULT_INPUT: &str = "icons.svg";
/// Default stylesheet target.
pub const DEFAULT_CSS_OUTPUT: &str = "icons.css";
/// Default text target.
pub const DEFAULT_TEXT_OUTPUT: &str = "icons.txt";
/// Default directory for exported icons.
pub const DEFAULT_EXPORT_DIR: &str = "export";

/// Rule emission options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Truncate path coordinates to integers (default: true)
    pub truncate_paths: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            truncate_paths: true,
        }
    }
}

/// Read and parse an icon sheet, returning its paths in document order.
pub fn load_icons(input: &Path) -> Result<Vec<IconPath>, IconError> {
    let svg = fs::read_to_string(input)?;
    let doc = parse_svg(&svg)?;
    let icons = collect_icons(&doc);
    info!("{}: {} icon paths", input.display(), icons.len());
    Ok(icons)
}

/// Render the mask rules for an SVG string, one per line.
pub fn render_rules(svg: &str, options: &Options) -> Result<String, IconError> {
    let doc = parse_svg(svg)?;
    let icons = collect_icons(&doc);
    let mut out = Vec::new();
    write_rules(&mut out, &icons, options)?;
    // Rules are built from &str pieces only
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Write the stylesheet for `input` to `output`. Returns the rule count.
pub fn run_css(input: &Path, output: &Path, options: &Options) -> Result<usize, IconError> {
    write_rules_file(input, output, options)
}

/// Write the text dump for `input` to `output`. Same lines as the
/// stylesheet. Returns the rule count.
pub fn run_text(input: &Path, output: &Path, options: &Options) -> Result<usize, IconError> {
    write_rules_file(input, output, options)
}

/// Export one SVG file per icon of `input` into `dir`.
pub fn run_export(input: &Path, dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let icons = load_icons(input)?;
    let written = export_icons(dir, &icons)?;
    info!("exported {} icons to {}", written.len(), dir.display());
    Ok(written)
}

fn write_rules_file(input: &Path, output: &Path, options: &Options) -> Result<usize, IconError> {
    let icons = load_icons(input)?;

    let mut out = BufWriter::new(File::create(output)?);
    write_rules(&mut out, &icons, options)?;
    out.flush()?;

    info!("wrote {} rules to {}", icons.len(), output.display());
    Ok(icons.len())
}
