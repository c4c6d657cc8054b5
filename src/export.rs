//! Standalone per-icon SVG files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::IconError;
use crate::icons::IconPath;

/// Build a minimal standalone SVG for one icon. The path data is not
/// truncated and no styling is applied.
///
/// The file content is exactly the `<svg>` element, with no trailing
/// newline.
pub fn icon_svg(icon: &IconPath) -> String {
    format!(r#"<svg viewBox="0 0 512 512"><path d="{}" /></svg>"#, icon.d)
}

/// Write `{dir}/{id}.svg` for every icon, creating `dir` if needed.
///
/// Returns the written paths in input order. An icon whose id repeats an
/// earlier one overwrites that file.
pub fn export_icons(dir: &Path, icons: &[IconPath]) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(dir).map_err(|source| IconError::Export {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut written = Vec::with_capacity(icons.len());

    for icon in icons {
        if !seen.insert(icon.id.as_str()) {
            warn!("duplicate icon id {:?}, overwriting", icon.id);
        }

        let path = dir.join(format!("{}.svg", icon.id));
        debug!("exporting {}", path.display());
        fs::write(&path, icon_svg(icon)).map_err(|source| IconError::Export {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}
