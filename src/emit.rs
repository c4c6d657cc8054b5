//! CSS mask rules for icons.

use std::io::{self, Write};

use log::debug;

use crate::Options;
use crate::icons::IconPath;
use crate::path::truncate_path;

/// Icon ids drawn on a light background, which get a black stroke. Every
/// other id gets a white stroke.
pub const LIGHT_ICON_IDS: [&str; 4] = ["yellow", "white", "pink", "orange"];

/// Stroke color for an icon id.
pub fn stroke_for(id: &str) -> &'static str {
    if LIGHT_ICON_IDS.contains(&id) {
        "black"
    } else {
        "white"
    }
}

/// Build the `::after` mask rule for an icon, using its path data as is.
pub fn mask_rule(icon: &IconPath) -> String {
    format!(
        concat!(
            ".{id}::after {{ mask:url('data:image/svg+xml;utf8,",
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">"#,
            r#"<path style="stroke-width: 25px; fill: none; stroke: {stroke};" d="{d}" />"#,
            "</svg>') }}"
        ),
        id = icon.id,
        stroke = stroke_for(&icon.id),
        d = icon.d,
    )
}

/// Write one mask rule per line, in the order given.
pub fn write_rules<W: Write>(out: &mut W, icons: &[IconPath], options: &Options) -> io::Result<()> {
    for icon in icons {
        debug!("rule for {:?}", icon.id);
        let rule = if options.truncate_paths {
            mask_rule(&IconPath::new(icon.id.as_str(), truncate_path(&icon.d)))
        } else {
            mask_rule(icon)
        };
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}
