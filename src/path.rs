//! Path data truncation.
//!
//! Icon sheets are embedded in CSS as data URIs, so coordinates are cut down
//! to integers before embedding. This is a token-level rewrite, not a path
//! parser: a token such as `M12.5` (command letter fused with a number) is
//! not numeric and is left alone.

use std::borrow::Cow;

/// Truncate every numeric token in path data toward zero.
///
/// Groups are whitespace-separated, tokens within a group comma-separated.
/// The output joins groups with a single space and tokens with a comma, so
/// the group and token counts of the input are preserved.
pub fn truncate_path(d: &str) -> String {
    let mut out = String::with_capacity(d.len());

    for (i, group) in d.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for (j, token) in group.split(',').enumerate() {
            if j > 0 {
                out.push(',');
            }
            out.push_str(&truncate_token(token));
        }
    }

    out
}

/// Truncate a single token toward zero, or return it unchanged if it is not
/// a finite number.
pub fn truncate_token(token: &str) -> Cow<'_, str> {
    match parse_number(token) {
        Some(value) if value.is_finite() => Cow::Owned(format_integer(value.trunc())),
        _ => Cow::Borrowed(token),
    }
}

/// Try to read a token as a float. `None` means "leave it as is".
///
/// A single underscore between two digits is a separator (`1_000.5`).
fn parse_number(token: &str) -> Option<f64> {
    if !token.contains('_') {
        return token.parse::<f64>().ok();
    }

    let bytes = token.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    token.replace('_', "").parse::<f64>().ok()
}

/// Render an integral float as base-10 digits without a decimal point.
fn format_integer(value: f64) -> String {
    if value == 0.0 {
        // -0.5 truncates to -0.0
        return "0".to_string();
    }
    // Exact digits, no saturation for magnitudes past i64
    format!("{:.0}", value)
}
