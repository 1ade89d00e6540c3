use tracing::warn;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// A color failing the strict `#RRGGBB` format logs a warning and yields 0.0
/// so a single malformed entry never aborts the run.
pub fn relative_luminance(hex: &str) -> f64 {
    match super::hex::parse_hex_rgb(hex) {
        Some((r, g, b)) => {
            0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
        }
        None => {
            warn!(color = hex, "invalid hex color, treating luminance as 0");
            0.0
        }
    }
}

/// Contrast ratio from two relative luminances.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate WCAG contrast ratio between two colors.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    contrast_ratio_from_luminance(relative_luminance(hex1), relative_luminance(hex2))
}
