/// True if the value matches the strict palette color format: `#` followed by
/// exactly six hex digits, case-insensitive.
pub fn is_valid_hex(hex: &str) -> bool {
    match hex.strip_prefix('#') {
        Some(raw) => raw.len() == 6 && raw.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Parse a `#RRGGBB` string to RGB channels (0-255).
/// Returns `None` on anything that fails the strict format check.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex(hex) {
        return None;
    }
    let raw = &hex[1..];
    let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
    let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
    let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_rgb("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_rgb("#00ff00"), Some((0, 255, 0)));
        assert_eq!(parse_hex_rgb("#1e293b"), Some((30, 41, 59)));
    }

    #[test]
    fn parse_uppercase_hex() {
        assert_eq!(parse_hex_rgb("#FF7A00"), Some((255, 122, 0)));
    }

    #[test]
    fn parse_malformed_returns_none() {
        assert_eq!(parse_hex_rgb("notacolor"), None);
        assert_eq!(parse_hex_rgb("#xyz"), None);
        assert_eq!(parse_hex_rgb("#ggg000"), None);
    }

    #[test]
    fn missing_hash_is_invalid() {
        assert_eq!(parse_hex_rgb("ff0000"), None);
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert_eq!(parse_hex_rgb("#fff"), None);
        assert_eq!(parse_hex_rgb("#ff000080"), None);
    }

    #[test]
    fn empty_is_invalid() {
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#"));
    }
}
