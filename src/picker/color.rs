// ============================================================================
// COLOR TEXT FORMATTING — canonical hex and rgb() forms
// ============================================================================

/// `"#RRGGBB"` — uppercase, zero-padded.
pub fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// `"rgb(r, g, b)"` — decimal components, comma-space separated.
pub fn rgb_text(r: u8, g: u8, b: u8) -> String {
    format!("rgb({}, {}, {})", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_hex(s: &str) -> (u8, u8, u8) {
        let v = u32::from_str_radix(s.strip_prefix('#').unwrap(), 16).unwrap();
        (((v >> 16) & 0xFF) as u8, ((v >> 8) & 0xFF) as u8, (v & 0xFF) as u8)
    }

    #[test]
    fn test_hex_zero_padded_uppercase() {
        assert_eq!(hex(0, 0, 0), "#000000");
        assert_eq!(hex(255, 255, 255), "#FFFFFF");
        assert_eq!(hex(1, 2, 3), "#010203");
        assert_eq!(hex(171, 205, 239), "#ABCDEF");
    }

    #[test]
    fn test_hex_parse_round_trip() {
        // Sweep each channel independently plus a diagonal; exhaustive
        // 2^24 coverage adds nothing over this.
        for v in 0..=255u8 {
            assert_eq!(parse_hex(&hex(v, 0, 0)), (v, 0, 0));
            assert_eq!(parse_hex(&hex(0, v, 0)), (0, v, 0));
            assert_eq!(parse_hex(&hex(0, 0, v)), (0, 0, v));
            assert_eq!(parse_hex(&hex(v, v.wrapping_add(85), v.wrapping_add(170))), (
                v,
                v.wrapping_add(85),
                v.wrapping_add(170)
            ));
        }
    }

    #[test]
    fn test_rgb_text_form() {
        assert_eq!(rgb_text(255, 0, 0), "rgb(255, 0, 0)");
        assert_eq!(rgb_text(0, 0, 0), "rgb(0, 0, 0)");
        assert_eq!(rgb_text(12, 120, 7), "rgb(12, 120, 7)");
    }
}
