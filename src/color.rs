//! Hexadecimal color codes and their HSL decomposition.

use rgb::{RGB, RGB8, RGBA8};
use serde::Serialize;

/// A color in the hue–saturation–lightness model.  All three
/// components are fractions in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue, a full turn being 1.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// The degenerate triple returned for unreadable color codes.
    pub const ZERO: Hsl = Hsl { h: 0., s: 0., l: 0. };
}

/// Specifies the methods a color must provide to be decomposed into
/// [`Hsl`].
pub trait HslColor {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\]).
    fn to_unit_rgb(&self) -> RGB<f64>;

    /// Return the hue, saturation and lightness of the color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_quiz::HslColor;
    /// let red = RGB8::new(255, 0, 0).to_hsl();
    /// assert_eq!((red.h, red.s, red.l), (0., 1., 0.5));
    /// ```
    fn to_hsl(&self) -> Hsl {
        let RGB { r, g, b } = self.to_unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        if max == min { return Hsl { h: 0., s: 0., l } }
        let d = max - min;
        let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
        let h = {
            if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. } };
        Hsl { h: h / 6., s, l }
    }
}

impl HslColor for RGB<f64> {
    #[inline]
    fn to_unit_rgb(&self) -> RGB<f64> { *self }
}

impl HslColor for RGB8 {
    #[inline]
    fn to_unit_rgb(&self) -> RGB<f64> {
        RGB { r: f64::from(self.r) / 255.,
              g: f64::from(self.g) / 255.,
              b: f64::from(self.b) / 255. }
    }
}

impl HslColor for RGBA8 {
    /// The alpha channel plays no role in the decomposition.
    #[inline]
    fn to_unit_rgb(&self) -> RGB<f64> {
        RGB8 { r: self.r, g: self.g, b: self.b }.to_unit_rgb()
    }
}

/// Parse a color code made of six hexadecimal digits, optionally
/// preceded by `#`.  Digits are case insensitive.
pub fn parse_hex(code: &str) -> Option<RGB8> {
    let digits = code.strip_prefix('#').unwrap_or(code);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16).ok();
    Some(RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}

/// Says whether `code` is a well formed dataset color code
/// (`#RRGGBB`, the `#` being mandatory).
pub fn is_color_code(code: &str) -> bool {
    code.starts_with('#') && parse_hex(code).is_some()
}

/// Convert a color to its CSS notation `#rrggbb`.
pub fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Return the HSL decomposition of a hexadecimal color code.
///
/// Unreadable codes yield [`Hsl::ZERO`] instead of an error, so they
/// sort as if they were black.
pub fn hex_to_hsl(code: &str) -> Hsl {
    parse_hex(code).map_or(Hsl::ZERO, |c| c.to_hsl())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Hsl, b: Hsl) -> bool {
        (a.h - b.h).abs() <= 1e-12 && (a.s - b.s).abs() <= 1e-12
            && (a.l - b.l).abs() <= 1e-12
    }

    #[test]
    fn white_and_black() {
        assert_eq!(hex_to_hsl("#FFFFFF"), Hsl { h: 0., s: 0., l: 1. });
        assert_eq!(hex_to_hsl("#000000"), Hsl::ZERO);
    }

    #[test]
    fn malformed_codes_are_zero() {
        for code in ["not-a-hex", "", "#FFF", "#GGGGGG", "##FFFFFF",
                     "#FFFFFFF", "+FFFFF", "#ＦＦＦＦＦＦ"] {
            assert_eq!(hex_to_hsl(code), Hsl::ZERO, "{code:?}");
        }
    }

    #[test]
    fn hash_is_optional_and_case_ignored() {
        assert_eq!(hex_to_hsl("ff0000"), hex_to_hsl("#FF0000"));
        assert_eq!(parse_hex("#a0B1c2"), Some(RGB8::new(0xa0, 0xb1, 0xc2)));
    }

    #[test]
    fn primary_hues() {
        assert!(close(hex_to_hsl("#FF0000"), Hsl { h: 0., s: 1., l: 0.5 }));
        assert!(close(hex_to_hsl("#00FF00"),
                      Hsl { h: 1. / 3., s: 1., l: 0.5 }));
        assert!(close(hex_to_hsl("#0000FF"),
                      Hsl { h: 2. / 3., s: 1., l: 0.5 }));
        assert!(close(hex_to_hsl("#FF00FF"),
                      Hsl { h: 5. / 6., s: 1., l: 0.5 }));
    }

    #[test]
    fn light_color_saturation() {
        // l > 0.5 uses the d / (2 - max - min) branch.
        let hsl = hex_to_hsl("#FF8080");
        assert!(hsl.l > 0.5);
        assert!((hsl.s - 1.).abs() <= 1e-12);
        let grey = hex_to_hsl("#808080");
        assert_eq!(grey.s, 0.);
    }

    #[test]
    fn dataset_codes_need_hash() {
        assert!(is_color_code("#F76C5E"));
        assert!(!is_color_code("F76C5E"));
        assert!(!is_color_code("#F76C5"));
    }

    #[test]
    fn css_round_trip() {
        let c = RGB8::new(0xf7, 0x6c, 0x5e);
        assert_eq!(css_string(c), "#f76c5e");
        assert_eq!(parse_hex(&css_string(c)), Some(c));
    }

    #[test]
    fn alpha_is_ignored() {
        let c = RGBA8::new(10, 200, 30, 7);
        assert_eq!(c.to_hsl(), RGB8::new(10, 200, 30).to_hsl());
    }
}
