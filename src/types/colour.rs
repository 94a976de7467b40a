//! Colour type and hex parsing.

use std::fmt;

/// An ARGB colour value.
///
/// Stadium colours always carry an alpha channel: hex `RRGGBB` and `[R, G, B]`
/// forms are opaque, `AARRGGBB` supplies alpha explicitly, and the literal
/// `"transparent"` is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour from a packed `0xAARRGGBB` value.
    pub const fn from_argb(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Default grass background.
    pub const GRASS: Self = Self::rgb(0x71, 0x8c, 0x5a);

    /// Parse a hex colour token.
    ///
    /// Accepts exactly `RRGGBB` (opaque) or `AARRGGBB`. Returns `None` for any
    /// other length or a non-hex character anywhere in the token.
    pub fn from_hex(s: &str) -> Option<Self> {
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match s.len() {
            6 => {
                let rgb = u32::from_str_radix(s, 16).ok()?;
                Some(Self::from_argb(0xff00_0000 | rgb))
            }
            8 => u32::from_str_radix(s, 16).ok().map(Self::from_argb),
            _ => None,
        }
    }

    /// Pack into `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Formats the colour as its stadium token: `transparent`, `RRGGBB` when
/// opaque, `AARRGGBB` otherwise.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::TRANSPARENT {
            write!(f, "transparent")
        } else if self.is_opaque() {
            write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "{:08X}", self.to_argb())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        assert_eq!(Colour::from_hex("ff0000"), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(
            Colour::from_hex("718C5A"),
            Some(Colour::rgb(0x71, 0x8c, 0x5a))
        );
    }

    #[test]
    fn test_from_hex_8digit() {
        assert_eq!(
            Colour::from_hex("80FF0000"),
            Some(Colour::new(255, 0, 0, 0x80))
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Colour::from_hex("zz0000"), None);
        assert_eq!(Colour::from_hex("#ff0000"), None);
        assert_eq!(Colour::from_hex("ff00001"), None);
        assert_eq!(Colour::from_hex("+f0000"), None);
        assert_eq!(Colour::from_hex(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "FF0000");
        assert_eq!(Colour::new(255, 0, 0, 128).to_string(), "80FF0000");
        assert_eq!(Colour::TRANSPARENT.to_string(), "transparent");
    }

    #[test]
    fn test_argb_packing() {
        let c = Colour::from_argb(0x80112233);
        assert_eq!(c, Colour::new(0x11, 0x22, 0x33, 0x80));
        assert_eq!(c.to_argb(), 0x80112233);
    }
}
