use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Opaque sRGB color, written as `#rrggbb` in every stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

    pub const fn r(self) -> u8 {
        self.0
    }
    pub const fn g(self) -> u8 {
        self.1
    }
    pub const fn b(self) -> u8 {
        self.2
    }

    /// Parse a `#rrggbb` literal. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            literal: hex.to_string(),
        };
        let s = hex.strip_prefix('#').unwrap_or(hex);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#5c90ff").unwrap(), Rgb(0x5c, 0x90, 0xff));
        assert_eq!(Rgb::from_hex("3E68C7").unwrap(), Rgb(0x3e, 0x68, 0xc7));
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb(0x4a, 0x7a, 0xe0).to_string(), "#4a7ae0");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "#", "#fff", "#12345g", "#1234567", "#ééé", "#+1+2+3", "+12345"] {
            let err = bad.parse::<Rgb>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidColor { ref literal } if literal == bad),
                "{bad:?} gave {err:?}"
            );
        }
    }
}
