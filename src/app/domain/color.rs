use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

/// An opaque sRGB color, stored in settings as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let color: Rgb = "#1C1c1e".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1c, 0x1c, 0x1e));
        assert_eq!(color.to_hex(), "#1c1c1e");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["1c1c1e", "#1c1c1", "#1c1c1e0", "#zzzzzz", "", "#"] {
            let err = bad.parse::<Rgb>().unwrap_err();
            assert!(matches!(err, AppError::InvalidColor(_)), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 128)).unwrap();
        assert_eq!(json, "\"#ff0080\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 0, 128));
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }
}
