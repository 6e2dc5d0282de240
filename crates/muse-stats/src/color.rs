//! Hex color parsing and named color family classification
//!
//! Artwork color data arrives as raw hex strings. Classification goes
//! through HSL: lightness separates the neutrals, saturation separates
//! gray from chromatic, and hue bands name the chromatic families. Brown
//! is carved out first from the low-saturation warm region that the hue
//! bands alone would call orange or yellow.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a hex color string cannot be parsed
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color must have 6 digits, got {len}")]
    InvalidLength { len: usize },

    #[error("invalid hex digit in color: {input}")]
    InvalidDigit { input: String },
}

/// A color in HSL space with integer components.
///
/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Parse a hex color ("#AA3311" or "aa3311") into HSL.
    ///
    /// Hue is rounded to the nearest degree, saturation and lightness to
    /// the nearest percent.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength { len: digits.len() });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: hex.to_string(),
            });
        }

        let parse_channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError::InvalidDigit {
                input: hex.to_string(),
            })
        };
        let r = parse_channel(0..2)? as f64 / 255.0;
        let g = parse_channel(2..4)? as f64 / 255.0;
        let b = parse_channel(4..6)? as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let hue = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (hue * 60.0, saturation)
        };

        Ok(Self {
            hue: (hue.round() as u16) % 360,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (lightness * 100.0).round() as u8,
        })
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One of 13 named color classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFamily {
    Red,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    Brown,
    Black,
    White,
    Gray,
}

impl ColorFamily {
    /// All families in canonical legend order
    pub const ALL: [ColorFamily; 13] = [
        ColorFamily::Red,
        ColorFamily::Orange,
        ColorFamily::Yellow,
        ColorFamily::YellowGreen,
        ColorFamily::Green,
        ColorFamily::Cyan,
        ColorFamily::Blue,
        ColorFamily::Purple,
        ColorFamily::Magenta,
        ColorFamily::Brown,
        ColorFamily::Black,
        ColorFamily::White,
        ColorFamily::Gray,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorFamily::Red => "Red",
            ColorFamily::Orange => "Orange",
            ColorFamily::Yellow => "Yellow",
            ColorFamily::YellowGreen => "Yellow-Green",
            ColorFamily::Green => "Green",
            ColorFamily::Cyan => "Cyan",
            ColorFamily::Blue => "Blue",
            ColorFamily::Purple => "Purple",
            ColorFamily::Magenta => "Magenta",
            ColorFamily::Brown => "Brown",
            ColorFamily::Black => "Black",
            ColorFamily::White => "White",
            ColorFamily::Gray => "Gray",
        }
    }

    /// Representative hex swatch for legend rendering
    pub fn swatch_hex(&self) -> &'static str {
        match self {
            ColorFamily::Red => "#D32F2F",
            ColorFamily::Orange => "#EF6C00",
            ColorFamily::Yellow => "#F9A825",
            ColorFamily::YellowGreen => "#9E9D24",
            ColorFamily::Green => "#2E7D32",
            ColorFamily::Cyan => "#00838F",
            ColorFamily::Blue => "#1565C0",
            ColorFamily::Purple => "#6A1B9A",
            ColorFamily::Magenta => "#AD1457",
            ColorFamily::Brown => "#6D4C41",
            ColorFamily::Black => "#212121",
            ColorFamily::White => "#FAFAFA",
            ColorFamily::Gray => "#9E9E9E",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classify an HSL color into its family.
///
/// Brown takes priority over the warm hue bands, then the neutrals by
/// saturation, then the chromatic bands. The final Gray arm is a safety
/// default for inputs the bands cannot reach.
pub fn classify(hsl: Hsl) -> ColorFamily {
    let Hsl {
        hue,
        saturation,
        lightness,
    } = hsl;

    if (15..40).contains(&saturation)
        && (20..=60).contains(&lightness)
        && (20..=60).contains(&hue)
    {
        return ColorFamily::Brown;
    }

    if saturation < 15 {
        return if lightness < 20 {
            ColorFamily::Black
        } else if lightness > 80 {
            ColorFamily::White
        } else {
            ColorFamily::Gray
        };
    }

    match hue {
        0..=14 | 345..=359 => ColorFamily::Red,
        15..=34 => ColorFamily::Orange,
        35..=64 => ColorFamily::Yellow,
        65..=94 => ColorFamily::YellowGreen,
        95..=154 => ColorFamily::Green,
        155..=199 => ColorFamily::Cyan,
        200..=259 => ColorFamily::Blue,
        260..=299 => ColorFamily::Purple,
        300..=344 => ColorFamily::Magenta,
        _ => ColorFamily::Gray,
    }
}

/// Classify a hex string directly; unparseable input resolves to Gray
pub fn family_of_hex(hex: &str) -> ColorFamily {
    match Hsl::from_hex(hex) {
        Ok(hsl) => classify(hsl),
        Err(_) => ColorFamily::Gray,
    }
}

/// Canonical uppercase form used as a frequency-table key ("#AA3311").
///
/// Returns `None` for strings that are not a 6-digit hex color; keys never
/// affect classification, which works on the parsed HSL values.
pub fn normalize_hex(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_uppercase()))
}
