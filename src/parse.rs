//! Parsing of color space names and hex colors.

use std::str::FromStr;

use crate::{Color, Component, Space};

/// Errors returned when parsing a [`Space`] or a [`Color`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The name does not match any supported color space.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),
    /// The color string was empty.
    #[error("empty color string")]
    Empty,
    /// A hex color must have 3, 4, 6 or 8 digits.
    #[error("invalid hex length: {0}")]
    InvalidLength(usize),
    /// The color string contained something other than hex digits.
    #[error("invalid hex digits")]
    InvalidHex,
}

impl FromStr for Space {
    type Err = ParseError;

    /// Parse a space from its kebab-case name. Case is ignored, `_` and spaces
    /// may be used as separators and `linear-` is accepted in place of
    /// `degamma-`. Lab, Lch, LMS and IPT only exist in their degamma form, so
    /// the prefix is optional for them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let name = match name.strip_prefix("linear-") {
            Some(rest) => format!("degamma-{rest}"),
            None => name,
        };

        let name = match name.as_str() {
            "lab" | "lch" | "ipt" | "lms-compressed" => format!("degamma-{name}"),
            _ => name,
        };

        Space::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| ParseError::UnknownSpace(s.to_string()))
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl Color {
    /// Parse a gamma encoded sRGB color from hex notation.
    ///
    /// The allowed formats, with or without a leading `#`, are:
    /// * RGB
    /// * RGBA
    /// * RRGGBB
    /// * RRGGBBAA
    pub fn from_hex(hex: &str) -> Result<Color, ParseError> {
        use ParseError::*;

        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.is_empty() {
            return Err(Empty);
        }

        let nibble = |c: u8| -> Result<u8, ParseError> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(InvalidHex),
            }
        };

        let bytes = hex.as_bytes();
        let channels = match bytes.len() {
            3 | 4 => bytes
                .iter()
                .map(|&c| nibble(c).map(|n| n * 17))
                .collect::<Result<Vec<_>, _>>()?,
            6 | 8 => bytes
                .chunks(2)
                .map(|pair| -> Result<u8, ParseError> {
                    Ok(nibble(pair[0])? << 4 | nibble(pair[1])?)
                })
                .collect::<Result<Vec<_>, _>>()?,
            len => return Err(InvalidLength(len)),
        };

        let channel = |i: usize| channels.get(i).map_or(1.0, |&v| v as Component / 255.0);

        Ok(Color::rgb(channel(0), channel(1), channel(2), channel(3)))
    }
}
