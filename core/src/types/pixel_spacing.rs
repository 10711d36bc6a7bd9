use crate::extraction::tags::{TagLookup, PIXEL_SPACING};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Physical distance between pixel centers in millimeters
///
/// DICOM stores Pixel Spacing as "row spacing\column spacing".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelSpacing {
    pub row: f64,
    pub column: f64,
}

impl PixelSpacing {
    /// Creates a new PixelSpacing
    pub fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    /// Reads Pixel Spacing from an image, if present and well formed
    pub fn from_image(image: &impl TagLookup) -> Option<Self> {
        image
            .string(PIXEL_SPACING)
            .and_then(|text| Self::parse(&text).ok())
    }

    /// Parses pixel spacing from string
    ///
    /// Accepts "0.7\\0.7", "0.7 0.7" and exponential notation. A single value
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two numbers can be read
    pub fn parse(s: &str) -> Result<Self, String> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let values: Vec<f64> = re
            .find_iter(s)
            .take(2)
            .map(|m| m.as_str().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|e| format!("Failed to parse PixelSpacing from '{}': {}", s, e))?;

        match values.as_slice() {
            [row, column] => Ok(PixelSpacing::new(*row, *column)),
            _ => Err(format!("Failed to parse PixelSpacing from '{}'", s)),
        }
    }
}

impl fmt::Display for PixelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} mm", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::dicom_with;
    use dicom_core::VR;

    #[test]
    fn test_parse_backslash_separator() {
        let ps = PixelSpacing::parse("0.703125\\0.703125").unwrap();
        assert_eq!(ps, PixelSpacing::new(0.703125, 0.703125));
    }

    #[test]
    fn test_parse_space_separator() {
        let ps = PixelSpacing::parse("0.5 0.25").unwrap();
        assert_eq!(ps.row, 0.5);
        assert_eq!(ps.column, 0.25);
    }

    #[test]
    fn test_parse_exponential_notation() {
        let ps = PixelSpacing::parse("1.5e-1\\1.5e-1").unwrap();
        assert_eq!(ps.row, 0.15);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(PixelSpacing::parse("invalid").is_err());
        assert!(PixelSpacing::parse("").is_err());
        assert!(PixelSpacing::parse("0.1").is_err());
    }

    #[test]
    fn test_from_image() {
        let dcm = dicom_with(&[(PIXEL_SPACING, VR::DS, "0.8\\0.6")]);
        assert_eq!(
            PixelSpacing::from_image(&dcm),
            Some(PixelSpacing::new(0.8, 0.6))
        );
        assert_eq!(
            PixelSpacing::from_image(&dicom_with(&[])),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelSpacing::new(0.5, 0.5).to_string(), "0.5 x 0.5 mm");
    }
}
