//! Route color mapping.
//!
//! Route catalogs store colors as `#RRGGBB`. The renderer wants normalized
//! channels, so everything is converted to `Srgba<f32>` at resolve time.

use std::str::FromStr;

use palette::{Srgb, Srgba};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Expected a `#RRGGBB` color, got {0:?}")]
    InvalidFormat(String),

    #[error("Invalid hex digits in color {0:?}")]
    InvalidHex(String),
}

/// Fully transparent black, used for colors that cannot be parsed
pub fn clear_color() -> Srgba<f32> {
    Srgba::new(0.0, 0.0, 0.0, 0.0)
}

/// Parse a `#RRGGBB` string (case-insensitive) into an opaque color
pub fn parse_hex_color(hex: &str) -> Result<Srgba<f32>, ColorError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6 && digits.is_ascii())
        .ok_or_else(|| ColorError::InvalidFormat(hex.to_owned()))?;

    let rgb: Srgb<f32> = Srgb::<u8>::from_str(digits)
        .map_err(|_| ColorError::InvalidHex(hex.to_owned()))?
        .into_format();

    Ok(Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0))
}

/// Lenient mapping used for route colors.
///
/// Malformed input maps to [`clear_color`] so a bad color hides a line instead of
/// failing the whole route.
pub fn color_from_hex(hex: &str) -> Srgba<f32> {
    parse_hex_color(hex).unwrap_or_else(|err| {
        warn!(%err, "using a clear color");
        clear_color()
    })
}

/// Format a color back to `#rrggbb`, dropping alpha
pub fn color_to_hex(color: Srgba<f32>) -> String {
    let rgb: Srgb<u8> = color.color.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
