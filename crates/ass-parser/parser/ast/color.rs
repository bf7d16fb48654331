//! Color values decoded from `&H...&` literals
//!
//! ASS stores colors as `BBGGRR` (optionally prefixed with an `AA` alpha byte),
//! i.e. byte-reversed relative to RGB. Decoding happens in the grammar; this
//! type only holds the result in standard RGB order. Alpha is an opacity in
//! `0.0..=1.0`, already inverted from the ASS transparency byte.

use core::fmt;

/// RGB color with opacity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Opacity, 1.0 is fully opaque
    pub alpha: f64,
}

impl Color {
    /// Fully opaque color
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Color with explicit opacity
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Same color with a different opacity
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// RGBA bytes with opacity scaled to `0..=255`
    ///
    /// # Example
    ///
    /// ```rust
    /// use ass_parser::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).to_rgba_bytes(), [255, 0, 0, 255]);
    /// assert_eq!(Color::rgba(0, 0, 255, 0.0).to_rgba_bytes(), [0, 0, 255, 0]);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba_bytes(&self) -> [u8; 4] {
        let alpha = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.red, self.green, self.blue, alpha]
    }
}

/// CSS `rgba(...)` notation
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}
