//! Dialogue parts and override tags
//!
//! A dialogue text field parses into an ordered list of [`DialoguePart`]s:
//! runs of plain text, comments found inside `{...}` blocks, the `\N` and `\h`
//! markers, and one variant per override tag. Every variant holds exactly the
//! values its tag's grammar produces.
//!
//! Tags built by the tag factory carry an `Option`. `None` means the tag was
//! present without a value and the renderer should fall back to the style's
//! default for that property.
//!
//! Times are converted to seconds by the grammar (`\fad`, `\fade`, `\move`,
//! `\t`), and the `\t` acceleration is scaled the same way; karaoke durations
//! stay in centiseconds. Alpha values are opacities, `1.0` being fully opaque.

use alloc::{string::String, vec::Vec};

use super::Color;

/// Value of a `\b` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoldWeight {
    /// `\b0` / `\b1`
    Toggle(bool),
    /// `\b100` through `\b900`
    Numeric(u16),
}

/// One parsed unit of dialogue text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialoguePart {
    /// Plain text outside override blocks
    Text(String),
    /// Text inside an override block that is not a recognized tag
    Comment(String),
    /// `\N` forced line break
    NewLine,
    /// `\h` non-breaking space
    HardSpace,

    /// `\i`
    Italic(Option<bool>),
    /// `\b`
    Bold(Option<BoldWeight>),
    /// `\u`
    Underline(Option<bool>),
    /// `\s`
    StrikeThrough(Option<bool>),

    /// `\bord`
    Border(Option<f64>),
    /// `\xbord`
    BorderX(Option<f64>),
    /// `\ybord`
    BorderY(Option<f64>),
    /// `\shad`
    Shadow(Option<f64>),
    /// `\xshad`
    ShadowX(Option<f64>),
    /// `\yshad`
    ShadowY(Option<f64>),
    /// `\be` edge blur
    Blur(Option<f64>),
    /// `\blur` gaussian blur
    GaussianBlur(Option<f64>),

    /// `\fn`, `None` resets to the style font
    FontName(Option<String>),
    /// `\fs`
    FontSize(Option<f64>),
    /// `\fscx` in percent
    FontScaleX(Option<f64>),
    /// `\fscy` in percent
    FontScaleY(Option<f64>),
    /// `\fsp`
    LetterSpacing(Option<f64>),

    /// `\frx` in degrees
    RotateX(Option<f64>),
    /// `\fry` in degrees
    RotateY(Option<f64>),
    /// `\frz` and `\fr` in degrees
    RotateZ(Option<f64>),
    /// `\fax`
    SkewX(Option<f64>),
    /// `\fay`
    SkewY(Option<f64>),

    /// `\c` and `\1c`
    PrimaryColor(Option<Color>),
    /// `\2c`
    SecondaryColor(Option<Color>),
    /// `\3c`
    OutlineColor(Option<Color>),
    /// `\4c`
    ShadowColor(Option<Color>),

    /// `\alpha`, applies to all four channels
    Alpha(Option<f64>),
    /// `\1a`
    PrimaryAlpha(Option<f64>),
    /// `\2a`
    SecondaryAlpha(Option<f64>),
    /// `\3a`
    OutlineAlpha(Option<f64>),
    /// `\4a`
    ShadowAlpha(Option<f64>),

    /// `\an`, or `\a` remapped to numpad layout
    Alignment(u8),
    /// `\q`
    WrappingStyle(u8),
    /// `\r`, `None` resets to the line's own style
    Reset(Option<String>),

    /// `\k`, duration in centiseconds
    ColorKaraoke(f64),
    /// `\K` and `\kf`, duration in centiseconds
    SweepingColorKaraoke(f64),
    /// `\ko`, duration in centiseconds
    OutlineKaraoke(f64),

    /// `\pos(x,y)`
    Position { x: f64, y: f64 },
    /// `\org(x,y)`
    RotationOrigin { x: f64, y: f64 },
    /// `\move(x1,y1,x2,y2[,t1,t2])`
    Move {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Start and end of the movement in seconds
        times: Option<(f64, f64)>,
    },

    /// `\fad(in,out)` durations in seconds
    Fade { start: f64, end: f64 },
    /// `\fade(a1,a2,a3,t1,t2,t3,t4)`
    ComplexFade {
        /// Opacities before, during and after the fade
        a1: f64,
        a2: f64,
        a3: f64,
        /// Fade boundaries in seconds
        t1: f64,
        t2: f64,
        t3: f64,
        t4: f64,
    },
    /// `\t([t1,t2,][accel,]tags)`
    Transform {
        /// Start and end in seconds, `None` spans the whole line
        interval: Option<(f64, f64)>,
        /// Acceleration as written, divided by 1000
        acceleration: Option<f64>,
        tags: Vec<DialoguePart>,
    },

    /// `\clip(x1,y1,x2,y2)` or `\iclip(...)`
    RectangularClip {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// `true` for `\clip`, `false` for `\iclip`
        inside: bool,
    },
    /// `\clip([scale,]commands)` or `\iclip(...)`
    VectorClip {
        scale: f64,
        /// Raw drawing commands, not decoded
        commands: String,
        inside: bool,
    },

    /// `\p`
    DrawingMode(Option<f64>),
    /// `\pbo`
    DrawingBaselineOffset(Option<f64>),
}

impl DialoguePart {
    /// Whether this part is an override tag rather than text or a marker
    #[must_use]
    pub const fn is_tag(&self) -> bool {
        !matches!(
            self,
            Self::Text(_) | Self::Comment(_) | Self::NewLine | Self::HardSpace
        )
    }

    /// Text of a `Text` or `Comment` part
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Comment(text) => Some(text),
            _ => None,
        }
    }

    /// Append `part` onto `self` when both are text runs or both comments
    ///
    /// Returns the part back when it cannot be merged.
    pub(crate) fn merge(&mut self, part: Self) -> Option<Self> {
        match (self, part) {
            (Self::Text(existing), Self::Text(text))
            | (Self::Comment(existing), Self::Comment(text)) => {
                existing.push_str(&text);
                None
            }
            (_, part) => Some(part),
        }
    }
}

/// Push `part`, merging it into the previous part when both are text runs
/// or both comments
pub(crate) fn push_merged(parts: &mut Vec<DialoguePart>, part: DialoguePart) {
    let leftover = match parts.last_mut() {
        Some(last) => last.merge(part),
        None => Some(part),
    };

    if let Some(part) = leftover {
        parts.push(part);
    }
}
