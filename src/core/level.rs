//! Log level definitions
//!
//! The enum and its lookup tables are expanded from [`for_each_level!`], so
//! ordering, short tags and colors all come from a single declaration.

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terminal color tokens a level may be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

#[cfg(feature = "console")]
impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => colored::Color::Black,
            Color::Red => colored::Color::Red,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
            Color::Blue => colored::Color::Blue,
            Color::Magenta => colored::Color::Magenta,
            Color::Cyan => colored::Color::Cyan,
            Color::White => colored::Color::White,
            Color::BrightBlack => colored::Color::BrightBlack,
            Color::BrightRed => colored::Color::BrightRed,
            Color::BrightGreen => colored::Color::BrightGreen,
            Color::BrightYellow => colored::Color::BrightYellow,
            Color::BrightBlue => colored::Color::BrightBlue,
            Color::BrightMagenta => colored::Color::BrightMagenta,
            Color::BrightCyan => colored::Color::BrightCyan,
            Color::BrightWhite => colored::Color::BrightWhite,
        }
    }
}

macro_rules! define_levels {
    ($( ($variant:ident, $ordinal:literal, $tag:literal, $fg:expr, $bg:expr, $plain:ident, $formatted:ident, $keyed:ident) ),* $(,)?) => {
        /// Severity of a log line. Ordered from least to most severe.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(rename_all = "lowercase")]
        #[repr(u8)]
        pub enum Level {
            $( $variant = $ordinal, )*
        }

        impl Level {
            /// Every level, in ascending severity.
            pub const ALL: &'static [Level] = &[$( Level::$variant, )*];

            /// Canonical name, e.g. `"Warning"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Level::$variant => stringify!($variant), )*
                }
            }

            fn tag(&self) -> &'static str {
                match self {
                    $( Level::$variant => $tag, )*
                }
            }

            /// Foreground color of the level tag, if one is configured.
            pub fn foreground(&self) -> Option<Color> {
                match self {
                    $( Level::$variant => $fg, )*
                }
            }

            /// Background color of the level tag, if one is configured.
            pub fn background(&self) -> Option<Color> {
                match self {
                    $( Level::$variant => $bg, )*
                }
            }
        }
    };
}

for_each_level!(define_levels);

impl Level {
    /// Short display tag, e.g. `"WRN"`. Falls back to the canonical name.
    pub fn short_tag(&self) -> &'static str {
        match self.tag() {
            "" => self.name(),
            tag => tag,
        }
    }

    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// True when `self` is as severe as `threshold` or more.
    #[inline]
    pub fn is_at_least(&self, threshold: Level) -> bool {
        self.ordinal() >= threshold.ordinal()
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Trace
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("warn") {
            return Ok(Level::Warning);
        }
        Level::ALL
            .iter()
            .copied()
            .find(|level| {
                level.name().eq_ignore_ascii_case(wanted)
                    || level.short_tag().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
