//! Line assembly
//!
//! A line reads `[TAG] [prefix] file:line { key: value } | message`. The
//! prefix and keys segments are left out entirely when empty. Line breaks
//! and tabs in the prefix, keys and message are escaped, so every call
//! produces exactly one line.

use super::keys::KeyStyle;
use super::level::Level;

#[cfg(feature = "console")]
use colored::Colorize;

/// Builds printable lines out of the pieces of a log call
#[derive(Debug, Clone)]
pub struct LineFormatter {
    use_colors: bool,
    key_style: KeyStyle,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            key_style: KeyStyle::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            key_style: KeyStyle::default(),
        }
    }

    /// Set the delimiters used around rendered keys
    #[must_use]
    pub fn with_key_style(mut self, style: KeyStyle) -> Self {
        self.key_style = style;
        self
    }

    pub fn key_style(&self) -> &KeyStyle {
        &self.key_style
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Assemble one line, without the trailing newline.
    ///
    /// `keys` is the already rendered keys segment (see
    /// [`Keys::render`](super::keys::Keys::render)). The prefix, keys and
    /// message have line breaks and tabs escaped.
    pub fn format(
        &self,
        level: Level,
        prefix: &str,
        location: &str,
        keys: &str,
        message: &str,
    ) -> String {
        let mut items: Vec<String> = Vec::with_capacity(6);
        items.push(self.paint_tag(level));
        if !prefix.is_empty() {
            items.push(self.paint_prefix(&format!("[{}]", sanitize_message(prefix))));
        }
        items.push(location.to_string());
        if !keys.is_empty() {
            items.push(self.paint_dim(&sanitize_message(keys)));
            items.push(self.paint_dim("|"));
        }
        items.push(sanitize_message(message));
        items.join(" ")
    }

    fn paint_tag(&self, level: Level) -> String {
        let tag = format!("[{}]", level.short_tag());
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                let mut painted = tag.normal();
                if let Some(fg) = level.foreground() {
                    painted = painted.color(colored::Color::from(fg));
                }
                if let Some(bg) = level.background() {
                    painted = painted.on_color(colored::Color::from(bg));
                }
                return painted.to_string();
            }
        }
        tag
    }

    fn paint_prefix(&self, text: &str) -> String {
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                return text.white().to_string();
            }
        }
        text.to_string()
    }

    fn paint_dim(&self, text: &str) -> String {
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                return text.bright_black().to_string();
            }
        }
        text.to_string()
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape line breaks and tabs so one call always produces one line.
pub(crate) fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
