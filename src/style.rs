//! Named style tokens and the ANSI codes behind them.
//!
//! Every token maps to one fixed [`StyleSpec`]. Specs are never combined
//! at runtime: a token with both a foreground and a background carries
//! both in its own record.

use colored::Color;
use std::fmt;

/// Select Graphic Rendition code that clears all styling.
pub const RESET: &str = "\x1b[0m";

/// Moves the cursor up one line.
pub const PREVIOUS_LINE: &str = "\x1b[1A";

/// Erases the line the cursor is on.
pub const ERASE_LINE: &str = "\x1b[2K";

/// Glyph written by step markers.
pub const STEP_GLYPH: char = '>';

/// A named, fixed style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Step markers and the inline `...` tail
    Steps,
    /// Plain informational text
    PlainText,
    /// Success messages
    Success,
    /// Error banners
    Error,
    /// Highlighted values
    Value,
    /// Job headers
    Job,
    /// "About to" hints
    AboutTo,
    /// "Getting" hints
    Getting,
    /// "Watching" hints
    Watching,
    /// Back to the terminal's default styling
    Reset,
}

/// Foreground, background and reset flag of a style token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    /// Foreground color, if any
    pub fg: Option<Color>,
    /// Background color, if any
    pub bg: Option<Color>,
    /// Whether the prefix starts by resetting all styling
    pub reset: bool,
}

impl StyleSpec {
    const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            reset: false,
        }
    }

    const fn fg_on(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            reset: false,
        }
    }

    const RESET: Self = Self {
        fg: None,
        bg: None,
        reset: true,
    };
}

/// Renders the SGR prefix: reset, then background, then foreground.
impl fmt::Display for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reset {
            f.write_str(RESET)?;
        }
        if let Some(bg) = self.bg {
            write!(f, "\x1b[{}m", bg.to_bg_str())?;
        }
        if let Some(fg) = self.fg {
            write!(f, "\x1b[{}m", fg.to_fg_str())?;
        }
        Ok(())
    }
}

impl Style {
    /// All tokens, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Steps,
        Self::PlainText,
        Self::Success,
        Self::Error,
        Self::Value,
        Self::Job,
        Self::AboutTo,
        Self::Getting,
        Self::Watching,
        Self::Reset,
    ];

    /// The fixed record bound to this token.
    pub const fn spec(self) -> StyleSpec {
        match self {
            Self::Steps => StyleSpec::fg(Color::BrightBlue),
            Self::PlainText => StyleSpec::fg(Color::Blue),
            Self::Success => StyleSpec::fg(Color::Green),
            Self::Error => StyleSpec::fg_on(Color::BrightWhite, Color::Red),
            Self::Value => StyleSpec::fg(Color::BrightCyan),
            Self::Job => StyleSpec::fg_on(Color::BrightWhite, Color::Blue),
            Self::AboutTo | Self::Getting | Self::Watching => StyleSpec::fg(Color::BrightYellow),
            Self::Reset => StyleSpec::RESET,
        }
    }

    /// Escape sequence that switches the terminal into this style.
    pub fn prefix(self) -> String {
        self.spec().to_string()
    }

    /// Lowercase name of the token, as used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::PlainText => "plain-text",
            Self::Success => "success",
            Self::Error => "error",
            Self::Value => "value",
            Self::Job => "job",
            Self::AboutTo => "about-to",
            Self::Getting => "getting",
            Self::Watching => "watching",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_color_prefixes() {
        assert_eq!(Style::Steps.prefix(), "\x1b[94m");
        assert_eq!(Style::PlainText.prefix(), "\x1b[34m");
        assert_eq!(Style::Success.prefix(), "\x1b[32m");
        assert_eq!(Style::Value.prefix(), "\x1b[96m");
        assert_eq!(Style::AboutTo.prefix(), "\x1b[93m");
    }

    #[test]
    fn test_background_comes_before_foreground() {
        assert_eq!(Style::Error.prefix(), "\x1b[41m\x1b[97m");
        assert_eq!(Style::Job.prefix(), "\x1b[44m\x1b[97m");
    }

    #[test]
    fn test_hint_styles_share_a_color() {
        assert_eq!(Style::AboutTo.spec(), Style::Getting.spec());
        assert_eq!(Style::Getting.spec(), Style::Watching.spec());
    }

    #[test]
    fn test_reset_token() {
        let spec = Style::Reset.spec();
        assert!(spec.reset);
        assert!(spec.fg.is_none() && spec.bg.is_none());
        assert_eq!(Style::Reset.prefix(), RESET);
    }

    #[test]
    fn test_only_reset_resets() {
        for style in Style::ALL {
            assert_eq!(style.spec().reset, style == Style::Reset, "{style}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Style::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Style::ALL.len());
    }
}
