//! Styled terminal output over any [`Write`] sink.

use crate::error::Result;
use crate::style::{ERASE_LINE, PREVIOUS_LINE, STEP_GLYPH, Style};
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Number of blank lines written when no count is given.
pub const DEFAULT_BLANK_LINES: usize = 2;

/// Text printed by [`Printer::success_default`].
pub const DEFAULT_SUCCESS_TEXT: &str = "success.";

/// Writes styled status text to a stream.
///
/// Every operation writes its bytes and flushes before returning, so
/// output shows up immediately even on a line-buffered terminal.
///
/// "Inline" operations leave the cursor on the current line. Pair them
/// with [`Printer::rewrite_previous_line`] to replace a transient hint
/// with a final status:
///
/// ```no_run
/// let mut out = cli_print::Printer::stdout();
/// out.about_to_inline("Fetching", Some("index"), None)?;
/// // ... work ...
/// out.blank_lines(1)?;
/// out.rewrite_previous_line(true)?;
/// out.success("index fetched", false)?;
/// # Ok::<(), cli_print::Error>(())
/// ```
///
/// A `Printer` does no locking of its own. Sharing one stream between
/// threads needs external synchronization.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<Stdout> {
    /// Printer over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    /// Wrap a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Mutably borrow the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Unwrap the printer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    fn raw(&mut self, s: &str) -> Result<()> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    fn paint(&mut self, style: Style, text: impl Display) -> Result<()> {
        write!(self.out, "{}{}", style.spec(), text)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Write `n` newlines.
    pub fn blank_lines(&mut self, n: usize) -> Result<()> {
        self.raw(&"\n".repeat(n))?;
        self.flush()
    }

    /// Write `n` newlines and flush, as the last output before the
    /// caller terminates.
    ///
    /// Exiting is left to the caller; see
    /// [`global::exit_after_blank_lines`](crate::global::exit_after_blank_lines)
    /// for the stdout version that also exits.
    pub fn finish(&mut self, n: usize) -> Result<()> {
        self.blank_lines(n)?;
        self.flush()
    }

    /// Write one space.
    pub fn space(&mut self) -> Result<()> {
        self.spaces(1)
    }

    /// Write `n` spaces.
    pub fn spaces(&mut self, n: usize) -> Result<()> {
        self.raw(&" ".repeat(n))?;
        self.flush()
    }

    /// Write the reset code, followed by a newline unless `inline`.
    pub fn reset_style(&mut self, inline: bool) -> Result<()> {
        self.paint(Style::Reset, "")?;
        if !inline {
            self.raw("\n")?;
        }
        self.flush()
    }

    /// Reset styling and end the line. For `n > 1`, follow with `n - 1`
    /// blank lines.
    pub fn reset_and_newline(&mut self, n: usize) -> Result<()> {
        self.reset_style(false)?;
        if n > 1 {
            self.blank_lines(n - 1)?;
        }
        Ok(())
    }

    /// Move the cursor to the previous line, optionally erasing it.
    pub fn rewrite_previous_line(&mut self, clear: bool) -> Result<()> {
        self.raw(PREVIOUS_LINE)?;
        if clear {
            self.raw(ERASE_LINE)?;
        }
        self.reset_style(true)
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    /// Write `n` step glyphs followed by `trailing_spaces` spaces, then
    /// reset inline.
    pub fn step_markers(&mut self, n: usize, trailing_spaces: usize) -> Result<()> {
        let glyphs: String = std::iter::repeat_n(STEP_GLYPH, n).collect();
        self.paint(Style::Steps, glyphs)?;
        if trailing_spaces > 0 {
            self.spaces(trailing_spaces)?;
        }
        self.reset_style(true)
    }

    /// Write a single step glyph.
    pub fn step(&mut self, trailing_spaces: usize) -> Result<()> {
        self.step_markers(1, trailing_spaces)
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// Write a line of plain text.
    pub fn plain_text(&mut self, text: &str) -> Result<()> {
        self.paint(Style::PlainText, text)?;
        self.reset_and_newline(1)
    }

    /// Write a success message.
    pub fn success(&mut self, text: &str, inline: bool) -> Result<()> {
        self.paint(Style::Success, text)?;
        self.reset_style(inline)
    }

    /// [`Printer::success`] with [`DEFAULT_SUCCESS_TEXT`].
    pub fn success_default(&mut self, inline: bool) -> Result<()> {
        self.success(DEFAULT_SUCCESS_TEXT, inline)
    }

    /// Write `text` as a banner, padded with one space on each side.
    pub fn error(&mut self, text: &str, inline: bool) -> Result<()> {
        self.paint(Style::Error, format_args!(" {text} "))?;
        self.reset_style(inline)
    }

    /// Write a highlighted value.
    pub fn value(&mut self, val: impl Display, inline: bool) -> Result<()> {
        self.paint(Style::Value, val)?;
        self.reset_style(inline)
    }

    /// Write a job header: a blank line, ` - text - `, then two newlines.
    pub fn job(&mut self, text: &str) -> Result<()> {
        self.raw("\n")?;
        self.paint(Style::Job, format_args!(" - {text} - "))?;
        self.reset_and_newline(2)
    }

    // ------------------------------------------------------------------
    // Progress hints
    // ------------------------------------------------------------------

    /// Write an "about to do something" hint.
    ///
    /// `val` and `suffix` are skipped when `None` or empty. Inline hints
    /// end with ` ... ` so a later status can continue the line or
    /// replace it.
    pub fn about_to(
        &mut self,
        text: &str,
        val: Option<&str>,
        suffix: Option<&str>,
        inline: bool,
    ) -> Result<()> {
        self.step(1)?;
        self.paint(Style::AboutTo, text)?;
        if let Some(val) = val.filter(|v| !v.is_empty()) {
            self.paint(Style::Value, format_args!(" {val}"))?;
        }
        if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
            self.paint(Style::AboutTo, format_args!(" {suffix}"))?;
        }
        if inline {
            self.paint(Style::Steps, " ... ")?;
        }
        self.reset_style(inline)
    }

    /// [`Printer::about_to`] in inline mode.
    pub fn about_to_inline(
        &mut self,
        text: &str,
        val: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<()> {
        self.about_to(text, val, suffix, true)
    }

    /// Write a `> text > ` hint.
    pub fn getting(&mut self, text: &str, inline: bool) -> Result<()> {
        self.step(1)?;
        self.paint(Style::Getting, text)?;
        self.space()?;
        self.step(1)?;
        self.reset_style(inline)
    }

    /// Write a `> text >` hint.
    pub fn watching(&mut self, text: &str, inline: bool) -> Result<()> {
        self.step(1)?;
        self.paint(Style::Watching, text)?;
        self.space()?;
        self.step(0)?;
        self.reset_style(inline)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::style::RESET;

    const STEPS: &str = "\x1b[94m";
    const VALUE: &str = "\x1b[96m";
    const YELLOW: &str = "\x1b[93m";

    fn capture(f: impl FnOnce(&mut Printer<Vec<u8>>) -> Result<()>) -> String {
        let mut printer = Printer::new(Vec::new());
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    /// `> ` followed by the inline reset, as written by `step(1)`.
    fn step_one() -> String {
        format!("{STEPS}> {RESET}")
    }

    #[test]
    fn test_spaces_writes_only_spaces() {
        for n in [0, 1, 7] {
            assert_eq!(capture(|p| p.spaces(n)), " ".repeat(n));
        }
        assert_eq!(capture(|p| p.space()), " ");
    }

    #[test]
    fn test_blank_lines() {
        for n in [1, 2, 5] {
            assert_eq!(capture(|p| p.blank_lines(n)), "\n".repeat(n));
        }
        assert_eq!(capture(|p| p.blank_lines(0)), "");
    }

    #[test]
    fn test_finish_writes_blank_lines() {
        assert_eq!(capture(|p| p.finish(DEFAULT_BLANK_LINES)), "\n\n");
    }

    #[test]
    fn test_reset_style() {
        assert_eq!(capture(|p| p.reset_style(true)), RESET);
        assert_eq!(capture(|p| p.reset_style(false)), format!("{RESET}\n"));
    }

    #[test]
    fn test_reset_style_twice() {
        let out = capture(|p| {
            p.reset_style(true)?;
            p.reset_style(true)
        });
        assert_eq!(out, format!("{RESET}{RESET}"));
    }

    #[test]
    fn test_reset_and_newline() {
        assert_eq!(capture(|p| p.reset_and_newline(1)), format!("{RESET}\n"));
        assert_eq!(capture(|p| p.reset_and_newline(3)), format!("{RESET}\n\n\n"));
        assert_eq!(capture(|p| p.reset_and_newline(0)), format!("{RESET}\n"));
    }

    #[test]
    fn test_rewrite_previous_line() {
        assert_eq!(
            capture(|p| p.rewrite_previous_line(true)),
            "\x1b[1A\x1b[2K\x1b[0m"
        );
        assert_eq!(
            capture(|p| p.rewrite_previous_line(false)),
            "\x1b[1A\x1b[0m"
        );
    }

    #[test]
    fn test_step_markers() {
        assert_eq!(
            capture(|p| p.step_markers(3, 2)),
            format!("{STEPS}>>>  {RESET}")
        );
        assert_eq!(capture(|p| p.step_markers(2, 0)), format!("{STEPS}>>{RESET}"));
        assert_eq!(capture(|p| p.step(1)), step_one());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            capture(|p| p.plain_text("hello")),
            format!("\x1b[34mhello{RESET}\n")
        );
    }

    #[test]
    fn test_success() {
        assert_eq!(
            capture(|p| p.success("built", false)),
            format!("\x1b[32mbuilt{RESET}\n")
        );
        assert_eq!(
            capture(|p| p.success_default(true)),
            format!("\x1b[32msuccess.{RESET}")
        );
    }

    #[test]
    fn test_error_is_padded() {
        let out = capture(|p| p.error("bad", false));
        assert_eq!(out, format!("\x1b[41m\x1b[97m bad {RESET}\n"));
        assert!(out.contains(" bad "));
    }

    #[test]
    fn test_value_inline() {
        let out = capture(|p| p.value(42, true));
        assert_eq!(out, format!("{VALUE}42{RESET}"));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_job() {
        let out = capture(|p| p.job("Build"));
        assert!(out.starts_with('\n'));
        assert!(out.contains(" - Build - "));
        assert!(out.ends_with(&format!("{RESET}\n\n")));
        assert_eq!(out, format!("\n\x1b[44m\x1b[97m - Build - {RESET}\n\n"));
    }

    #[test]
    fn test_about_to_full_line() {
        let out = capture(|p| p.about_to("Copying", Some("a.txt"), Some("to dist"), false));
        let expected = format!(
            "{}{YELLOW}Copying{VALUE} a.txt{YELLOW} to dist{RESET}\n",
            step_one()
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_about_to_inline_tail() {
        let out = capture(|p| p.about_to_inline("Compiling", None, None));
        assert_eq!(
            out,
            format!("{}{YELLOW}Compiling{STEPS} ... {RESET}", step_one())
        );
    }

    #[test]
    fn test_about_to_skips_empty_parts() {
        let with_empty = capture(|p| p.about_to("Linking", Some(""), Some(""), false));
        let without = capture(|p| p.about_to("Linking", None, None, false));
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_getting() {
        assert_eq!(
            capture(|p| p.getting("deps", true)),
            format!("{}{YELLOW}deps {}{RESET}", step_one(), step_one())
        );
        assert!(capture(|p| p.getting("deps", false)).ends_with('\n'));
    }

    #[test]
    fn test_watching() {
        assert_eq!(
            capture(|p| p.watching("src", true)),
            format!("{}{YELLOW}src {STEPS}>{RESET}{RESET}", step_one())
        );
    }

    #[test]
    fn test_spinner_idiom() {
        let out = capture(|p| {
            p.about_to_inline("Fetching", Some("index"), None)?;
            p.blank_lines(1)?;
            p.rewrite_previous_line(true)?;
            p.success("fetched", false)
        });
        let rewrite = out.find("\x1b[1A\x1b[2K").unwrap();
        assert!(out[..rewrite].contains(" ... "));
        assert!(out.ends_with(&format!("fetched{RESET}\n")));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut printer = Printer::new(BrokenPipe);
        let err = printer.plain_text("lost").unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        }
        assert!(printer.job("lost").is_err());
    }
}
