//! Free functions that print to standard output.
//!
//! Each call locks stdout for the duration of that one operation. A
//! sequence of calls is not atomic; callers printing from several threads
//! must serialize sequences themselves.

use crate::error::Result;
use crate::printer::{DEFAULT_BLANK_LINES, Printer};
use std::io::{self, StdoutLock};

fn with_stdout<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut Printer<StdoutLock<'static>>) -> Result<()>,
{
    let mut printer = Printer::new(io::stdout().lock());
    f(&mut printer)
}

/// Print `n` blank lines
pub fn blank_lines(n: usize) -> Result<()> {
    with_stdout(|p| p.blank_lines(n))
}

/// Print the default number of blank lines (two)
pub fn blank_lines_default() -> Result<()> {
    blank_lines(DEFAULT_BLANK_LINES)
}

/// Print `n` blank lines, then terminate the process.
///
/// Exits with status 0, or 1 if stdout could not be written.
pub fn exit_after_blank_lines(n: usize) -> ! {
    let code = match with_stdout(|p| p.finish(n)) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("Failed to finish output before exit: {e}");
            1
        }
    };
    log::debug!("Exiting with status {code}");
    std::process::exit(code)
}

/// Print one space
pub fn space() -> Result<()> {
    with_stdout(Printer::space)
}

/// Print `n` spaces
pub fn spaces(n: usize) -> Result<()> {
    with_stdout(|p| p.spaces(n))
}

/// Reset styling, ending the line unless `inline`
pub fn reset_style(inline: bool) -> Result<()> {
    with_stdout(|p| p.reset_style(inline))
}

/// Reset styling and end the line, plus `n - 1` blank lines
pub fn reset_and_newline(n: usize) -> Result<()> {
    with_stdout(|p| p.reset_and_newline(n))
}

/// Move back to the previous line, optionally erasing it
pub fn rewrite_previous_line(clear: bool) -> Result<()> {
    with_stdout(|p| p.rewrite_previous_line(clear))
}

/// Print `n` step glyphs with trailing spaces
pub fn step_markers(n: usize, trailing_spaces: usize) -> Result<()> {
    with_stdout(|p| p.step_markers(n, trailing_spaces))
}

/// Print one step glyph with trailing spaces
pub fn step(trailing_spaces: usize) -> Result<()> {
    with_stdout(|p| p.step(trailing_spaces))
}

/// Print a line of plain text
pub fn plain_text(text: &str) -> Result<()> {
    with_stdout(|p| p.plain_text(text))
}

/// Print a success message
pub fn success(text: &str, inline: bool) -> Result<()> {
    with_stdout(|p| p.success(text, inline))
}

/// Print the default success message
pub fn success_default(inline: bool) -> Result<()> {
    with_stdout(|p| p.success_default(inline))
}

/// Print an error banner
pub fn error(text: &str, inline: bool) -> Result<()> {
    with_stdout(|p| p.error(text, inline))
}

/// Print a highlighted value
pub fn value(val: impl std::fmt::Display, inline: bool) -> Result<()> {
    with_stdout(|p| p.value(val, inline))
}

/// Print a job header
pub fn job(text: &str) -> Result<()> {
    with_stdout(|p| p.job(text))
}

/// Print an "about to" hint
pub fn about_to(text: &str, val: Option<&str>, suffix: Option<&str>, inline: bool) -> Result<()> {
    with_stdout(|p| p.about_to(text, val, suffix, inline))
}

/// Print an inline "about to" hint
pub fn about_to_inline(text: &str, val: Option<&str>, suffix: Option<&str>) -> Result<()> {
    with_stdout(|p| p.about_to_inline(text, val, suffix))
}

/// Print a "getting" hint
pub fn getting(text: &str, inline: bool) -> Result<()> {
    with_stdout(|p| p.getting(text, inline))
}

/// Print a "watching" hint
pub fn watching(text: &str, inline: bool) -> Result<()> {
    with_stdout(|p| p.watching(text, inline))
}
