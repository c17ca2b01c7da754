//! # cli-print
//!
//! Colorized status output for command-line tools.
//!
//! This crate prints short, styled status text:
//! - **Messages**: plain text, success and error banners, highlighted values
//! - **Structure**: job headers and `>` step markers
//! - **Progress hints**: "about to", "getting" and "watching" lines that
//!   can be printed inline and later rewritten in place
//!
//! ## Quick Start
//!
//! ```no_run
//! use cli_print::global as out;
//!
//! out::job("Build")?;
//! out::about_to_inline("Compiling", Some("core"), None)?;
//! // ... do work ...
//! out::success_default(false)?;
//! out::value(42, false)?;
//! # Ok::<(), cli_print::Error>(())
//! ```
//!
//! For tests or non-stdout sinks, wrap any [`std::io::Write`] in a
//! [`Printer`]:
//!
//! ```
//! use cli_print::Printer;
//!
//! let mut printer = Printer::new(Vec::new());
//! printer.error("bad", false)?;
//! let out = String::from_utf8(printer.into_inner()).unwrap();
//! assert!(out.contains(" bad "));
//! # Ok::<(), cli_print::Error>(())
//! ```
//!
//! ## Styles
//!
//! Styles are a fixed set of [`Style`] tokens, each bound to one ANSI
//! foreground/background pair. There is no color detection: codes are
//! always written.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod global;
pub mod printer;
pub mod style;

// Re-export commonly used items at crate root for convenience
pub use error::{Error, Result};
pub use printer::{DEFAULT_BLANK_LINES, DEFAULT_SUCCESS_TEXT, Printer};
pub use style::{Style, StyleSpec};
