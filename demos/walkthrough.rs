//! Prints every kind of cli-print output, including an in-place rewrite.
//!
//! ```sh
//! cargo run --example walkthrough -- --delay-ms 800
//! ```

use anyhow::Result;
use clap::Parser;
use cli_print::{Printer, global};
use std::io::Write;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(about = "Walk through cli-print output styles")]
struct Cli {
    /// How long each simulated task takes
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// End with an error banner and exit through the exit helper
    #[arg(long)]
    fail: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Print an inline hint, wait, then replace it with a final status.
fn task<W: Write>(out: &mut Printer<W>, name: &str, target: &str, delay: Duration) -> Result<()> {
    out.about_to_inline(name, Some(target), None)?;
    out.blank_lines(1)?;
    thread::sleep(delay);
    out.rewrite_previous_line(true)?;
    out.step(1)?;
    out.plain_text(&format!("{name} {target}"))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let delay = Duration::from_millis(cli.delay_ms);
    let mut out = Printer::stdout();

    out.job("Build")?;
    for (name, target) in [("Compiling", "core"), ("Linking", "cli")] {
        task(&mut out, name, target, delay)?;
    }

    out.about_to("Copying", Some("target/release/app"), Some("to dist/"), false)?;
    out.getting("dependencies", false)?;
    out.watching("src/", false)?;

    out.step_markers(3, 1)?;
    out.plain_text("artifacts")?;
    out.step(2)?;
    out.value(3, false)?;

    if cli.fail {
        out.error("upload failed", false)?;
        log::info!("Exiting after failure banner");
        global::exit_after_blank_lines(1);
    }

    out.success_default(false)?;
    out.finish(1)?;
    Ok(())
}
