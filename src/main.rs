mod cli;

use std::{
    fs,
    io::{self, Write as _},
};

use anyhow::{Context as _, Result};
use clap::Parser as _;
use cli::{args::Args, options_file::load_options};
use log::info;
use morph_text::Morph;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const FRAME_SEPARATOR: &str = "\x0c\n";

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                args.verbose.log_level_filter()
            )
            .to_lowercase()
            .into()
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(args.color.use_colors()),
        )
        .try_init()
        .context("Failed to initialise tracing")?;

    let options = load_options(args.options.as_deref())?;

    let old = fs::read(&args.old)
        .with_context(|| format!("Cannot read {}", args.old.display()))?;
    let new = fs::read(&args.new)
        .with_context(|| format!("Cannot read {}", args.new.display()))?;
    let morph = Morph::from_bytes(&old, &new, options)?;

    let mut stdout = io::stdout().lock();
    if args.frames {
        let mut count = 0;
        for frame in morph.frames(args.step) {
            if count > 0 {
                stdout.write_all(FRAME_SEPARATOR.as_bytes())?;
            }
            stdout.write_all(frame.text.as_bytes())?;
            count += 1;
        }
        info!("Morph completed after {count} frames");
    } else {
        let frame = morph.at(args.budget);
        stdout.write_all(frame.text.as_bytes())?;
        info!(
            "{} of {} budget left, morph {}",
            frame.remaining,
            frame.budget,
            if frame.is_complete() {
                "complete"
            } else {
                "incomplete"
            }
        );
    }

    stdout.flush().context("Failed to write the morphed text")
}
