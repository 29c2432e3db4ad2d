//! Spotlight CLI
//!
//! Runs the gradient spotlight marquee in the terminal, dumps its frames
//! without a terminal, or writes a starter `spotlight.toml`.

mod config;
mod frames;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spotlight_platform_terminal::TerminalHost;
use spotlight_widgets::SpotlightControl;
use tracing_subscriber::EnvFilter;

use crate::config::{SpotlightConfig, CONFIG_FILE};
use crate::frames::FrameFormat;

/// Upper limit for `spotlight frames --count`
const MAX_FRAMES: i64 = 10_000;

/// Gradient spotlight marquee for the terminal
#[derive(Parser, Debug)]
#[command(name = "spotlight")]
#[command(about = "Gradient spotlight marquee for the terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./spotlight.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Label text, overriding the config
    #[arg(long, global = true)]
    text: Option<String>,

    /// Draw the demonstration rows above the marquee
    #[arg(long, global = true)]
    preview_rows: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate the marquee until q, Esc or Ctrl-C (default)
    Run,

    /// Render frames one tick apart and print them
    Frames {
        /// Number of frames
        #[arg(
            short = 'n',
            long,
            default_value = "10",
            value_parser = clap::value_parser!(u32).range(1..=MAX_FRAMES)
        )]
        count: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FrameFormat,

        /// Grid width in cells (fits the label when omitted)
        #[arg(long)]
        cols: Option<u16>,

        /// Grid height in cells (fits the rows when omitted)
        #[arg(long)]
        rows: Option<u16>,
    },

    /// Write a config file with the default settings
    Init {
        /// Where to write it
        #[arg(default_value = CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let command = cli.command.unwrap_or(Commands::Run);
    if let Commands::Init { path, force } = &command {
        return cmd_init(path, *force);
    }

    let mut config = SpotlightConfig::load(cli.config.as_deref())?;
    if let Some(text) = cli.text {
        config.marquee.text = text;
    }
    if cli.preview_rows {
        config.marquee.preview_rows = true;
    }

    match command {
        Commands::Run => cmd_run(&config),
        Commands::Frames {
            count,
            format,
            cols,
            rows,
        } => cmd_frames(&config, count, format, cols, rows),
        Commands::Init { .. } => Ok(()),
    }
}

/// Logs go to stderr so they never interleave with frames on stdout
fn init_logging(cli: &Cli) {
    let live = matches!(cli.command, None | Some(Commands::Run));
    let default = match (cli.verbose, live) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_run(config: &SpotlightConfig) -> Result<()> {
    let style = config.marquee.style()?;
    let options = config.terminal.host_options()?;

    tracing::info!(text = %style.text, "starting marquee");
    let mut control = SpotlightControl::new(style);
    let host = TerminalHost::new(options).context("Failed to open the terminal")?;
    host.run(&mut control).context("Terminal session failed")?;
    Ok(())
}

fn cmd_frames(
    config: &SpotlightConfig,
    count: u32,
    format: FrameFormat,
    cols: Option<u16>,
    rows: Option<u16>,
) -> Result<()> {
    let style = config.marquee.style()?;
    let options = config.terminal.host_options()?;

    let (fit_cols, fit_rows) = frames::canvas_size(&style, &options);
    let size = (cols.unwrap_or(fit_cols), rows.unwrap_or(fit_rows));

    let dumps = frames::render_frames(style, &options, size, count, format)?;
    let mut out = io::stdout().lock();
    frames::write_frames(&mut out, &dumps, format)?;
    out.flush()?;
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let content = SpotlightConfig::default().to_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}
