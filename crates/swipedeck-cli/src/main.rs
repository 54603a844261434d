use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swipedeck_core::carousel::Point;
use swipedeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "swipedeck")]
#[command(author, version, about = "A swipeable card carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ~/.config/swipedeck/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the carousel (default)
    Run {
        /// TOML file with [[items]] tables; the config's items otherwise
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },
    /// Print the cards of a deck
    List {
        #[arg(short, long)]
        deck: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve one drag release without a terminal
    Drag {
        /// Number of cards
        #[arg(long, default_value_t = 6)]
        count: usize,
        /// Active index before the drag (wraps)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        from: i64,
        /// Horizontal drag offset in px (negative = left)
        #[arg(long, allow_hyphen_values = true)]
        offset: f64,
        /// Release velocity in px/s (negative = left)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        velocity: f64,
    },
    /// Print the glow intensity for a cursor position
    Glow {
        /// Smoothed cursor position, "X,Y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        cursor: Point,
        /// Container center, "X,Y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,
    },
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

/// Install the tracing subscriber
///
/// While the TUI owns the terminal, output goes to the log file in the
/// data directory instead of stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    let runs_tui = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logging(&config, runs_tui)?;

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(&config, deck.as_deref()),
        None => commands::run::run(&config, None),
        Some(Commands::List { deck, json }) => commands::list::run(&config, deck.as_deref(), json),
        Some(Commands::Drag {
            count,
            from,
            offset,
            velocity,
        }) => commands::drag::run(&config, count, from, offset, velocity),
        Some(Commands::Glow { cursor, center }) => commands::glow::run(&config, cursor, center),
        Some(Commands::Init { force }) => commands::init::run(&config_path, force),
    }
}
