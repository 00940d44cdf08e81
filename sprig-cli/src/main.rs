use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sprig_cli::{EmitMode, build_cmd, inspect_cmd};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "sprig", version, about = "Sprig CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(short = 'l', long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Shortcut for --log-level=debug
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a hyperscript JSON document into a VNode tree.
    Build {
        /// Path to the .json document
        input: PathBuf,
        /// Output directory (default: target/sprig-gen)
        #[arg(long, env = "SPRIG_OUT_DIR")]
        out_dir: Option<PathBuf>,
        /// What to emit: normalized JSON or a text outline
        #[arg(long, value_enum, default_value_t = EmitMode::Json)]
        emit: EmitMode,
    },
    /// Print the outline and node counts of a document.
    Inspect {
        /// Path to the .json document
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LogLevel::Debug } else { cli.log_level };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from(level).into())
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        Commands::Build {
            input,
            out_dir,
            emit,
        } => {
            let out_path = build_cmd(&input, out_dir.as_deref(), emit)?;
            println!("Generated: {}", out_path.display());
        }
        Commands::Inspect { input } => print!("{}", inspect_cmd(&input)?),
    }
    Ok(())
}
