//! Replays queue command traces and generates sort stress traces.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use link_queue::{
    SortStrategy,
    trace::{run_trace, write_sort_trace},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qtrace")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay or generate command traces for the linked string queue")]
struct Cli {
    /// Logging level, overridden by RUST_LOG
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace file (or stdin) against a queue
    Run {
        /// Sort strategy used by `sort`
        #[arg(short, long, env = "QTRACE_STRATEGY", default_value_t = SortStrategy::default())]
        strategy: SortStrategy,

        /// Trace file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Write a trace inserting every lowercase string of a fixed length
    Gen {
        /// Length of the generated strings
        #[arg(short, long, default_value_t = 5)]
        len: u32,

        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Run { strategy, file } => {
            let report = match file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    run_trace(BufReader::new(file), strategy)?
                }
                None => run_trace(io::stdin().lock(), strategy)?,
            };
            println!(
                "{} commands, {} removals, strategy {}",
                report.commands, report.removed, strategy
            );
        }
        Commands::Gen { len, output } => {
            let count = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    let mut out = BufWriter::new(file);
                    let count = write_sort_trace(&mut out, len)?;
                    out.flush()?;
                    count
                }
                None => {
                    let mut out = BufWriter::new(io::stdout().lock());
                    let count = write_sort_trace(&mut out, len)?;
                    out.flush()?;
                    count
                }
            };
            eprintln!("finished: {count} strings");
        }
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
