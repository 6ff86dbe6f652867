//! Converts dig-style DNS output into a hosts file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use dig2hosts::{default_config, load_dig, HostTable};

/// dig2hosts - Convert dig-style DNS output into a hosts file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dig-style DNS output to read
    #[arg(value_name = "INPUT_DIG_STYLE_DNS")]
    input: PathBuf,

    /// Write one line per address instead of only the primary address
    #[arg(short, long)]
    all: bool,

    /// Write the hosts table to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Comment line written before the entries
    #[arg(long, value_name = "TEXT")]
    header: Option<String>,

    /// Log level; overrides RUST_LOG
    #[arg(long)]
    log_level: Option<LogLevel>,
}

/// Log level
#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logger(level: Option<LogLevel>) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder.filter_level(level.to_level_filter());
    }

    builder.init();
}

fn run(cli: &Cli) -> dig2hosts::Result<()> {
    let table = load_dig(&cli.input)?;
    let dump = table.dump()?;

    let mut config = default_config();
    config.all_addresses = cli.all;
    config.header = cli.header.clone();

    let hosts = HostTable::from_dump(&dump, &config);

    match cli.output {
        Some(ref path) => {
            let mut w = BufWriter::new(File::create(path)?);
            hosts.write_to(&mut w)?;
            w.flush()?;
            info!("wrote {} hosts to {}", hosts.hosts.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            hosts.write_to(&mut w)?;
            w.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                exit(1);
            }
        },
    };

    init_logger(cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        exit(2);
    }
}
