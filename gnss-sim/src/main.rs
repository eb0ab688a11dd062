use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use create_serial::{create_serial, DEFAULT_BAUD_RATE};
use display::StatusScreen;
use field_config::load_field_config;
use interactive::spawn_console;
use log::{info, LevelFilter};
use nmea_builder::{SentenceBuilder, SentenceType};
use reporter::Reporter;
use tokio::sync::mpsc::channel;
use tokio_serial::available_ports;
use transport::NmeaWriter;

mod create_serial;
mod display;
mod field_command;
mod field_config;
mod interactive;
mod reporter;
mod transport;

#[derive(Parser)]
#[command(name = "GNSS Sim")]
#[command(bin_name = "gnss-sim")]
#[command(about = "Simulated GNSS receiver emitting NMEA 0183 sentences")]
struct Cli {
    serial: Option<String>,

    #[arg(long, short, help = "JSON file with field values")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
    baud: u32,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List all the serial ports connected to the host")]
    Detect,
    Print(PrintArgs),
    Run(RunArgs),
    Interactive(InteractiveArgs),
    #[command(about = "Show the configured field values")]
    Status,
}

fn sentence_type_parser(s: &str) -> Result<SentenceType, String> {
    SentenceType::from_name(s).ok_or_else(|| format!("unknown sentence type {:?}", s))
}

#[derive(clap::Args)]
struct SentenceArgs {
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = sentence_type_parser,
        default_values_t = [SentenceType::Gga, SentenceType::Hdt],
        help = "Sentences to send each cycle, e.g. gga,hdt,rmc"
    )]
    sentences: Vec<SentenceType>,
}

#[derive(clap::Args)]
#[command(about = "Print sentences to stdout")]
struct PrintArgs {
    #[arg(long, default_value_t = 1)]
    count: u64,

    #[clap(flatten)]
    sentences: SentenceArgs,
}

#[derive(clap::Args)]
#[command(about = "Send sentences to the serial port once per cycle")]
struct RunArgs {
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    #[arg(long, help = "Stop after this many cycles")]
    cycles: Option<u64>,

    #[clap(flatten)]
    sentences: SentenceArgs,
}

#[derive(clap::Args)]
#[command(about = "Send sentences while editing fields from the console")]
struct InteractiveArgs {
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    #[clap(flatten)]
    sentences: SentenceArgs,
}

fn require_serial(serial: Option<String>) -> Result<String> {
    serial.ok_or_else(|| anyhow!("No serial port given, run `gnss-sim detect` to list them"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let args = Cli::parse();

    if matches!(args.command, Commands::Detect) {
        for port in available_ports()? {
            println!("{:?}", port);
        }
        return Ok(());
    }

    let fields = load_field_config(args.config.as_deref())?;
    let mut builder = SentenceBuilder::new();
    for command in fields.commands() {
        command.apply(&mut builder);
    }

    match args.command {
        Commands::Detect => {}
        Commands::Status => {
            print!("{}", StatusScreen(&builder));
        }
        Commands::Print(PrintArgs { count, sentences }) => {
            let mut reporter = Reporter::new(
                builder,
                NmeaWriter::new(tokio::io::stdout()),
                sentences.sentences,
            );
            for _ in 0..count {
                reporter.report_once().await?;
            }
        }
        Commands::Run(RunArgs {
            interval_ms,
            cycles,
            sentences,
        }) => {
            let serial = create_serial(require_serial(args.serial)?, args.baud)?;
            info!(
                "Sending {:?} every {} ms",
                sentences.sentences, interval_ms
            );
            let mut reporter = Reporter::new(builder, NmeaWriter::new(serial), sentences.sentences);
            reporter
                .run(Duration::from_millis(interval_ms), cycles, None)
                .await?;
        }
        Commands::Interactive(InteractiveArgs {
            interval_ms,
            sentences,
        }) => {
            let serial = create_serial(require_serial(args.serial)?, args.baud)?;
            let (sender, receiver) = channel(16);
            spawn_console(sender);
            let mut reporter = Reporter::new(builder, NmeaWriter::new(serial), sentences.sentences);
            reporter
                .run(Duration::from_millis(interval_ms), None, Some(receiver))
                .await?;
        }
    }
    Ok(())
}
