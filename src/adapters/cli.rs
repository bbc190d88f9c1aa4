use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::AppError;
use crate::models::{SoundSpeedSummary, WaterSample};

#[derive(Parser, Debug)]
#[command(author, version, about = "Speed of sound in fresh and sea water (optional JSON output)", long_about = None)]
pub struct Args {
    #[arg(long, global = true, help = "Print the result as JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level written to stderr (trace, debug, info, warn, error)"
    )]
    pub log_level: Level,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with a water sample; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON water sample (overrides --input)"
    )]
    sample_json: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpolate the fresh-water table (4 to 86 °C)
    Fresh {
        #[arg(long, short, allow_negative_numbers = true, help = "Temperature [°C]")]
        temperature: f64,
    },
    /// Evaluate Wilson's sea-water formula
    Salt {
        #[arg(long, short, allow_negative_numbers = true, help = "Temperature [°C], -4 to 30")]
        temperature: f64,
        #[arg(long, short, help = "Pressure [MPa], 0.1 to 100")]
        pressure: f64,
        #[arg(long, short, help = "Practical salinity [PSU], 0 to 40")]
        salinity: f64,
    },
}

impl From<&Command> for WaterSample {
    fn from(cmd: &Command) -> Self {
        match *cmd {
            Command::Fresh { temperature } => WaterSample::Fresh { temperature },
            Command::Salt {
                temperature,
                pressure,
                salinity,
            } => WaterSample::Salt {
                temperature,
                pressure,
                salinity,
            },
        }
    }
}

/// Installs a stderr `tracing` subscriber at the requested level.
pub fn init_logging(level: Level) -> Result<(), AppError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::LoggingInit(e.to_string()))
}

fn parse_sample_doc(doc: &str) -> Result<WaterSample, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseInputDocument { source })
}

pub fn parse_sample(args: &Args) -> Result<WaterSample, AppError> {
    match (&args.command, &args.sample_json, &args.input) {
        (Some(cmd), _, _) => Ok(cmd.into()),
        (None, Some(json), _) => {
            serde_json::from_str(json).map_err(|source| AppError::ParseSampleJson { source })
        }
        (None, None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_sample_doc(&s)
        }
        (None, None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_sample_doc(&s)
        }
        (None, None, None) => Err(AppError::MissingInputData),
    }
}

pub fn print_output(out: &SoundSpeedSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("Medium: {:?}", out.medium);
        println!("Temperature: {:.2} °C", out.temperature);
        if let Some(p) = out.pressure {
            println!("Pressure: {:.3} MPa", p);
        }
        if let Some(s) = out.salinity {
            println!("Salinity: {:.2} PSU", s);
        }
        println!("Sound speed: {:.2} m/s", out.sound_speed_m_s);
    }

    Ok(())
}
