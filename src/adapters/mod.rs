#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, init_logging, parse_sample};
    use crate::sound_speed::calculator::compute_summary;

    let args = Args::parse();
    init_logging(args.log_level)?;

    let sample = parse_sample(&args)?;
    tracing::debug!(?sample, "evaluating sound speed");

    let out = compute_summary(&sample)?;
    tracing::debug!(sound_speed_m_s = out.sound_speed_m_s, "computed");

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
