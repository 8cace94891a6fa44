mod error;
mod replay;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};

use circle_slider::{CircleSlider, SliderConfig, Viewport};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "dial-replay", about = "Replay a recorded gesture trace through the circle slider engine")]
struct Cli {
    #[arg(long, env = "DIAL_CONFIG", help = "Slider config JSON file; defaults when omitted")]
    config: Option<String>,

    #[arg(long, default_value = "390x844", value_parser = parse_viewport, help = "Host display size, used when the config has no center")]
    viewport: Viewport,

    #[arg(long, default_value = "-", help = "Trace file path (JSON lines), or - for stdin")]
    input: String,

    #[arg(long, default_value_t = false, help = "Reject configs that break the range/radius contract")]
    strict: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    if cli.strict {
        config.validate()?;
    }

    let mut slider = CircleSlider::new(&config, cli.viewport);
    let reader = open_input(&cli.input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = replay::replay(&mut slider, reader, &mut out)?;
    info!(
        accepted = summary.accepted,
        declined = summary.declined,
        ignored = summary.ignored,
        value = summary.value,
        "replay finished"
    );
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<SliderConfig, CliError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(SliderConfig::from_json_str(&raw)?)
        }
        None => Ok(SliderConfig::default()),
    }
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>, CliError> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    Ok(Box::new(BufReader::new(File::open(input)?)))
}

fn parse_viewport(raw: &str) -> Result<Viewport, CliError> {
    let invalid = || CliError::InvalidViewport(raw.to_owned());
    let (w, h) = raw.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = w.trim().parse::<f64>().map_err(|_| invalid())?;
    let height = h.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(invalid());
    }
    Ok(Viewport::new(width, height))
}
