mod prompt;

use anyhow::Context;
use clap::Parser;
use log::info;
use prompt::{
    value_or_prompt, DATE_PROMPT, LATITUDE_PROMPT, LONGITUDE_PROMPT, TIMEZONE_PROMPT, TIME_PROMPT,
};
use starsigns::{BirthChart, BirthInput, ChartGenerator, EphemerisProvider, SwissEphemerisAdapter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Largest plausible distance from UTC, in hours
const MAX_TIMEZONE_OFFSET_HOURS: f64 = 24.0;

/// Compute a simplified birth chart. Values not given as flags are prompted for.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Birth date (YYYY-MM-DD).
    #[arg(long)]
    date: Option<String>,

    /// Birth time (HH:MM, 24-hour clock).
    #[arg(long)]
    time: Option<String>,

    /// Latitude of the birthplace in degrees (north positive).
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<String>,

    /// Longitude of the birthplace in degrees (east positive).
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<String>,

    /// Timezone offset from UTC in hours (e.g. -5 for EST, 5.5 for IST).
    #[arg(long, allow_negative_numbers = true)]
    tz: Option<String>,

    /// Print the chart as JSON.
    #[arg(long)]
    json: bool,

    /// Config file (default: configs/starsigns.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory (overrides config and SWISS_EPHEMERIS_PATH).
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,
}

/// Fill in the birth data from flags, prompting for whatever is missing
pub(crate) fn collect_input<R: BufRead, E: Write>(
    args: &Args,
    reader: &mut R,
    prompts: &mut E,
) -> anyhow::Result<BirthInput> {
    let date = value_or_prompt(args.date.clone(), DATE_PROMPT, reader, prompts)?;
    let time = value_or_prompt(args.time.clone(), TIME_PROMPT, reader, prompts)?;
    let lat = value_or_prompt(args.lat.clone(), LATITUDE_PROMPT, reader, prompts)?;
    let lon = value_or_prompt(args.lon.clone(), LONGITUDE_PROMPT, reader, prompts)?;
    let tz = value_or_prompt(args.tz.clone(), TIMEZONE_PROMPT, reader, prompts)?;

    let input = BirthInput::parse_text(&date, &time, &lat, &lon, &tz)?;
    check_birthplace(&input)?;
    Ok(input)
}

/// Reject coordinates and offsets no place on Earth has
fn check_birthplace(input: &BirthInput) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&input.latitude()) {
        anyhow::bail!("Latitude {} is outside [-90, 90]", input.latitude());
    }
    if !(-180.0..=180.0).contains(&input.longitude()) {
        anyhow::bail!("Longitude {} is outside [-180, 180]", input.longitude());
    }
    if !(-MAX_TIMEZONE_OFFSET_HOURS..=MAX_TIMEZONE_OFFSET_HOURS).contains(&input.timezone_offset_hours()) {
        anyhow::bail!(
            "Timezone offset {}h is outside [-{max}, {max}]",
            input.timezone_offset_hours(),
            max = MAX_TIMEZONE_OFFSET_HOURS
        );
    }
    Ok(())
}

pub(crate) fn render<W: Write>(chart: &BirthChart, json: bool, writer: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, chart)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "\nBirth Chart:")?;
        write!(writer, "{}", chart)?;
    }
    Ok(())
}

fn swiss_ephemeris(path: Option<PathBuf>) -> anyhow::Result<SwissEphemerisAdapter> {
    SwissEphemerisAdapter::new(path).context("Failed to initialise Swiss Ephemeris")
}

/// Load config, gather input, compute and print the chart.
///
/// `make_provider` receives the ephemeris path resolved from flags and
/// config. Prompts go to `prompts`, the chart to `out`.
pub(crate) fn run<P, F, R, W, E>(
    args: Args,
    make_provider: F,
    reader: &mut R,
    out: &mut W,
    prompts: &mut E,
) -> anyhow::Result<()>
where
    P: EphemerisProvider,
    F: FnOnce(Option<PathBuf>) -> anyhow::Result<P>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let settings = starsigns_config::load_settings(args.config.as_deref())?;
    let input = collect_input(&args, reader, prompts)?;

    let ephemeris_path = args.ephemeris_path.clone().or(settings.ephemeris_path);
    let provider = make_provider(ephemeris_path)?;

    let generator = ChartGenerator::with_settings(provider, settings.chart);
    let chart = generator
        .generate(&input)
        .with_context(|| format!("Failed to compute chart for {}", input.local_datetime()))?;
    info!("Computed {} placements", chart.len());

    render(&chart, args.json, out)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    if args.json {
        // keep stdout pure JSON
        run(args, swiss_ephemeris, &mut input, &mut out, &mut io::stderr())
    } else {
        run(args, swiss_ephemeris, &mut input, &mut out, &mut io::stdout())
    }
}
