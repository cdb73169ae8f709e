use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use metro_planner::dataset::{self, Dataset, DatasetError};
use metro_planner::itinerary::FareTable;
use metro_planner::planner::{PlanError, Planner};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for bad command-line usage (sysexits `EX_USAGE`).
const EXIT_USAGE: u8 = 64;
/// Exit code when stdin cannot be read (sysexits `EX_IOERR`).
const EXIT_INPUT: u8 = 74;

/// Shortest routes, line changes and fares between two metro stations.
///
/// Reads the source and destination station names from stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
struct Cli {
    /// Dataset to load instead of the bundled Delhi Metro
    #[arg(long, value_name = "PATH")]
    network: Option<PathBuf>,

    /// Print the itinerary as JSON
    #[arg(long)]
    json: bool,
}

/// Why a run failed.
#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error("failed to load network: {0}")]
    Dataset(#[from] DatasetError),

    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),

    #[error("unknown station: {0}")]
    UnknownStation(String),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to encode itinerary: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            Failure::Dataset(_) => 3,
            Failure::Input(_) => EXIT_INPUT,
            Failure::UnknownStation(_) => 2,
            Failure::Plan(_) | Failure::Encode(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    init_logger();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--help` and `--version` land here too, printed to stdout.
            let _ = err.print();
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            return ExitCode::from(code);
        }
    };

    match serve(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::from(failure.exit_code())
        }
    }
}

/// Install a stderr logger filtered by `RUST_LOG`, defaulting to warnings.
fn init_logger() {
    let default_level = LevelFilter::WARN;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Load the requested network and answer one query on stdin and stdout.
fn serve(cli: &Cli) -> Result<(), Failure> {
    let dataset = load(cli.network.as_deref())?;
    let stdin = io::stdin();
    run(&dataset, cli.json, &mut stdin.lock(), &mut io::stdout())
}

fn load(path: Option<&Path>) -> Result<Dataset, DatasetError> {
    let dataset = match path {
        Some(path) => dataset::load_path(path)?,
        None => dataset::delhi_metro()?,
    };
    debug!(
        dataset = %dataset.name,
        stations = dataset.summary.stations,
        edges = dataset.summary.edges,
        "Network ready"
    );
    Ok(dataset)
}

/// Prompt for two station names on `input` and write the itinerary to
/// `output`, as text or as JSON.
fn run(
    dataset: &Dataset,
    json: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), Failure> {
    let network = &dataset.network;
    let fares = FareTable::default();
    let planner = Planner::new(network, &fares);

    let source = prompt(input, output, "Enter the source station: ")?;
    let destination = prompt(input, output, "Enter the destination station: ")?;

    for name in [&source, &destination] {
        if !network.contains(name) {
            return Err(Failure::UnknownStation(name.clone()));
        }
    }

    let itinerary = planner.plan(&source, &destination)?;
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&itinerary)?)?;
    } else {
        writeln!(output, "{itinerary}")?;
    }
    Ok(())
}

/// Write `message` and read one trimmed line.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    const PROMPTS: &str = "Enter the source station: Enter the destination station: ";

    /// Red and Yellow meeting at Kashmere Gate, plus an unconnected depot.
    const LINES: &str = r#"{
        "name": "Test Metro",
        "stations": [
            {"name": "Shastri Park", "latitude": 28.6683, "longitude": 77.2505, "lines": ["Red Line"]},
            {"name": "Kashmere Gate", "latitude": 28.6675, "longitude": 77.2282, "lines": ["Yellow Line", "Red Line"]},
            {"name": "Chandni Chowk", "latitude": 28.6579, "longitude": 77.2301, "lines": ["Yellow Line"]},
            {"name": "Depot", "latitude": 28.6, "longitude": 77.1, "lines": ["Grey Line"]}
        ],
        "edges": [
            {"from": "Shastri Park", "to": "Kashmere Gate", "lines": ["Red Line"], "distance_km": 2},
            {"from": "Kashmere Gate", "to": "Chandni Chowk", "lines": ["Yellow Line"], "distance_km": 1}
        ]
    }"#;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["metro-planner"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    fn unknown_station(failure: &Failure) -> &str {
        match failure {
            Failure::UnknownStation(name) => name,
            other => panic!("expected an unknown station, got {other:?}"),
        }
    }

    /// Run one query against the test network, returning what was written.
    fn query(stdin: &str, json: bool) -> (Result<(), Failure>, String) {
        let dataset = dataset::load_str(LINES).unwrap();
        let mut input = io::Cursor::new(stdin);
        let mut output = Vec::new();
        let result = run(&dataset, json, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_bundled_network() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.network, None);
        assert!(!cli.json);
    }

    #[test]
    fn parses_network_and_json() {
        let cli = parse(&["--network", "lines.json", "--json"]).unwrap();
        assert_eq!(cli.network, Some(PathBuf::from("lines.json")));
        assert!(cli.json);
    }

    #[test]
    fn bad_arguments_are_usage_errors() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.use_stderr());

        let err = parse(&["--network"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_not_an_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn prompt_trims_input() {
        let mut input = io::Cursor::new("  Rajiv Chowk \r\nKashmere Gate\n");
        let mut out = Vec::new();
        assert_eq!(prompt(&mut input, &mut out, "> ").unwrap(), "Rajiv Chowk");
        assert_eq!(prompt(&mut input, &mut out, "").unwrap(), "Kashmere Gate");
        assert_eq!(prompt(&mut input, &mut out, "").unwrap(), "");
        assert_eq!(out, b"> ");
    }

    #[test]
    fn prints_text_itinerary() {
        let (result, output) = query("Shastri Park\nChandni Chowk\n", false);
        result.unwrap();
        assert_eq!(
            output,
            "Enter the source station: Enter the destination station: \
             Shortest path from Shastri Park to Chandni Chowk:\n\
             Shastri Park (Red Line) -> Kashmere Gate [Change to Yellow Line] -> Chandni Chowk (Yellow Line)\n\
             Total distance: 3 km\n\
             Fare: Rs. 20\n"
        );
    }

    #[test]
    fn prints_json_itinerary() {
        let (result, output) = query(" Chandni Chowk \nShastri Park\n", true);
        result.unwrap();
        let json = output.strip_prefix(PROMPTS).unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["path"][0], "Chandni Chowk");
        assert_eq!(value["distance_km"], 3);
        assert_eq!(value["fare"], 20);
    }

    #[test]
    fn unknown_source_exits_with_two() {
        let (result, output) = query("Atlantis\nChandni Chowk\n", false);
        let failure = result.unwrap_err();
        assert_eq!(unknown_station(&failure), "Atlantis");
        assert_eq!(failure.exit_code(), 2);
        assert_eq!(failure.to_string(), "unknown station: Atlantis");
        assert_eq!(output, PROMPTS);
    }

    #[test]
    fn unknown_destination_exits_with_two() {
        let (result, output) = query("Shastri Park\nNoSuchStation\n", false);
        let failure = result.unwrap_err();
        assert_eq!(unknown_station(&failure), "NoSuchStation");
        assert_eq!(failure.exit_code(), 2);
        assert_eq!(output, PROMPTS);
    }

    #[test]
    fn disconnected_pair_exits_with_one() {
        let (result, output) = query("Shastri Park\nDepot\n", false);
        let failure = result.unwrap_err();
        let unreachable = PlanError::Unreachable {
            origin: "Shastri Park".into(),
            destination: "Depot".into(),
        };
        assert!(matches!(failure, Failure::Plan(ref err) if *err == unreachable));
        assert_eq!(failure.exit_code(), 1);
        assert_eq!(output, PROMPTS);
    }

    #[test]
    fn dataset_and_input_failures() {
        let err = dataset::load_str("{").unwrap_err();
        assert_eq!(Failure::from(err).exit_code(), 3);

        let err = io::Error::new(io::ErrorKind::InvalidData, "not UTF-8");
        assert_eq!(Failure::from(err).exit_code(), EXIT_INPUT);
    }
}
