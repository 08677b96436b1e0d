//! Command-line interface for the Wayfinder route planner.
//!
//! `wayfinder plan` geocodes a list of addresses, optionally optimizes the
//! visiting order of the middle stops, fetches the route from an OSRM
//! service, and prints a summary. `wayfinder decode` turns a share
//! parameter back into its addresses.

#![forbid(unsafe_code)]

mod format;

use clap::{Parser, Subcommand};
use thiserror::Error;
use wayfinder_core::{
    GeocodeError, Geocoder, RoutePlanner, RoutingError, ShareError, Stop, TravelMode,
    TravelModeParseError, decode_share_param, encode_share_param, optimize,
};
use wayfinder_data::ProviderBuildError;
use wayfinder_data::geocoding::HttpGeocoder;
use wayfinder_data::routing::HttpRoutingProvider;

use format::{format_distance, format_duration};

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command-line arguments failed to parse.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Fewer than two addresses were given.
    #[error("at least two addresses are required to plan a route")]
    TooFewAddresses,
    /// The travel mode flag was not recognised.
    #[error(transparent)]
    InvalidMode(#[from] TravelModeParseError),
    /// A provider could not be constructed.
    #[error(transparent)]
    Provider(#[from] ProviderBuildError),
    /// An address failed to geocode.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    /// The routing service failed.
    #[error(transparent)]
    Routing(#[from] RoutingError),
    /// A share parameter could not be decoded.
    #[error(transparent)]
    Share(#[from] ShareError),
    /// Output serialization failed.
    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Run the Wayfinder CLI with the current process arguments.
///
/// # Errors
///
/// Returns a [`CliError`] for argument, geocoding, routing, or share-link
/// failures; the binary prints it and exits non-zero.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Plan(args) => run_plan(&args),
        Command::Decode(args) => run_decode(&args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfinder",
    about = "Plan, optimize, and share multi-stop routes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Geocode addresses, compute a route, and print it.
    Plan(PlanArgs),
    /// Decode a share parameter back into addresses.
    Decode(DecodeArgs),
}

#[derive(Debug, Parser)]
struct PlanArgs {
    /// Addresses to visit, in order; at least two.
    #[arg(value_name = "address", required = true)]
    addresses: Vec<String>,
    /// Travel mode: driving, cycling, or walking.
    #[arg(long, default_value = "driving", value_name = "mode")]
    mode: String,
    /// Reorder the middle stops to minimise total distance.
    #[arg(long)]
    optimize: bool,
    /// Print turn-by-turn instructions.
    #[arg(long)]
    instructions: bool,
    /// Print a URL-safe share parameter for the planned stops.
    #[arg(long)]
    share: bool,
    /// Print the raw route response as JSON instead of a summary.
    #[arg(long)]
    json: bool,
    /// Base URL of the OSRM routing service.
    #[arg(long, default_value = "https://router.project-osrm.org", value_name = "url")]
    osrm_url: String,
    /// Base URL of the Nominatim geocoding service.
    #[arg(
        long,
        default_value = "https://nominatim.openstreetmap.org",
        value_name = "url"
    )]
    nominatim_url: String,
}

#[derive(Debug, Parser)]
struct DecodeArgs {
    /// The share parameter to decode.
    #[arg(value_name = "param")]
    param: String,
}

fn run_plan(args: &PlanArgs) -> Result<(), CliError> {
    if args.addresses.len() < 2 {
        return Err(CliError::TooFewAddresses);
    }
    let mode: TravelMode = args.mode.parse()?;

    let geocoder = HttpGeocoder::new(&args.nominatim_url)?;
    let mut stops = Vec::with_capacity(args.addresses.len());
    for address in &args.addresses {
        stops.push(geocoder.geocode(address)?);
    }

    if args.optimize && stops.len() >= 3 {
        stops = optimize(&stops);
    }

    let provider = HttpRoutingProvider::new(&args.osrm_url)?;
    let mut planner = RoutePlanner::new(provider);
    let route = planner.get_route(&stops, mode)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_summary(&stops, mode, route.duration);
    }

    if args.instructions {
        print_instructions(&planner, &stops, mode)?;
    }

    if args.share {
        println!("\nShare parameter: {}", encode_share_param(&stops));
    }

    Ok(())
}

fn print_summary(stops: &[Stop], mode: TravelMode, duration: std::time::Duration) {
    println!("Route ({mode}), estimated {}:", format_duration(duration));
    for (index, stop) in stops.iter().enumerate() {
        println!("  {}. {}", index + 1, stop.address);
    }
}

fn print_instructions(
    planner: &RoutePlanner<HttpRoutingProvider>,
    stops: &[Stop],
    mode: TravelMode,
) -> Result<(), CliError> {
    let instructions = planner.get_instructions(stops, mode)?;
    println!(
        "\nTurn-by-turn ({} total, {}):",
        format_distance(instructions.distance_m),
        format_duration(instructions.duration)
    );
    for (index, step) in instructions.steps.iter().enumerate() {
        println!(
            "  {}. {} ({}, {})",
            index + 1,
            step.instruction,
            format_distance(step.distance_m),
            format_duration(step.duration)
        );
    }
    Ok(())
}

fn run_decode(args: &DecodeArgs) -> Result<(), CliError> {
    let addresses = decode_share_param(&args.param)?;
    for address in addresses {
        println!("{address}");
    }
    Ok(())
}
