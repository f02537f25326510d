use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use parcelroute_lib::{LoaderConfig, PricingConfig, DEFAULT_EDGE_WEIGHT, GRAPH_ENV_VAR};
use parcelroute_cli::commands::interactive::handle_interactive_command;
use parcelroute_cli::commands::locations::handle_locations_command;
use parcelroute_cli::commands::quote::{handle_quote_command, QuoteCommandArgs};
use parcelroute_cli::commands::route::{handle_route_command, RouteCommandArgs};
use parcelroute_cli::commands::AppContext;
use parcelroute_cli::output::OutputFormat;
use parcelroute_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest flight routes and parcel delivery quotes")]
struct Cli {
    /// Route graph file (one `from,to` flight per line).
    #[arg(long, global = true, env = GRAPH_ENV_VAR)]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Weight given to every flight in the graph.
    #[arg(long, global = true, default_value_t = DEFAULT_EDGE_WEIGHT)]
    edge_weight: f64,

    /// Read a third `from,to,weight` field as the flight weight.
    #[arg(long, global = true)]
    weights_from_file: bool,

    /// Path weight priced as one flight. Defaults to --edge-weight.
    #[arg(long, global = true)]
    flight_unit_cost: Option<f64>,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two locations, optionally pricing a parcel.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Parcel weight in kilograms.
        #[arg(long)]
        weight: Option<String>,
        /// Parcel size (A, B or C).
        #[arg(long)]
        size: Option<String>,
        /// Parcel type (weapons, cautious-parcels, refrigerated-goods or 1-3).
        #[arg(long = "type")]
        parcel_type: Option<String>,
    },
    /// Price a delivery for a known path weight.
    Quote {
        /// Accumulated path weight.
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        #[arg(long)]
        weight: String,
        #[arg(long)]
        size: String,
        #[arg(long = "type")]
        parcel_type: String,
    },
    /// List every location in the graph.
    Locations,
    /// Ask for the parcel and endpoints on standard input.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = AppContext {
        graph_path: cli.graph,
        loader: LoaderConfig {
            edge_weight: cli.edge_weight,
            weights_from_record: cli.weights_from_file,
        },
        pricing: PricingConfig {
            flight_unit_cost: cli.flight_unit_cost.unwrap_or(cli.edge_weight),
        },
        format: cli.format,
        palette: if cli.no_color {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        },
    };

    match cli.command {
        Command::Route {
            from,
            to,
            weight,
            size,
            parcel_type,
        } => handle_route_command(
            &ctx,
            &RouteCommandArgs {
                from,
                to,
                weight,
                size,
                parcel_type,
            },
        ),
        Command::Quote {
            distance,
            weight,
            size,
            parcel_type,
        } => handle_quote_command(
            &ctx,
            &QuoteCommandArgs {
                distance,
                weight,
                size,
                parcel_type,
            },
        ),
        Command::Locations => handle_locations_command(&ctx),
        Command::Interactive => handle_interactive_command(&ctx),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
