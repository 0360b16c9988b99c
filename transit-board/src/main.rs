use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transit_board::board::{BoardConfig, DepartureBoard};
use transit_board::cache::{CacheConfig, FileCache, FileCacheConfig, MemoryCache};
use transit_board::domain::{Coordinate, RouteFilter, shorten_name};
use transit_board::geocode::GeocoderConfig;
use transit_board::http::{CachedHttpClient, HttpConfig, ReqwestHttpClient};
use transit_board::mtd::{MtdClient, MtdConfig};
use transit_board::web::{AppState, BoardDefaults, create_router};

/// Most stops printed by `search`.
const SEARCH_LIMIT: usize = 25;

#[derive(Parser, Debug)]
#[command(
    name = "transit-board",
    author,
    version,
    about = "Upcoming bus departures near an address"
)]
struct Args {
    /// Transit API key
    #[arg(long, env = "CUMTD_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Directory for the on-disk cache used by one-shot commands
    #[arg(long, env = "BOARD_CACHE_DIR", default_value = ".board_cache", global = true)]
    cache_dir: PathBuf,

    /// Upstream request timeout in seconds
    #[arg(long, env = "BOARD_HTTP_TIMEOUT", default_value_t = 10, global = true)]
    timeout: u64,

    /// Verbose output (show debug messages)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the departure board once
    Board {
        /// Address to show departures near
        #[arg(long, env = "BOARD_ADDRESS")]
        address: Option<String>,

        /// Comma-separated route codes to show (default: all)
        #[arg(long, env = "BOARD_ROUTES")]
        routes: Option<String>,
    },

    /// Serve the board over HTTP
    Serve {
        /// Address the board shows
        #[arg(long, env = "BOARD_ADDRESS")]
        address: Option<String>,

        /// Default route filter (requests may override it)
        #[arg(long, env = "BOARD_ROUTES")]
        routes: Option<String>,

        /// Address to listen on
        #[arg(long, env = "BOARD_LISTEN", default_value = "127.0.0.1:3000")]
        listen: SocketAddr,
    },

    /// List stops near a coordinate
    Nearby {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Number of stops to list
        #[arg(long, default_value_t = 10)]
        count: usize,
    },

    /// List upcoming departures for one stop
    Departures { stop_id: String },

    /// Search stops by name
    Search {
        #[arg(required = true)]
        name: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so board output stays clean
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();

    let http = ReqwestHttpClient::new(HttpConfig::new().with_timeout(args.timeout))
        .context("failed to build HTTP client")?;

    match args.command {
        Command::Board { address, routes } => {
            let cache = Arc::new(FileCache::new(FileCacheConfig::new(&args.cache_dir)));
            let board = DepartureBoard::new(
                CachedHttpClient::new(http, cache.clone()),
                cache,
                GeocoderConfig::default(),
                MtdConfig::default(),
                BoardConfig::default(),
            );

            match board
                .run(args.api_key.as_deref(), address.as_deref(), routes.as_deref())
                .await
            {
                Ok(departures) if departures.is_empty() => println!("No upcoming departures"),
                Ok(departures) => {
                    for d in &departures {
                        println!("{:<5} {:>7}  {}", d.route_label(), d.minutes_label(), d.stop_name);
                    }
                }
                Err(e) => println!("{e}"),
            }
        }

        Command::Serve {
            address,
            routes,
            listen,
        } => {
            let cache = Arc::new(MemoryCache::new(&CacheConfig::default()));
            let board = DepartureBoard::new(
                CachedHttpClient::new(http, cache.clone()),
                cache,
                GeocoderConfig::default(),
                MtdConfig::default(),
                BoardConfig::default(),
            );
            let defaults = BoardDefaults {
                api_key: args.api_key,
                address,
                routes,
            };
            if defaults.api_key.is_none() {
                tracing::warn!("CUMTD_API_KEY not set; every board request will fail");
            }

            let app = create_router(AppState::new(board, defaults));
            let listener = tokio::net::TcpListener::bind(listen)
                .await
                .with_context(|| format!("failed to bind {listen}"))?;

            tracing::info!("departure board listening on http://{listen}");
            axum::serve(listener, app).await.context("server error")?;
        }

        Command::Nearby { lat, lon, count } => {
            let api_key = require_api_key(args.api_key.as_deref())?;
            let mtd = MtdClient::new(http, MtdConfig::default());
            let stops = mtd
                .stops_by_lat_lon(api_key, &Coordinate::from_degrees(lat, lon), count)
                .await?;

            println!("Stops near ({lat}, {lon}):\n");
            println!("{:<20} {:<30} Distance", "ID", "Name");
            println!("{}", "-".repeat(62));
            for stop in &stops {
                let distance = stop
                    .distance
                    .map(|d| format!("{d:.2} mi"))
                    .unwrap_or_else(|| "N/A".to_string());
                println!("{:<20} {:<30} {}", stop.stop_id, shorten_name(&stop.stop_name), distance);
            }
        }

        Command::Departures { stop_id } => {
            let api_key = require_api_key(args.api_key.as_deref())?;
            let cache = Arc::new(FileCache::new(FileCacheConfig::new(&args.cache_dir)));
            let board = DepartureBoard::new(
                http,
                cache,
                GeocoderConfig::default(),
                MtdConfig::default(),
                BoardConfig::default(),
            );
            let departures = board
                .fetcher()
                .fetch_for(api_key, &stop_id, &stop_id, &RouteFilter::all())
                .await;

            if departures.is_empty() {
                println!("No departures from {stop_id}");
            }
            for d in &departures {
                println!("{:<5} {:>7}", d.route_label(), d.minutes_label());
            }
        }

        Command::Search { name } => {
            let api_key = require_api_key(args.api_key.as_deref())?;
            let query = name.join(" ");
            let mtd = MtdClient::new(http, MtdConfig::default());
            let matches = mtd.search_stops(api_key, &query).await?;

            println!("Stops matching '{query}' ({} found):\n", matches.len());
            println!("{:<20} Name", "ID");
            println!("{}", "-".repeat(60));
            for stop in matches.iter().take(SEARCH_LIMIT) {
                println!("{:<20} {}", stop.stop_id, stop.stop_name);
            }
            if matches.len() > SEARCH_LIMIT {
                println!("\n... and {} more matches", matches.len() - SEARCH_LIMIT);
            }
        }
    }

    Ok(())
}

fn require_api_key(api_key: Option<&str>) -> Result<&str> {
    api_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .context("no API key: set CUMTD_API_KEY or pass --api-key")
}
