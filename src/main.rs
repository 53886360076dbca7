// src/main.rs
//
// Command-line front end: open the map screen for a coordinate and
// optionally hand it to a navigation app.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use park_snap::application::{MapScreenView, ShareResultDto};
use park_snap::domain::{Coordinate, ScreenParams, LATITUDE_PARAM, LONGITUDE_PARAM, MAP_ROUTE};
use park_snap::integrations::{
    deep_link, HistoryNavigator, LoggingMapRenderer, MapLinkResolver, SystemOpener, TerminalChooser,
};
use park_snap::{register_diagnostic_handlers, AppConfig, EventBus, LocationDispatcher, Navigator};

#[derive(Parser)]
#[command(name = "park-snap", version, about = "Show a photo location and open it in a navigation app")]
struct Cli {
    /// Config file (defaults to the per-user config when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "park_snap=debug"
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the map screen for a coordinate
    Map {
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,

        /// Link into the map screen, e.g. "parkandsnap:///MapScreen?latitude=..&longitude=.."
        #[arg(long, conflicts_with_all = ["latitude", "longitude"])]
        link: Option<String>,

        /// Hand the location to a navigation app
        #[arg(long)]
        share: bool,
    },

    /// Print the app's own map link and the deep link of every allow-listed app
    Links {
        #[arg(long, allow_hyphen_values = true)]
        latitude: String,

        #[arg(long, allow_hyphen_values = true)]
        longitude: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Command::Map {
            latitude,
            longitude,
            link,
            share,
        } => run_map(config, latitude, longitude, link, share).await,
        Command::Links {
            latitude,
            longitude,
        } => print_links(&config, &latitude, &longitude),
    }
}

async fn run_map(
    config: AppConfig,
    latitude: Option<String>,
    longitude: Option<String>,
    link: Option<String>,
    share: bool,
) -> Result<()> {
    let event_bus = Arc::new(EventBus::new());
    register_diagnostic_handlers(&event_bus);

    let navigator = Arc::new(HistoryNavigator::new("/"));
    let resolver = MapLinkResolver::new(
        Arc::new(SystemOpener::detect()),
        Arc::new(TerminalChooser::stdio()),
    );

    let (route, params) = match link {
        Some(link) => config.app.parse_route_link(&link)?,
        None => {
            let mut params = ScreenParams::new();
            if let Some(latitude) = latitude {
                params.insert(LATITUDE_PARAM, latitude);
            }
            if let Some(longitude) = longitude {
                params.insert(LONGITUDE_PARAM, longitude);
            }
            (MAP_ROUTE.to_string(), params)
        }
    };
    if !route.eq_ignore_ascii_case(MAP_ROUTE) {
        anyhow::bail!("{} has no screen at {}", config.app.name, route);
    }
    navigator.navigate(MAP_ROUTE, params.clone());

    let map_config = config.map.clone();
    let dispatcher = LocationDispatcher::new(
        Arc::new(LoggingMapRenderer::new()),
        Arc::new(resolver),
        navigator.clone(),
        event_bus,
        config.map,
        config.share,
    );

    if dispatcher.initialize_from(&params).is_ok() {
        dispatcher.render().await?;
        dispatcher.on_map_ready();
    }

    match MapScreenView::from_state(&dispatcher.state(), &map_config) {
        MapScreenView::Error { message } => println!("{}", message),
        MapScreenView::Map {
            latitude,
            longitude,
            marker_title,
            ..
        } => {
            println!("{} at {:.4}, {:.4}", marker_title, latitude, longitude);
            if share {
                match ShareResultDto::from(dispatcher.share().await) {
                    ShareResultDto::Launched { app } => println!("Opened in {}", app),
                    ShareResultDto::Cancelled => println!("Cancelled"),
                    ShareResultDto::Failed { message } => println!("Error showing location: {}", message),
                    ShareResultDto::Unavailable => println!("No location to share"),
                }
            }
        }
        MapScreenView::Loading | MapScreenView::Closed => {}
    }

    dispatcher.back();
    Ok(())
}

fn print_links(config: &AppConfig, latitude: &str, longitude: &str) -> Result<()> {
    let coordinate = Coordinate::from_params(Some(latitude), Some(longitude))
        .map_err(park_snap::AppError::from)?;

    let own_link = config
        .app
        .route_link(MAP_ROUTE, &ScreenParams::for_coordinate(&coordinate))?;
    println!("{:<12} {}", config.app.name, own_link);
    for app in &config.share.allow_list {
        let url = deep_link(*app, coordinate, &config.share.title)?;
        println!("{:<12} {}", app.display_name(), url);
    }
    Ok(())
}
