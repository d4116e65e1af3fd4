use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salary_engine::api::{AppState, serve};
use salary_engine::config::ConfigLoader;

/// Serve gross/net salary conversions over HTTP.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML rate file. The built-in reference rates are used when omitted.
    #[arg(long, env = "SALARY_RATES")]
    rates: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "SALARY_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salary_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.rates {
        Some(path) => match ConfigLoader::load(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::error!("Configuration error: {}", error);
                std::process::exit(1);
            }
        },
        None => ConfigLoader::default(),
    };

    tracing::info!(
        name = %config.metadata().name,
        tax = config.rates().tax,
        allowance = config.rates().allowance,
        "Rate configuration loaded"
    );

    if let Err(error) = serve(args.bind, AppState::new(config)).await {
        tracing::error!("{}", error);
        std::process::exit(1);
    }
}
