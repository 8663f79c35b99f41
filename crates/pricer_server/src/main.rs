//! Black-Scholes pricing server
//!
//! REST API for European call prices and Greeks.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use pricer_server::config::{build_config, CliArgs as ConfigCliArgs, LogFormat, ServerConfig};
use pricer_server::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes pricing server - REST API for European call valuation
#[derive(Parser, Debug)]
#[command(name = "pricer_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "PRICER_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PRICER_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PRICER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long, env = "PRICER_LOG_FORMAT")]
    log_format: Option<String>,

    /// Handling of out-of-domain inputs (strict, legacy)
    #[arg(long, env = "PRICER_DOMAIN_POLICY")]
    domain_policy: Option<String>,

    /// Port for the Prometheus metrics exporter
    #[arg(long, env = "PRICER_METRICS_PORT")]
    metrics_port: Option<u16>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            log_format: args.log_format,
            domain_policy: args.domain_policy,
            metrics_port: args.metrics_port,
        }
    }
}

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
    }
}

fn init_metrics(config: &ServerConfig, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, port)
        .parse()
        .with_context(|| format!("invalid metrics address {}:{}", config.host, port))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("failed to install Prometheus recorder")?;

    tracing::info!(%addr, "Prometheus metrics exporter started");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args).context("failed to load configuration")?;

    init_tracing(&config);

    tracing::info!("Black-Scholes pricing server v{}", pricer_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        log_format = %config.log_format,
        environment = %config.environment,
        domain_policy = %config.domain_policy,
        shutdown_timeout_secs = config.shutdown_timeout_secs,
        "Server configuration loaded"
    );

    if let Some(port) = config.metrics_port {
        init_metrics(&config, port)?;
    }

    let server = Server::new(config);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await.context("server terminated with an error")?;

    Ok(())
}
