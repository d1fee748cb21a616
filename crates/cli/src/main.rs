use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonestore_dns_domain::CliOverrides;
use zonestore_dns_jobs::{JobRunner, ZoneRefreshJob};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "zonestore-dns")]
#[command(version)]
#[command(about = "Authoritative DNS server backed by a relational zone store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Zone store connection URL
    #[arg(long)]
    dsn: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        dsn: cli.dsn,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting zonestore-dns v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool, &config.database)?;
    let dns_services = di::DnsServices::new(&config, &repos);

    let shutdown = CancellationToken::new();
    let zone_refresh = ZoneRefreshJob::new(repos.zones.clone(), dns_services.store_health.clone())
        .with_intervals(
            config.heartbeat.success_interval(),
            config.heartbeat.fail_interval(),
        );
    let job_handles = JobRunner::new()
        .with_zone_refresh(zone_refresh)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let handler = dns_services.handler();
    let dns_server = server::start_dns_server(dns_addr, handler, config.server.tcp_timeout());

    tokio::select! {
        result = dns_server => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    shutdown.cancel();
    for handle in job_handles {
        let _ = handle.await;
    }
    dns_services.degrade_cache.log_stats();

    info!("Server shutdown complete");
    Ok(())
}
