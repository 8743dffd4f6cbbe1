use clap::Parser;
use seer_domain::CliOverrides;
use seer_jobs::{FirewallStatusJob, InitialSyncJob, JobRunner, PolicyScheduleJob};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "seer-agent")]
#[command(version)]
#[command(about = "SEER router agent - temporal access policies and firewall control")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Message bridge address (host:port)
    #[arg(short = 'b', long)]
    bridge: Option<String>,

    /// Firewall API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// CPU history cache file
    #[arg(long)]
    cache: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bridge_address: cli.bridge,
        api_url: cli.api_url,
        cache_path: cli.cache,
        log_level: cli.log_level,
        json_logs: cli.json_logs,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting SEER agent v{}", env!("CARGO_PKG_VERSION"));

    let mut services = di::Services::new(&config)?;
    let use_cases = di::UseCases::new(&services, &config);

    let restored = use_cases.load_cpu_history.execute().await;
    info!(samples = restored, "CPU history restored");

    let shutdown = CancellationToken::new();

    let Some((connection, inbound)) = services.take_bridge() else {
        anyhow::bail!("bridge connection already taken");
    };
    info!(address = %config.bridge.address, "Connecting to message bridge");
    let bridge_task = server::start_bridge(connection, shutdown.clone());
    let dispatch_task =
        server::start_dispatch(inbound, use_cases.handle_message.clone(), shutdown.clone());

    let scheduler = &config.scheduler;
    JobRunner::new()
        .with_initial_sync(
            InitialSyncJob::new(
                use_cases.refresh_policies.clone(),
                use_cases.refresh_devices.clone(),
            )
            .with_delay(Duration::from_millis(scheduler.initial_fetch_delay_ms)),
        )
        .with_policy_schedule(
            PolicyScheduleJob::new(use_cases.evaluate_policies.clone())
                .with_initial_delay(Duration::from_millis(scheduler.initial_delay_ms))
                .with_interval(Duration::from_secs(scheduler.interval_secs)),
        )
        .with_firewall_status(
            FirewallStatusJob::new(use_cases.manage_blacklist.clone())
                .with_interval(Duration::from_secs(scheduler.firewall_status_interval_secs)),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();

    for (name, task) in [("bridge", bridge_task), ("dispatch", dispatch_task)] {
        if let Err(e) = task.await {
            error!(task = name, error = %e, "Task ended abnormally");
        }
    }

    info!("SEER agent stopped");
    Ok(())
}
