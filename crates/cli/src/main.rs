use clap::Parser;
use tracing::{error, info};
use zonewatch_domain::CliOverrides;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "zonewatch")]
#[command(version)]
#[command(about = "DNSSEC posture monitor - classifies the deployment status of a list of zones")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone list path (one `zone,<unused>,agency` line per zone)
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        input_list: cli.input.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        timeout_secs: cli.timeout,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting zonewatch v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    // Dependency injection - build adapters and wire them into use cases
    let repos = di::Repositories::new(pool);
    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &repos, &dns_services);

    let summary = use_cases.run_monitor.execute().await.map_err(|e| {
        error!(error = %e, "Monitoring run failed");
        anyhow::anyhow!(e)
    })?;

    info!(
        inspected = summary.inspected,
        persisted = summary.persisted,
        skipped = summary.skipped,
        failed = summary.failed,
        "zonewatch run finished"
    );
    Ok(())
}
