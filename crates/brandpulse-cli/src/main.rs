mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brandpulse_dashboard::{DashboardClient, DashboardController, DataSource, TriggerOutcome};

#[derive(Debug, Parser)]
#[command(name = "brandpulse")]
#[command(about = "Brand sentiment dashboard, headless")]
struct Cli {
    /// Use plain ASCII trend arrows instead of emoji
    #[arg(long, global = true)]
    ascii: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Keep the dashboard in sync and log a status line on every change
    Watch,
    /// Fetch the dashboard and brand catalog once and print a report
    Snapshot,
    /// Ask the backend to collect fresh data, then print the refreshed report
    Collect,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = brandpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    tracing::debug!(?config, "loaded configuration");
    let controller = DashboardController::<DashboardClient>::from_app_config(&config)?;

    match cli.command {
        Commands::Watch => run_watch(&controller).await?,
        Commands::Snapshot => {
            controller.initialize().await;
            print!("{}", render::report(&controller.state(), cli.ascii));
        }
        Commands::Collect => {
            controller.load_catalog().await;
            let outcome = controller.trigger_collection().await;
            print!("{}", render::report(&controller.state(), cli.ascii));
            if outcome == TriggerOutcome::Failed {
                anyhow::bail!("collection trigger failed");
            }
        }
    }

    Ok(())
}

async fn run_watch<S: DataSource>(controller: &DashboardController<S>) -> anyhow::Result<()> {
    let mut updates = controller.subscribe();
    let scheduler = controller.start()?;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let line = render::status_line(&updates.borrow_and_update());
                tracing::info!("{line}");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received ctrl-c, stopping refresh schedule");
                break;
            }
        }
    }

    scheduler.shutdown().await;
    Ok(())
}
