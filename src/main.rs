// src/main.rs
use clap::Parser;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use nba_scoreboard::cli::Args;
use nba_scoreboard::config::Config;
use nba_scoreboard::constants;
use nba_scoreboard::data_fetcher::ScoreboardClient;
use nba_scoreboard::display::{DisplaySink, PlainSink, TerminalSink};
use nba_scoreboard::error::AppError;
use nba_scoreboard::logging::setup_logging;
use nba_scoreboard::network;
use nba_scoreboard::render::{DisplayLayout, format, format_status};
use nba_scoreboard::scheduler::RefreshScheduler;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // Handle configuration updates
    if args.new_endpoint_url.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        let mut config = Config::load().await?;

        if let Some(new_endpoint) = args.new_endpoint_url {
            config.endpoint_url = new_endpoint;
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let mut config = Config::load().await?;
    if let Some(interval) = args.refresh_interval {
        config.refresh_interval_seconds = interval;
    }

    // Join the network once; failure here is terminal, the supervisor restarts us
    let status = network::join()?;

    let client = ScoreboardClient::new(&config)?;
    let layout = DisplayLayout::from_config(&config);
    let mut scheduler = RefreshScheduler::new(
        Duration::from_secs(config.refresh_interval_seconds),
        status.connected,
    );

    if args.once {
        // Single cycle, plain output for terminal history
        let mut sink = PlainSink::stdout();
        let outcome = nba_scoreboard::scheduler::run_pipeline(&client, status.connected).await;
        let lines = format(&outcome, &layout);
        sink.render(&lines, &layout)?;
        return Ok(());
    }

    let mut sink = TerminalSink::stdout();

    // Startup banner on the display before the first cycle
    let banner = format_status(
        &[
            "Connected!".to_string(),
            format!("IP: {}", status.local_addr),
        ],
        &layout,
    );
    sink.render(&banner, &layout)?;

    info!(
        "Refreshing every {}s from {}",
        config.refresh_interval_seconds,
        client.endpoint()
    );

    let poll = Duration::from_millis(constants::SCHEDULER_POLL_MS);
    let mut shutdown = Box::pin(tokio::signal::ctrl_c());

    loop {
        tokio::select! {
            signal = &mut shutdown => {
                if let Err(e) = signal {
                    warn!("Failed listening for shutdown signal: {e}");
                }
                info!("Shutting down");
                break;
            }
            _ = tokio::time::sleep(poll) => {
                if scheduler.tick(Instant::now()) {
                    scheduler.run_cycle(&client, &layout, &mut sink).await?;
                }
            }
        }
    }

    Ok(())
}
