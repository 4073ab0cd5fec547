mod adapters;
mod app;
mod cli_args;
mod core;
mod global_constants;
mod presentation;


use std::process::ExitCode;

use clap::Parser;

use crate::app::SearchApp;
use crate::cli_args::CliArgs;
use crate::core::models::UserSettings;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(run());

    // A stdin read left behind by Ctrl+C at the prompt cannot be cancelled.
    runtime.shutdown_background();
    outcome
}

async fn run() -> anyhow::Result<ExitCode> {
    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    let args = CliArgs::parse();

    let settings = UserSettings::load(!args.no_save_settings)
        .unwrap_or_else(|error| {
            log::warn!("[MAIN] Failed to load settings: {:#}, using defaults", error);
            UserSettings::default()
        })
        .with_backend_url_override(args.backend_url.as_deref());

    let mut app = SearchApp::build(&settings)?;

    if args.is_one_shot() {
        return app
            .run_once(args.query.as_deref(), args.image.as_deref(), args.open)
            .await;
    }

    app.run_interactive().await?;
    Ok(ExitCode::SUCCESS)
}
