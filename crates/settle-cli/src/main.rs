//! Settle CLI application
//!
//! Command-line interface for building and tracking debt payment plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use settle_core::{params::ListPlans, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        today,
        command,
    } = Args::parse();

    let mut builder = PlannerBuilder::new().with_database_path(database_file);
    if let Some(today) = today {
        builder = builder.with_start_date(today);
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));

    info!("Settle started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Account { command }) => cli.handle_account_command(command).await,
        Some(Overview { command }) => cli.handle_overview_command(command).await,
        None => cli.list_plans(&ListPlans::default()).await,
    }
}
