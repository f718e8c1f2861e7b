use elf_herald::cli::{Cli, Command};
use elf_herald::client::{aoc::AoC, discord::Discord};
use elf_herald::config::Settings;
use elf_herald::core::{announce::Announcer, commands::SlashCommand, signature::SignatureVerifier};
use elf_herald::router::{create_router, AppState};
use elf_herald::scheduler::{JobProcess, Scheduler};
use elf_herald::storage::MemoryCache;

use chrono::Utc;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = Settings::new(&cli)?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(settings.get_trace_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(settings).await?,
        Command::Announce { at } => {
            let announcer = Announcer::new(&settings)?;
            announcer.announce(at.unwrap_or_else(Utc::now)).await?;
        }
        Command::Register => {
            let discord = Discord::new(&settings)?;
            discord
                .register_commands(settings.discord_application_id, &SlashCommand::definitions())
                .await?;
        }
    };

    Ok(())
}

async fn serve(settings: Settings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cache = MemoryCache::new();
    let aoc = AoC::new(&settings, cache)?;
    let verifier = SignatureVerifier::from_hex(&settings.discord_public_key)?;

    let announcer = Arc::new(Announcer::new(&settings)?);
    let sched = Scheduler::new(announcer).await?;
    sched
        .add_job(JobProcess::AnnounceDailyChallenge(&settings.announce_schedule))
        .await?;

    info!("Starting scheduler.");
    sched.start().await?;

    let app = create_router(AppState::new(
        aoc,
        verifier,
        settings.advent_year,
        settings.discord_application_id,
    ));

    let listener = TcpListener::bind(settings.listen_on()).await?;
    info!("Listening for interactions on {}", settings.listen_on());
    axum::serve(listener, app).await?;

    Ok(())
}
