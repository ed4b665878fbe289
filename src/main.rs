//! Strictly Hanoi - Unified CLI
//!
//! Towers of Hanoi game service with multiple modes of operation.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rmcp::ServiceExt;
use std::path::Path;
use strictly_hanoi::{Board, Game, solve};
use strictly_hanoi_server::{GameService, HanoiConfig, HanoiServer, router};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(matches!(cli.command, Command::Server));

    let config = load_config(&cli.config)?;

    match cli.command {
        Command::Server => run_mcp_server(config).await,
        Command::Http { port, host } => run_http_server(config, host, port).await,
        Command::Solve { disks } => print_solution(disks),
        Command::Play { disks } => play(config, disks),
    }
}

/// Installs the subscriber. MCP mode writes to stderr so stdout carries only protocol.
fn initialize_tracing(stderr: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,strictly_hanoi=debug"));

    if stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(path: &Path) -> Result<HanoiConfig> {
    info!("Loading configuration");
    Ok(HanoiConfig::load(Some(path))?)
}

/// Run the MCP game server (stdio mode)
async fn run_mcp_server(config: HanoiConfig) -> Result<()> {
    info!("Starting Strictly Hanoi MCP server");

    let server = HanoiServer::with_service(GameService::new(config.game().clone()));

    info!("Server ready - connect via MCP protocol");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// Run the REST game server
async fn run_http_server(
    config: HanoiConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server().host().clone());
    let port = port.unwrap_or(*config.server().port());

    info!(%host, port, "Starting Strictly Hanoi REST server");

    let app = router(GameService::new(config.game().clone()));
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Print the canonical solution
#[instrument]
fn print_solution(disks: u8) -> Result<()> {
    // Rejects counts the solver cannot enumerate.
    Board::new(disks)?;

    let solution = solve(disks);
    println!("Optimal solution for {} disks ({} moves):", disks, solution.len());
    for (i, mv) in solution.enumerate() {
        println!("{:>6}. {}", i + 1, mv);
    }
    Ok(())
}

/// Auto-play a game following hints
#[instrument(skip(config))]
fn play(config: HanoiConfig, disks: Option<u8>) -> Result<()> {
    let settings = config.game();
    let disks = settings.disk_count(disks.map(i64::from))?;
    let mut game = Game::new(disks, *settings.target_pole())?
        .with_history_limit(*settings.history_limit());

    println!("{}", game.board());
    while !game.is_solved() {
        let mv = game.step()?;
        println!("Move {}: {}\n", game.moves(), mv);
        println!("{}", game.board());
    }

    println!(
        "Solved {} disks in {} moves ({:.0}% on pole {}).",
        disks,
        game.moves(),
        game.progress(),
        game.target().index()
    );
    Ok(())
}
