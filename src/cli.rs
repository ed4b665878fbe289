//! Command-line interface for strictly_hanoi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hanoi - Towers of Hanoi with a REST API and MCP interface
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Towers of Hanoi game service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "strictly_hanoi.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the MCP game server (stdio mode)
    Server,

    /// Run the REST game server
    Http {
        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the optimal moves for a tower of N disks
    Solve {
        /// Number of disks
        #[arg(short, long, default_value = "3")]
        disks: u8,
    },

    /// Auto-play an optimal game, printing the board after every move
    Play {
        /// Number of disks (config default if omitted)
        #[arg(short, long)]
        disks: Option<u8>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from(["strictly_hanoi", "solve", "--disks", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Solve { disks: 4 }));
        assert_eq!(cli.config, PathBuf::from("strictly_hanoi.toml"));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["strictly_hanoi", "http", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(
            cli.command,
            Command::Http {
                port: None,
                host: None
            }
        ));
    }
}
