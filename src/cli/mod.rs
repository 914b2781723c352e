//! CLI module for the Steam gateway
//!
//! Subcommands:
//! - `serve`: run the HTTP gateway
//! - `vanity`: print the vanity token extracted from a name or profile URL

pub mod serve;
pub mod vanity;

use clap::{Parser, Subcommand};

/// Steam Gateway - authenticated, rate-limited front for the Steam Web API
#[derive(Parser)]
#[command(name = "steam-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway server
    Serve,

    /// Extract the vanity token from a name or profile URL
    Vanity(vanity::VanityArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["steam-gateway", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_vanity() {
        let cli = Cli::try_parse_from([
            "steam-gateway",
            "vanity",
            "https://steamcommunity.com/id/gabelogannewell/",
        ])
        .unwrap();

        match cli.command {
            Command::Vanity(args) => {
                assert_eq!(args.input, "https://steamcommunity.com/id/gabelogannewell/")
            }
            _ => panic!("expected vanity command"),
        }
    }

    #[test]
    fn test_vanity_requires_input() {
        assert!(Cli::try_parse_from(["steam-gateway", "vanity"]).is_err());
    }
}
