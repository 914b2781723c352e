//! Vanity command - offline vanity token extraction

use clap::Args;

use crate::domain::VanityToken;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct VanityArgs {
    /// Bare vanity name or a steamcommunity.com profile URL
    pub input: String,
}

/// Print the extracted token; invalid input is an error
pub async fn run(args: VanityArgs) -> anyhow::Result<()> {
    logging::init_cli_logging("warn");

    let token = VanityToken::extract(&args.input)?;
    println!("{}", token);

    Ok(())
}
