mod api;
mod config;
mod display;
mod error;

use api::client::{Outcome, RiotApiClient};
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_api_error, display_error, display_forbidden, display_info, display_match,
    display_match_not_found, display_rotation,
};
use error::AppError;

#[derive(Parser, Debug)]
#[command(name = "Rift Lookup")]
#[command(about = "Look up the free champion rotation and match details from the Riot API", long_about = None)]
struct Args {
    /// Platform routing code, e.g. eun1, euw1, na1 (default: RIOT_PLATFORM or eun1)
    #[arg(short, long)]
    platform: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current free champion rotation
    Rotation,
    /// Show the scoreboard for one finished match
    Match {
        /// Match ID, e.g. EUN1_3571201980
        match_id: String,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(platform) = args.platform {
        config.platform = platform;
    }

    let client = RiotApiClient::new(config.clone());

    match args.command {
        Command::Rotation => {
            display_info(&format!(
                "Fetching champion rotation for {}",
                config.platform
            ));
            match client.get_rotation()? {
                Outcome::Success(rotation) => display_rotation(&rotation),
                Outcome::Forbidden => display_forbidden(),
                // the rotation endpoint never classifies 404 as NotFound
                Outcome::NotFound => display_api_error(404, ""),
                Outcome::Other { status, body } => display_api_error(status, &body),
            }
        }
        Command::Match { match_id } => {
            display_info(&format!("Fetching match {}", match_id));
            match client.get_match(&match_id)? {
                Outcome::Success(match_data) => display_match(&match_data),
                Outcome::Forbidden => display_forbidden(),
                Outcome::NotFound => display_match_not_found(),
                Outcome::Other { status, body } => display_api_error(status, &body),
            }
        }
    }

    Ok(())
}
