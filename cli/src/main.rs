//! Lichess SDK command-line client.
//!
//! Runs one SDK call and prints the result as JSON. Configuration comes from
//! the environment: `LICHESS_TOKEN`, `LICHESS_BASE_URL`, `LICHESS_USER` and
//! `RUST_LOG`.

use std::env;

use anyhow::{bail, Context};
use lichess_sdk::client::{ClientConfig, LichessClient};
use lichess_sdk::{GameExportParams, Variant};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_USER: &str = "chess-network";

const USAGE: &str = "usage: lichess-cli [command] [args...]

commands:
  user [id]                   profile of a user (default)
  history [id]                rating history of a user
  users <id,id,...>           several users at once
  status <id,id,...>          online status of users
  team <team-id>              members of a team
  following [id]              accounts a user follows
  followers [id]              followers of a user
  top                         top ten of every variant
  leaderboard <variant> [n]   best n players of a variant
  streamers                   streamers currently live
  crosstable <user> <user>    head-to-head results
  game <game-id>              export one game
  account                     the authenticated account";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lichess_sdk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match env::var("LICHESS_BASE_URL") {
        Ok(url) => ClientConfig::new(url),
        Err(_) => ClientConfig::default(),
    };
    if let Ok(token) = env::var("LICHESS_TOKEN") {
        config = config.with_token(token);
    }
    let default_user = env::var("LICHESS_USER").unwrap_or_else(|_| DEFAULT_USER.to_string());

    tracing::info!("Lichess API at {}", config.base_url);
    tracing::info!("Token configured: {}", config.token.is_some());

    let client = LichessClient::new(config).context("failed to create client")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("user");
    let arg = |i: usize| args.get(i).map(String::as_str);
    let user = || arg(1).unwrap_or(default_user.as_str()).to_string();

    let output = match command {
        "user" => to_json(client.get_user(&user()).await?)?,
        "history" => to_json(client.get_rating_history(&user()).await?)?,
        "users" => to_json(client.get_users(&split_ids(arg(1))).await?)?,
        "status" => to_json(client.get_user_status(&split_ids(arg(1))).await?)?,
        "team" => to_json(client.get_team_members(arg(1).unwrap_or_default()).await?)?,
        "following" => to_json(client.get_following(&user()).await?)?,
        "followers" => to_json(client.get_followers(&user()).await?)?,
        "top" => to_json(client.get_top_ten().await?)?,
        "leaderboard" => {
            let variant: Variant = arg(1).unwrap_or("blitz").parse()?;
            let count: u32 = match arg(2) {
                Some(n) => n.parse().context("leaderboard size must be a number")?,
                None => 10,
            };
            to_json(client.get_leaderboard(count, variant).await?)?
        }
        "streamers" => to_json(client.get_live_streamers().await?)?,
        "crosstable" => {
            let (Some(user1), Some(user2)) = (arg(1), arg(2)) else {
                bail!("crosstable needs two user names\n\n{}", USAGE);
            };
            to_json(client.get_crosstable(user1, user2).await?)?
        }
        "game" => to_json(
            client
                .get_game(arg(1).unwrap_or_default(), &GameExportParams::default())
                .await?,
        )?,
        "account" => to_json(client.get_account().await?)?,
        "help" | "-h" | "--help" => {
            println!("{}", USAGE);
            return Ok(());
        }
        other => bail!("unknown command: {}\n\n{}", other, USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    tracing::info!("{} done", command);

    Ok(())
}

fn to_json<T: serde::Serialize>(value: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn split_ids(arg: Option<&str>) -> Vec<String> {
    arg.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
