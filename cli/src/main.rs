mod client;

use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use listings::{ErrorBody, SpaceCreate, SpaceQuery, SpaceUpdate};
use serde::Serialize;

use crate::client::{SpacesClient, describe_rejection};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", describe_rejection(*.status, .body.as_ref()))]
    Rejected { status: u16, body: Option<ErrorBody> },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to read payload: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn rejected(status: u16, text: &str) -> Self {
        Self::Rejected { status, body: serde_json::from_str(text).ok() }
    }
}

#[derive(Parser, Debug)]
#[command(name = "spaces-cli", about = "Space rental listings API CLI")]
struct Cli {
    #[arg(long, env = "SPACES_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the health endpoint.
    Ping,
    /// List spaces with optional filters.
    List(ListArgs),
    /// Show one space.
    Get { id: i64 },
    /// Create a space from a JSON object (`-` reads stdin).
    Create {
        #[arg(long)]
        data: String,
    },
    /// Partially update a space from a JSON object (`-` reads stdin).
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a space.
    Delete { id: i64 },
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long)]
    page: Option<i64>,
    #[arg(long)]
    per_page: Option<i64>,
    #[arg(long)]
    space_type: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long)]
    available: Option<bool>,
    #[arg(long)]
    search: Option<String>,
}

impl From<ListArgs> for SpaceQuery {
    fn from(args: ListArgs) -> Self {
        Self {
            page: args.page,
            per_page: args.per_page,
            space_type: args.space_type,
            city: args.city,
            state: args.state,
            min_price: args.min_price,
            max_price: args.max_price,
            is_available: args.available,
            search: args.search,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = SpacesClient::new(&cli.base_url)?;

    match cli.command {
        Command::Ping => print_json(&client.health().await?),
        Command::List(args) => print_json(&client.list(&args.into()).await?),
        Command::Get { id } => print_json(&client.get(id).await?),
        Command::Create { data } => {
            let payload: SpaceCreate = parse_payload(&read_data(&data)?)?;
            print_json(&client.create(&payload).await?)
        }
        Command::Update { id, data } => {
            let payload: SpaceUpdate = parse_payload(&read_data(&data)?)?;
            print_json(&client.update(id, &payload).await?)
        }
        Command::Delete { id } => {
            client.delete(id).await?;
            println!("deleted space {id}");
            Ok(())
        }
    }
}

/// `--data` value, or stdin when it is `-`.
fn read_data(data: &str) -> Result<String, CliError> {
    if data != "-" {
        return Ok(data.to_owned());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn parse_payload<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(raw.trim())?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
