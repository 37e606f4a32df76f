use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use hub_core::models::ctx::Config;
use hub_core::runtime::msg::Event;
use hub_core::runtime::Runtime;
use hub_env_native::{
    init_tracing, load_resource_details, load_resources, load_tags, NativeEnv, NativeModel,
    NativeModelField,
};
use tracing::info;

/// Fetches from the hub API and prints the resulting state as JSON.
#[derive(Parser, Debug)]
#[command(name = "hub-fetch", version)]
struct Cli {
    /// Hub API url, takes precedence over the API_URL environment variable
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Pretty-print the state
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// The resource list (default)
    Resources,
    /// A single resource
    Resource { id: u64 },
    /// The tags resources can be filtered by
    Tags,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = match cli.api_url {
        Some(api_url) => Config::from_api_url_var(Some(api_url)),
        None => Config::from_env(),
    }
    .context("Invalid hub API configuration")?;
    info!(api_url = %config.api_url(), "Loading from hub API");

    let (runtime, mut rx) = Runtime::<NativeEnv, _>::new(NativeModel::new(config), vec![], 1000);
    let (field, outcome) = match cli.command.unwrap_or(Command::Resources) {
        Command::Resources => {
            let outcome = match load_resources(&runtime, &mut rx).await {
                Some(Event::ResourcesFetched { count }) => {
                    info!(count, "Resources loaded");
                    Ok(())
                }
                Some(Event::ResourcesFetchFailed { error }) => {
                    Err(anyhow!("Failed to load resources: {error}"))
                }
                None => Err(anyhow!("Runtime stopped before resources were loaded")),
            };
            (NativeModelField::Resources, outcome)
        }
        Command::Resource { id } => {
            let outcome = match load_resource_details(&runtime, &mut rx, id).await {
                Some(Ok(_)) => Ok(()),
                Some(Err(error)) => Err(anyhow!("Failed to load resource {id}: {error}")),
                None => Err(anyhow!("Runtime stopped before resource {id} was loaded")),
            };
            (NativeModelField::ResourceDetails, outcome)
        }
        Command::Tags => {
            let outcome = match load_tags(&runtime, &mut rx).await {
                Some(Ok(tags)) => {
                    info!(count = tags.len(), "Tags loaded");
                    Ok(())
                }
                Some(Err(error)) => Err(anyhow!("Failed to load tags: {error}")),
                None => Err(anyhow!("Runtime stopped before tags were loaded")),
            };
            (NativeModelField::Tags, outcome)
        }
    };

    let state = runtime
        .model()
        .map_err(|_| anyhow!("model read failed"))?
        .get_state(&field)?;
    let state = if cli.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{state}");

    outcome
}
