//! Command-line client for the Obsidian Local REST API.
//!
//! Every subcommand performs one API call and prints the result as JSON on
//! stdout. Logs go to stderr (`RUST_LOG`, `--log-format json`).

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use obsidian_rest_client::{with_cancellation, ObsidianClient, SimpleSearchOptions};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "obsidian-rest", version)]
#[command(about = "Talk to an Obsidian vault through the Local REST API plugin")]
struct Cli {
    /// TOML or JSON config file (skips environment lookup)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Server address, e.g. https://127.0.0.1:27124
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Accept the plugin's self-signed certificate
    #[arg(long, global = true)]
    insecure: bool,

    /// Extra PEM root certificate to trust
    #[arg(long, global = true, value_name = "PATH")]
    ca_cert: Option<PathBuf>,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show server status (no authentication)
    Status,
    /// Print a note with its metadata
    Get {
        /// Vault-relative file path
        path: String,
    },
    /// List a directory (vault root by default)
    Ls {
        #[arg(default_value = "")]
        path: String,
    },
    /// Create or replace a file with content from --file or stdin
    Put {
        path: String,
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Append content from --file or stdin to a file
    Append {
        path: String,
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Delete a file
    Rm { path: String },
    /// Full-text search
    Search {
        query: String,
        /// Characters of context around each match (0 = server default)
        #[arg(long, default_value_t = 0)]
        context_length: u32,
    },
    /// Structured search with Dataview DQL or JsonLogic
    Query {
        /// Query language: dql or jsonlogic
        #[arg(long = "type", value_name = "TYPE", default_value = "dql")]
        query_type: String,
        /// DQL text, or a JSON document for jsonlogic
        query: String,
    },
    /// List editor commands
    Commands,
    /// Execute an editor command by id
    Exec { id: String },
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let overrides = Overrides {
        base_url: cli.url,
        timeout_secs: cli.timeout,
        insecure: cli.insecure,
        ca_cert: cli.ca_cert,
    };
    let client_config = config::load(cli.config, overrides).context("loading configuration")?;
    let client = ObsidianClient::from_config(&client_config).context("building client")?;
    debug!(?client, "client ready");

    let token = CancellationToken::new();
    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let output = run(&client, &token, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(client: &ObsidianClient, token: &CancellationToken, command: Commands) -> Result<Value> {
    let output = match command {
        Commands::Status => to_json(with_cancellation(token, client.status().get_status()).await?)?,
        Commands::Get { path } => {
            to_json(with_cancellation(token, client.vault().get_file(&path)).await?)?
        }
        Commands::Ls { path } => {
            to_json(with_cancellation(token, client.vault().list_directory(&path)).await?)?
        }
        Commands::Put { path, file } => {
            let content = read_content(file).await?;
            with_cancellation(token, client.vault().create_or_update_file(&path, &content)).await?;
            json!({ "path": path, "written": content.len() })
        }
        Commands::Append { path, file } => {
            let content = read_content(file).await?;
            with_cancellation(token, client.vault().append_to_file(&path, &content)).await?;
            json!({ "path": path, "appended": content.len() })
        }
        Commands::Rm { path } => {
            with_cancellation(token, client.vault().delete_file(&path)).await?;
            json!({ "path": path, "deleted": true })
        }
        Commands::Search { query, context_length } => {
            let options = SimpleSearchOptions::with_context_length(context_length);
            to_json(with_cancellation(token, client.search().simple_search(&query, Some(options))).await?)?
        }
        Commands::Query { query_type, query } => {
            let payload = query_payload(&query_type, query)?;
            to_json(with_cancellation(token, client.search().search_tagged(&query_type, payload)).await?)?
        }
        Commands::Commands => to_json(with_cancellation(token, client.commands().list()).await?)?,
        Commands::Exec { id } => {
            with_cancellation(token, client.commands().execute(&id)).await?;
            json!({ "executed": id })
        }
    };
    Ok(output)
}

/// DQL is sent as text; anything else is parsed as JSON and left for the
/// client to accept or reject by tag.
fn query_payload(query_type: &str, query: String) -> Result<Value> {
    if query_type == "dql" {
        return Ok(Value::String(query));
    }
    serde_json::from_str(&query).with_context(|| format!("{} query is not valid JSON", query_type))
}

async fn read_content(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut content = String::new();
            tokio::io::stdin().read_to_string(&mut content).await.context("reading stdin")?;
            Ok(content)
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
