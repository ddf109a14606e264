//! CLI entry point for `hostdb`.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use hostdb::api::{Client, ClientConfig};
use hostdb::predicate::{ClauseSet, Limit};
use hostdb::record::RecordSet;
use serde::de::DeserializeOwned;
use serde_json::json;

#[derive(Parser)]
#[command(name = "hostdb", about = "Compile HostDB predicates and submit inventory records")]
struct Cli {
    /// Print debug diagnostics
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON clause set into a WHERE fragment and its parameters
    Where {
        /// JSON file holding the clause set
        input: PathBuf,

        /// Row cap; 0 leaves it unset
        #[arg(long, default_value_t = 0)]
        limit: i64,

        /// Rows to skip
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },

    /// Write a JSON record set to disk as sample data
    Save {
        /// JSON file holding the record set
        input: PathBuf,

        /// Output path (defaults to /sample-data/<type>.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Submit a JSON record set to HostDB
    Send {
        /// JSON file holding the record set
        input: PathBuf,

        /// Query string used to label the request
        #[arg(long, default_value = "")]
        query: String,

        /// API base URL
        #[arg(long, env = "HOSTDB_URL", default_value = "")]
        url: String,

        /// Basic-auth user
        #[arg(long, env = "HOSTDB_USER", default_value = "")]
        user: String,

        /// Basic-auth password
        #[arg(long, env = "HOSTDB_PASS", default_value = "", hide_env_values = true)]
        pass: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Where {
            input,
            limit,
            offset,
        } => {
            let clause_set: ClauseSet = read_json(&input);
            let fragment = match clause_set.to_sql() {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Invalid predicate: {e}");
                    process::exit(1);
                }
            };
            let limit = Limit { limit, offset }.to_sql();
            let output = json!({
                "where": fragment.sql,
                "limit": limit,
                "values": fragment.values,
            });
            match serde_json::to_string_pretty(&output) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error encoding output: {e}");
                    process::exit(2);
                }
            }
        }
        Command::Save { input, out } => {
            let set: RecordSet = read_json(&input);
            if let Err(e) = set.save(out.as_deref()) {
                eprintln!("Error saving records: {e}");
                process::exit(2);
            }
        }
        Command::Send {
            input,
            query,
            url,
            user,
            pass,
        } => {
            let set: RecordSet = read_json(&input);
            let client = match Client::new(ClientConfig::new(url, user, pass)) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error configuring client: {e}");
                    process::exit(2);
                }
            };
            if let Err(e) = client.post_record_set(&set, &query).await {
                eprintln!("Error sending records: {e}");
                process::exit(1);
            }
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> T {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(2);
        }
    };
    match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(2);
        }
    }
}
