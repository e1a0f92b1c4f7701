//! Vexon CLI
//!
//! Terminal frontend for the Vexon API. The session is kept in a JSON file,
//! playing the part browser local storage plays for the web frontend.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vexon_client::{ApiClient, ClientConfig};
use vexon_core::FileSessionStore;

use crate::commands::{Command, Outcome, USAGE};

/// Session file: `VEXON_SESSION_FILE`, else `~/.vexon/<key>.json`
fn session_path(config: &ClientConfig) -> PathBuf {
    if let Ok(path) = std::env::var("VEXON_SESSION_FILE") {
        return PathBuf::from(path);
    }
    let home = std::env::var_os("HOME").map_or_else(std::env::temp_dir, PathBuf::from);
    home.join(".vexon").join(format!("{}.json", config.session_key))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    let config = ClientConfig::from_env();
    let path = session_path(&config);
    tracing::debug!(base_url = %config.base_url, session = %path.display(), "configuration loaded");
    if config.captcha_site_key.is_none() {
        tracing::debug!("VEXON_CAPTCHA_SITE_KEY not set; pass --captcha tokens explicitly");
    }

    let client = ApiClient::http(config, Arc::new(FileSessionStore::new(path)));

    match commands::run(&client, command).await? {
        Outcome::Envelope { json, success } => {
            println!("{json}");
            Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Outcome::Text(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
