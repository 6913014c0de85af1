mod client;
mod clipboard;
mod models;
mod score;
mod state;
mod tui;

use anyhow::Result;
use clap::Parser;

use crate::client::ApiClient;

/// Terminal client for the prompt evaluation API.
#[derive(Parser, Debug)]
#[command(name = "prompt-reviewer", version)]
struct Args {
    /// Base URL of the evaluation API
    #[arg(
        long,
        env = "PROMPT_REVIEWER_API_URL",
        default_value = "http://127.0.0.1:8080"
    )]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = ApiClient::new(args.api_url);
    tui::run(client).await
}
