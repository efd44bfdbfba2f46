use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use workorders::{env_file, envelope, fetch, WorkOrderError};

/// Fetches the project work-order listing and prints it as readable JSON.
///
/// The output is a single JSON envelope on stdout. On any failure the
/// envelope carries `"success": false` and a message; the exit code is 0
/// either way, so scripted callers can rely on the envelope alone.
#[derive(Parser, Debug)]
#[command(name = "workorders")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the .env settings file holding API_KEY.
    #[arg(long, value_name = "FILE", default_value = ".env")]
    env_path: PathBuf,

    /// Override the work-orders endpoint URL.
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    match run(&args) {
        Ok(body) => println!("{}", envelope::success(&body)),
        Err(err) => {
            warn!("{}", err);
            println!("{}", envelope::failure(&err.to_string()));
        }
    }
}

fn run(args: &Args) -> Result<String, WorkOrderError> {
    let settings = env_file::load(&args.env_path)?;

    let api_key = settings
        .get("API_KEY")
        .filter(|value| !value.is_empty())
        .ok_or_else(|| WorkOrderError::simple("API_KEY not found in .env file"))?;

    let url = args.url.as_deref().unwrap_or(fetch::API_URL);
    info!("fetching work orders from {}", url);
    fetch::work_orders(url, api_key)
}
