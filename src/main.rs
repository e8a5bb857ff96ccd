//! monitor-api - uptime monitor with chat alerts
//!
//! Probes configured health endpoints and serves a JSON status API.

use clap::Parser;
use monitor_api::config::DEFAULT_CONFIG_PATH;
use monitor_api::server::{RunOptions, run_server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "monitor_api", version)]
#[command(about = "Uptime monitor for HTTP health endpoints with WhatsApp alerts")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "MONITOR_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Fail instead of using defaults when the configuration file is missing
    #[arg(long)]
    require_config: bool,

    /// Address to bind (overrides the configuration file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides the configuration file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long, env = "MONITOR_LOG_JSON")]
    log_json: bool,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside development
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging(args.log_json);

    let options = RunOptions {
        config_path: args.config,
        require_config: args.require_config,
        host: args.host,
        port: args.port,
    };

    match run_server(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
