use chatbox::ClockStyle;
use chatbox::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatbox", about = "Terminal chat widget for a /send_message backend")]
struct Args {
    /// Server base URL, e.g. http://127.0.0.1:5000
    #[arg(long)]
    base_url: Option<String>,

    /// Path the message is POSTed to
    #[arg(long)]
    endpoint: Option<String>,

    /// Seconds to wait for a reply (0 waits forever)
    #[arg(long = "timeout", value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Timestamp format for message bubbles
    #[arg(long, value_enum)]
    clock: Option<ClockStyle>,

    /// Start with the chat panel open
    #[arg(long)]
    open: bool,

    /// Where log output goes (the terminal belongs to the UI)
    #[arg(long, default_value = "chatbox.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load config: {e}")))?;

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            endpoint: args.endpoint,
            timeout_secs: args.timeout_secs,
            clock: args.clock,
            open: args.open,
        },
    );

    log::info!(
        "Chatbox starting up: endpoint {}, timeout {:?}",
        resolved.endpoint_url(),
        resolved.timeout
    );

    chatbox::tui::run(resolved)
}
