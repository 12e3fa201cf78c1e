use std::env;

use ocio_common::error::Result;
use ocio_common::message::message_box;
use ocio_common::requirement::REQUIREMENTS;
use ocio_common::settings::{DEFAULT_SETTINGS_FILE, Settings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = run() {
        warn!(error = %e, "ocio-common failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load(DEFAULT_SETTINGS_FILE)?;
    let style = settings.message_box;
    info!(width = style.width, padding = style.padding, "settings loaded");

    let mut print = |row: &str| println!("{row}");
    let message = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !message.is_empty() {
        message_box(&message, style.width, style.padding, &mut print);
    }

    // one line per optional requirement
    let report = REQUIREMENTS
        .report()
        .into_iter()
        .map(|(name, available)| {
            let state = if available { "available" } else { "unavailable" };
            format!("{name}: {state}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    message_box(&report, style.width, style.padding, &mut print);
    Ok(())
}
