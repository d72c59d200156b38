use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcardkit_app::cli::Cli;
use vcardkit_app::convert::{convert, read_vcf};
use vcardkit_core::config::load_config;
use vcardkit_core::constants::{PRODUCT_NAME, PRODUCT_VERSION};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::debug!(version = PRODUCT_VERSION, "Starting {PRODUCT_NAME}");

    let mut config = load_config()?;
    cli.apply(&mut config.serialization, &mut config.logging);

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let mut stdout = std::io::stdout().lock();
    for path in &cli.files {
        let input = read_vcf(path, config.input.max_file_size)?;
        let output = convert(&input, &config.serialization)
            .with_context(|| format!("failed to convert {}", path.display()))?;
        stdout
            .write_all(output.as_bytes())
            .context("failed to write output")?;
    }
    stdout.flush().context("failed to write output")?;

    Ok(())
}
