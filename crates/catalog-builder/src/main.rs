mod builder;
mod config;
mod error;
mod identity;
mod images;
mod parser;
mod source;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Args, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_args(Args::parse())?;
    info!(
        source = %config.source_path.display(),
        image_root = %config.image_root.display(),
        output = %config.output_path.display(),
        "configuration loaded"
    );

    let output = builder::build_catalog(&config.source_path, &config.image_root, &config.image_base)?;
    builder::write_catalog(&config.output_path, &output.records)?;

    info!(
        clubs = output.club_count(),
        diagnostics = output.diagnostics.len(),
        path = %config.output_path.display(),
        "catalog written"
    );
    Ok(())
}
