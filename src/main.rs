use anyhow::{Context, Result};
use clap::Parser;
use timecsv::{cli::Cli, ExtractConfig};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = ExtractConfig::from(&args);
    timecsv::run(&config)
        .with_context(|| format!("failed to extract timings from {}", config.input.display()))?;

    Ok(())
}
