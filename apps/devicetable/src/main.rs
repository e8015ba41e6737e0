use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use device_catalog as catalog;

#[derive(Parser, Debug)]
#[command(
    name = "devicetable",
    version,
    about = "Generate the markdown table of supported EtherCAT devices"
)]
struct Cli {
    /// Path to *.yml files for device documentation
    #[arg(long, default_value = "../../documentation/devices/")]
    path: PathBuf,
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let records = catalog::load_devices_dir(&cli.path)
        .with_context(|| format!("loading device documentation from {}", cli.path.display()))?;
    let devices = catalog::partition(records);
    let doc = catalog::render_markdown(&devices);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(doc.as_bytes())?;
    stdout.flush()?;
    info!(
        rows = devices.documented.len(),
        placeholders = devices.placeholders,
        "device table written"
    );
    Ok(())
}

fn setup_tracing() {
    // stdout is reserved for the generated markdown
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
