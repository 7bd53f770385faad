//! Connectivity status command.

use anyhow::Result;
use roster_core::config::Config;
use roster_core::network::NetworkProbe;

pub async fn run(config: &Config) -> Result<()> {
    let status = NetworkProbe::from_config(config).check().await;
    tracing::info!(url = %config.probe_url, ?status, "connectivity probed");
    // A completed probe is never Unknown.
    println!("{}", status.label().unwrap_or("Unknown"));
    Ok(())
}
