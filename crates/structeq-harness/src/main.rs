//! Equality scenario runner
//!
//! Runs every scenario under every configured assertion style, prints a
//! summary, and exits non-zero when any comparison reported a difference.

use anyhow::Result;
use structeq_harness::{Harness, HarnessConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = HarnessConfig::from_env()?;
    info!(?config, "starting equality scenarios");

    let mut harness = Harness::new(config);
    harness.run_all();
    harness.print_summary();

    if !harness.all_passed() {
        info!(failed = harness.failures().count(), "finished with differences");
        std::process::exit(1);
    }

    Ok(())
}
