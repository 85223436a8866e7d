//! Puppet Dash client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. The application controller via `App::builder`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! cargo run -p puppet-dash-client
//! PUPPET_DASH_DATA_DIR=/tmp/puppets cargo run -p puppet-dash-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use puppet_dash_client::Client;
    use runtime::{App, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging(std::env::var("PUPPET_DASH_SESSION").ok())?;

    tracing::info!("Starting Puppet Dash client");
    tracing::info!("Data directory: {}", runtime_config.data_dir.display());

    // 3. Build the controller (loads persisted records)
    let app = App::builder().config(runtime_config).build()?;

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().app(app).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
