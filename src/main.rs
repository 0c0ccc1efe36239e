//! Business Assistant server - branded, versioned business-plan documents.

use anyhow::Context;

use business_assistant::config::AppConfig;
use business_assistant::setup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    setup::init_telemetry(&config.server)?;

    let app = setup::initialize_app(&config)?;
    setup::start_server(&config.server, app).await
}
