use anyhow::Context;

use response_model::{api, config::Config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    telemetry::init(config.log_format);

    tracing::info!(bind_addr = %config.bind_addr, "starting response-model");

    api::server::start_server(&config).await
}
