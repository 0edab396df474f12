use anyhow::{Error, Result};
use tracing::info;
use yape_relay::{api::run_api_server, config::Config, utils::init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;

    init_tracing(config.log_format);

    info!(port = config.server_port, "Configuration validated. Server is starting.");

    run_api_server(config).await
}
