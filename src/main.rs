use clap::Parser;
use log::info;

use glimpse::api::GlimpseApi;
use glimpse::conf::Config;
use glimpse::core::{CliArgs, setup_logging};
use glimpse::service::GlimpseService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let args = CliArgs::parse();
    info!(args; "Glimpse started.");

    let config = Config::load(args.config.as_deref())?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let service = GlimpseService::new(config);
    let api = GlimpseApi::new(service);

    info!("Listening on {addr}");
    api.serve(&addr).await?;
    Ok(())
}
