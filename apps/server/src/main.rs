use anyhow::Context;
use clap::Parser;
use natal::domain::config::{ApiConfig, LoggingConfig};
use natal::kernel::config::load_config;
use natal_logger::{Logger, parse_level, parse_rotation};
use natal_server::Server;
use std::path::PathBuf;

/// Birth chart sign service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (TOML, JSON or YAML); defaults to `server.*` when present.
    #[arg(short, long, env = "NATAL_CONFIG")]
    config: Option<PathBuf>,
}

fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&cfg.level)?)
        .console(cfg.console);
    let builder = match &cfg.filter {
        Some(filter) => builder.env_filter(filter.clone()),
        None => builder,
    };

    let logger = match &cfg.path {
        Some(path) => builder
            .path(path.clone())
            .json(cfg.json)
            .rotation(parse_rotation(&cfg.rotation)?)
            .max_files(cfg.max_files)
            .init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

#[natal_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: ApiConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
