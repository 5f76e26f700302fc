use anyhow::Context;
use clap::Parser;
use staffpick::cli::Cli;
use staffpick::config::Config;
use staffpick::logging::init_tracing;
use staffpick::ui::runtime;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    cli.demo.apply(&mut config);
    config.validate().context("Invalid settings")?;
    tracing::info!("Starting {:?} demo", cli.demo);

    runtime::run(config, cli.demo).await
}
