// bases/tikbulk/src/main.rs
mod app;
mod args;
mod config;
mod output;

use clap::Parser;
use color_eyre::Result;
use app::App;
use args::Args;
use config::Config;
use output::OutputHandler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let verbose = args.verbose;
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(error) => {
            OutputHandler::new(verbose).print_error(&error.into());
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .init();

    let app = App::new(config);

    if let Err(error) = app.run().await {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
