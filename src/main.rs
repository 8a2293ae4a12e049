use clap::Parser;

use rollbook::app;
use rollbook::cli::{output, Cli};
use rollbook::config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(2);
        }
    };

    config.init_logging();

    if let Err(e) = app::run(cli, config).await {
        output::error(&e.to_string());
        std::process::exit(if e.is_user_error() { 1 } else { 2 });
    }
}
