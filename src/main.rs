mod clean;
mod cli;
mod config;
mod error;
mod walk;

use std::error::Error;

use clap::Parser;

use cli::Cli;
use config::{FileConfig, Options};

/// Route `log` output to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn execute(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    let input_dir = (!cli.reads_stdin() && cli.input.is_dir()).then_some(cli.input.as_path());
    let file_config = FileConfig::load(cli.config.as_deref(), input_dir)?;
    let opts = Options::resolve(cli, file_config);
    log::debug!("strategy: {}", opts.strategy.name());
    clean::run(&cli.input, cli.output.as_deref(), &opts)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
