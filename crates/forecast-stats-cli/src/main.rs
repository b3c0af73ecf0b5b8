use clap::Parser;

mod cli;

use cli::args::Cli;
use cli::commands::{dispatch, exit_codes};
use forecast_stats_core::errors::ConfigError;

fn main() {
    let cli = Cli::parse();
    cli::logging::init_logging(&cli.log_level);

    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) if e.downcast_ref::<ConfigError>().is_some() => {
            eprintln!("{e}");
            exit_codes::CONFIG_ERROR
        }
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::CONFIG_ERROR
        }
    };
    std::process::exit(code);
}
