mod dice;
mod histogram;
mod utils;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "sivect";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Build sparse integer count vectors and compare them with the Dice similarity.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log debug output (RUST_LOG takes precedence)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(dice::cli::create_dice_cli())
        .subcommand(histogram::cli::create_histogram_cli())
}

fn init_logging(matches: &ArgMatches) {
    let default_level = if matches.get_flag("verbose") {
        consts::VERBOSE_LOG_LEVEL
    } else {
        consts::DEFAULT_LOG_LEVEL
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // DICE
        //
        Some((dice::cli::DICE_CMD, matches)) => {
            dice::handlers::run_dice(matches)?;
        }

        //
        // HISTOGRAM
        //
        Some((histogram::cli::HISTOGRAM_CMD, matches)) => {
            histogram::handlers::run_histogram(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from([consts::BIN_NAME, "dice", "-n", "10", "-a", "1", "-b", "1", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
