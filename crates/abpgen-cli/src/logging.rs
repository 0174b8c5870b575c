//! Tracing subscriber for the binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. `RUST_LOG`, when set, replaces the level picked from the
//! flags.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const TARGETS: [&str; 3] = ["abpgen", "abpgen_core", "abpgen_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("tracing subscriber already installed")
}

fn filter_directives(level: Level) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `--quiet` keeps errors only; each `-v` opens one more level past WARN.
fn level_for(args: &GlobalArgs) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(level_for(&args(0, false)), Level::WARN);
    }

    #[test]
    fn each_verbose_flag_opens_a_level() {
        assert_eq!(level_for(&args(1, false)), Level::INFO);
        assert_eq!(level_for(&args(2, false)), Level::DEBUG);
        assert_eq!(level_for(&args(3, false)), Level::TRACE);
        assert_eq!(level_for(&args(9, false)), Level::TRACE);
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(level_for(&args(0, true)), Level::ERROR);
        assert_eq!(level_for(&args(2, true)), Level::ERROR);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives(Level::DEBUG),
            "abpgen=debug,abpgen_core=debug,abpgen_adapters=debug"
        );
    }
}
