mod cli;
mod commands;

use cli::{DumpParams, FreezeParams, build_cli, verbosity};
use tracing_subscriber::filter::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(verbosity(&matches));

    match matches.subcommand() {
        Some(("freeze", m)) => {
            let params = FreezeParams::from_matches(m);
            commands::freeze::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr so they never mix with an artifact on stdout.
/// `RUST_LOG` overrides the level picked by `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
