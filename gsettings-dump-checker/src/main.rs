use std::{env, path::Path, process::ExitCode};

use anyhow::Context;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gsettings_dump_checker::{
    constants::DUMP_FILE,
    dump,
    index::SettingsIndex,
    query::{Classification, Query},
};

fn main() -> ExitCode {
    // Structured logging on stderr; level is overridden by `RUST_LOG`.
    // Stdout carries nothing but the one-word classification.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(verdict) => {
            println!("{verdict}");
            ExitCode::from(verdict.exit_code())
        }
        Err(err) => {
            // Argument, lookup, and resource failures share one external
            // contract; the cause goes to stderr only.
            eprintln!("error: {err:#}");
            println!("{}", Classification::Error);
            ExitCode::from(Classification::Error.exit_code())
        }
    }
}

fn run() -> anyhow::Result<Classification> {
    let mut args = env::args().skip(1); // program name

    let query = Query::from_args(&mut args)?;
    if args.next().is_some() {
        warn!("ignoring extra arguments after <expected-value>");
    }

    let records =
        dump::read_dump(Path::new(DUMP_FILE)).with_context(|| format!("reading `{DUMP_FILE}`"))?;
    let index = SettingsIndex::build(records);

    Ok(query.evaluate(&index)?)
}
