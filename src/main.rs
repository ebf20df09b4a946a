use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use gapread::bench::GapReadBenchmark;
use gapread::config::GapReadConfig;
use gapread::models::GapReadResult;
use gapread::{GapReadError, Result, APP_NAME, LOG_ENV};
use log::debug;

fn main() {
    // Diagnostics go to stderr; stdout carries only the report
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    match run(std::env::args_os().collect()) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            debug!("exiting: {:?}", e);
            println!("{}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run(args: Vec<OsString>) -> Result<GapReadResult> {
    let path = parse_args(args)?;
    let benchmark = GapReadBenchmark::new(GapReadConfig::default())?;
    benchmark.run(&path)
}

/// Exactly one argument, the file to read
fn parse_args(args: Vec<OsString>) -> Result<PathBuf> {
    let mut args = args.into_iter();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_NAME.to_string());

    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(GapReadError::UsageError { program }),
    }
}
