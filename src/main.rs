//! Sums binary numbers given on stdin, one per line.
//!
//! Numbers are arbitrary long, they are never converted to machine integers - addition works
//! directly on digit strings. Any invalid line fails the whole run, and then nothing but the
//! error is printed.

use anyhow::Context;
use std::io::{stdin, stdout, BufWriter, Write};
use std::process::ExitCode;
use structopt::StructOpt;

mod error;
mod logging;
mod sum;

#[derive(Debug, StructOpt)]
#[structopt(name = "binsum", about = "Sums binary numbers read from stdin")]
struct Opt {
    /// Logs to stderr, repeat for more details (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn run() -> anyhow::Result<()> {
    let report = sum::accumulate(stdin().lock())?;

    let out = stdout();
    let mut out = BufWriter::new(out.lock());
    write!(out, "{}", report).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}

fn main() -> ExitCode {
    let opt = Opt::from_args();

    if let Err(error) = logging::init(opt.verbose) {
        eprintln!("Error: {:#}", error);
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
