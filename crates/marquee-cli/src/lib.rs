// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Command-line front end.
//!
//! Reads a request list, seats every request in input order against one
//! venue, and writes one record line per request to the output file.

use anyhow::{Context, Result};
use clap::Parser;
use marquee_engine::{
    engine::ReservationEngine, monitor::log::TracingMonitor, session::ReservationSession,
    session::default_output_path, stats::EngineStatistics,
};
use marquee_model::{
    loading::RequestLoader,
    policy::{SeatingPolicy, VenueDimensions},
};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// The weight type used by the binary.
pub type Weight = u64;

/// Seat socially-distanced reservations in a rectangular venue.
#[derive(Debug, Clone, Parser)]
#[command(name = "marquee", version, about)]
pub struct Args {
    /// Request list, one `<id> <party size>` pair per line.
    pub input: PathBuf,

    /// Where to write the records; defaults to `output_for_<input name>` next to the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of rows in the venue (at most 26).
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Number of seats per row.
    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    /// JSON file with a seating policy; missing fields keep their defaults.
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Print the seat grid after every request.
    #[arg(long)]
    pub show_grid: bool,

    /// Skip malformed request lines instead of failing.
    #[arg(long)]
    pub skip_malformed: bool,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub statistics: EngineStatistics,
}

/// Reads and validates a JSON seating policy.
pub fn load_policy(path: &Path) -> Result<SeatingPolicy<Weight>> {
    let file = File::open(path)
        .with_context(|| format!("could not open policy file '{}'", path.display()))?;
    let policy: SeatingPolicy<Weight> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse policy file '{}'", path.display()))?;
    policy
        .validate()
        .with_context(|| format!("invalid policy in '{}'", path.display()))?;
    Ok(policy)
}

/// Runs one session as described by `args`.
pub fn run(args: &Args) -> Result<RunSummary> {
    let policy = match &args.policy {
        Some(path) => load_policy(path)?,
        None => SeatingPolicy::default(),
    };
    let dimensions = VenueDimensions::new(args.rows, args.cols);
    tracing::info!(venue = %dimensions, policy = %policy, "starting session");

    let engine = ReservationEngine::new(dimensions, policy)
        .context("could not set up the venue")?;

    let requests = RequestLoader::new()
        .skip_malformed(args.skip_malformed)
        .from_path(&args.input)
        .with_context(|| format!("could not read requests from '{}'", args.input.display()))?;

    let mut session = ReservationSession::new(engine);
    let mut monitor = TracingMonitor::default();
    for request in &requests {
        session.process_with_monitor(request, &mut monitor);
        if args.show_grid {
            println!("{}\n", session.engine().grid());
        }
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    session
        .write_to_path(&output_path)
        .with_context(|| format!("could not write records to '{}'", output_path.display()))?;

    Ok(RunSummary {
        output_path,
        statistics: *session.engine().statistics(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(input: PathBuf) -> Args {
        Args {
            input,
            output: None,
            rows: 10,
            cols: 20,
            policy: None,
            show_grid: false,
            skip_malformed: false,
        }
    }

    #[test]
    fn test_run_writes_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.txt");
        fs::write(&input, "R001 4\nR002 300\n").unwrap();

        let summary = run(&args(input)).unwrap();
        assert_eq!(summary.output_path, dir.path().join("output_for_requests.txt"));
        assert_eq!(
            fs::read_to_string(&summary.output_path).unwrap(),
            "R001 I7, I8, I9, I10\nR002 party of 300 exceeds the maximum reservation size of 200\n"
        );
        assert_eq!(summary.statistics.requests, 2);
    }

    #[test]
    fn test_run_with_policy_file_and_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.txt");
        let policy = dir.path().join("policy.json");
        let output = dir.path().join("out.txt");
        fs::write(&input, "R001 3\n").unwrap();
        fs::write(&policy, r#"{ "max_reservation_size": 2 }"#).unwrap();

        let mut args = args(input);
        args.policy = Some(policy);
        args.output = Some(output.clone());
        let summary = run(&args).unwrap();

        assert_eq!(summary.output_path, output);
        assert_eq!(summary.statistics.rejected_too_large, 1);
    }

    #[test]
    fn test_run_reports_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.txt");
        fs::write(&input, "R001 two\n").unwrap();
        let err = run(&args(input.clone())).unwrap_err();
        assert!(format!("{:#}", err).contains("line 1"));

        let mut lenient = args(input);
        lenient.skip_malformed = true;
        assert_eq!(run(&lenient).unwrap().statistics.requests, 0);
    }

    #[test]
    fn test_run_rejects_invalid_venue() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.txt");
        fs::write(&input, "R001 1\n").unwrap();
        let mut args = args(input);
        args.rows = 30;
        let err = run(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("could not set up the venue"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "marquee",
            "in.txt",
            "--rows",
            "5",
            "--show-grid",
            "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.rows, 5);
        assert_eq!(args.cols, 20);
        assert!(args.show_grid);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }
}
