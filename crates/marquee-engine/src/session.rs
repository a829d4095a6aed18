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


//! Running request lists through an engine.
//!
//! A `ReservationSession` owns an engine and the records of every request it
//! has processed, in input order. Records render as one line each:
//!
//! ```raw
//! R001 I7, I8, I9, I10
//! R002 party of 300 exceeds the maximum reservation size of 200
//! ```
//!
//! The id is followed by the granted seat codes, or by the rejection message.
//! A party of zero renders as the bare id.

use crate::{
    engine::ReservationEngine,
    monitor::{no_op::NoOperationMonitor, reservation_monitor::ReservationMonitor},
    outcome::{Assignment, RejectionReason},
};
use marquee_core::num::SeatWeight;
use marquee_model::loading::ReservationRequest;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The outcome of one processed request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReservationRecord<T> {
    id: String,
    party_size: usize,
    outcome: Result<Assignment<T>, RejectionReason>,
}

impl<T> ReservationRecord<T>
where
    T: SeatWeight,
{
    #[inline]
    pub fn new<S>(id: S, party_size: usize, outcome: Result<Assignment<T>, RejectionReason>) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            party_size,
            outcome,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn party_size(&self) -> usize {
        self.party_size
    }

    #[inline]
    pub fn outcome(&self) -> Result<&Assignment<T>, &RejectionReason> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl<T> std::fmt::Display for ReservationRecord<T>
where
    T: SeatWeight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(assignment) if assignment.is_empty() => write!(f, "{}", self.id),
            Ok(assignment) => write!(f, "{} {}", self.id, assignment),
            Err(reason) => write!(f, "{} {}", self.id, reason),
        }
    }
}

/// An engine together with the records of the requests it has processed.
#[derive(Debug, Clone)]
pub struct ReservationSession<T>
where
    T: SeatWeight,
{
    engine: ReservationEngine<T>,
    records: Vec<ReservationRecord<T>>,
}

impl<T> ReservationSession<T>
where
    T: SeatWeight,
{
    #[inline]
    pub fn new(engine: ReservationEngine<T>) -> Self {
        Self {
            engine,
            records: Vec::new(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &ReservationEngine<T> {
        &self.engine
    }

    #[inline]
    pub fn records(&self) -> &[ReservationRecord<T>] {
        &self.records
    }

    /// Consumes the session, returning the engine and the records.
    #[inline]
    pub fn into_parts(self) -> (ReservationEngine<T>, Vec<ReservationRecord<T>>) {
        (self.engine, self.records)
    }

    /// Processes one request and returns its record.
    #[inline]
    pub fn process(&mut self, request: &ReservationRequest) -> &ReservationRecord<T> {
        self.process_with_monitor(request, &mut NoOperationMonitor::new())
    }

    /// Processes one request, reporting it to `monitor`.
    pub fn process_with_monitor<M>(
        &mut self,
        request: &ReservationRequest,
        monitor: &mut M,
    ) -> &ReservationRecord<T>
    where
        M: ReservationMonitor<T> + ?Sized,
    {
        let outcome = self
            .engine
            .reserve_with_monitor(request.party_size(), monitor);
        self.records.push(ReservationRecord::new(
            request.id(),
            request.party_size(),
            outcome,
        ));
        &self.records[self.records.len() - 1]
    }

    /// Processes every request in order.
    pub fn process_all<'r, I, M>(&mut self, requests: I, monitor: &mut M)
    where
        I: IntoIterator<Item = &'r ReservationRequest>,
        M: ReservationMonitor<T> + ?Sized,
    {
        for request in requests {
            self.process_with_monitor(request, monitor);
        }
    }

    /// Writes one line per record.
    pub fn write_records<W: Write>(&self, writer: W) -> std::io::Result<()> {
        write_records(writer, &self.records)
    }

    /// Writes the records to a file, creating or truncating it.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_records(&mut writer)?;
        writer.flush()
    }
}

/// Writes one line per record.
pub fn write_records<T, W>(mut writer: W, records: &[ReservationRecord<T>]) -> std::io::Result<()>
where
    T: SeatWeight,
    W: Write,
{
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

/// The output path for an input file: `dir/name` becomes `dir/output_for_name`.
///
/// # Examples
///
/// ```rust
/// # use marquee_engine::session::default_output_path;
/// # use std::path::Path;
/// assert_eq!(
///     default_output_path(Path::new("data/friday.txt")),
///     Path::new("data/output_for_friday.txt")
/// );
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from("output_for_");
    if let Some(file_name) = input.file_name() {
        name.push(file_name);
    }
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::log::TracingMonitor;
    use marquee_model::policy::{SeatingPolicy, VenueDimensions};

    fn session() -> ReservationSession<u32> {
        ReservationSession::new(
            ReservationEngine::new(VenueDimensions::new(10, 20), SeatingPolicy::default()).unwrap(),
        )
    }

    fn requests() -> Vec<ReservationRequest> {
        vec![
            ReservationRequest::new("R001", 4),
            ReservationRequest::new("R002", 0),
            ReservationRequest::new("R003", 201),
            ReservationRequest::new("R004", 1),
        ]
    }

    #[test]
    fn test_records_follow_input_order() {
        let mut session = session();
        session.process_all(&requests(), &mut TracingMonitor::default());

        let lines: Vec<String> = session.records().iter().map(|r| r.to_string()).collect();
        assert_eq!(lines[0], "R001 I7, I8, I9, I10");
        assert_eq!(lines[1], "R002");
        assert_eq!(
            lines[2],
            "R003 party of 201 exceeds the maximum reservation size of 200"
        );
        assert!(lines[3].starts_with("R004 "));
        assert_eq!(session.engine().statistics().requests, 4);

        let record = &session.records()[2];
        assert_eq!(record.id(), "R003");
        assert_eq!(record.party_size(), 201);
        assert!(!record.is_success());
        assert!(matches!(
            record.outcome(),
            Err(RejectionReason::TooLarge { .. })
        ));
    }

    #[test]
    fn test_process_returns_record() {
        let mut session = session();
        let record = session.process(&ReservationRequest::new("R010", 2));
        assert!(record.is_success());
        assert_eq!(record.outcome().map(|a| a.num_seats()), Ok(2));
    }

    #[test]
    fn test_write_records_one_line_each() {
        let mut session = session();
        session.process_all(&requests(), &mut NoOperationMonitor::new());
        let mut out = Vec::new();
        session.write_records(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with('\n'));
        assert!(text.starts_with("R001 I7, I8, I9, I10\nR002\n"));
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output_for_input.txt");
        let mut session = session();
        session.process(&ReservationRequest::new("R001", 4));
        session.write_to_path(&path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "R001 I7, I8, I9, I10\n"
        );
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/tmp/in/requests.txt")),
            PathBuf::from("/tmp/in/output_for_requests.txt")
        );
        assert_eq!(
            default_output_path(Path::new("requests")),
            PathBuf::from("output_for_requests")
        );
    }
}
