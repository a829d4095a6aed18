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


//! Reservation request loader.
//!
//! Request lists are plain text, one request per line:
//!
//! ```raw
//! R001 2     # reservation identifier, party size
//! R002 4
//! ```
//!
//! Tokens are whitespace-separated, `#` starts a comment running to the end
//! of the line, and blank or comment-only lines are skipped. Every error
//! carries the 1-based line number it was found on. With
//! `skip_malformed(true)` the loader drops bad lines with a warning instead
//! of failing, which suits long hand-edited lists.
//!
//! The loader accepts any `BufRead`, raw reader, file path or string slice.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// A single reservation request: who is asking, and for how many seats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationRequest {
    id: String,
    party_size: usize,
}

impl ReservationRequest {
    #[inline]
    pub fn new<S>(id: S, party_size: usize) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            party_size,
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
}

impl std::fmt::Display for ReservationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.party_size)
    }
}

/// Details about a token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The offending token.
    pub token: String,
    /// The type the token was parsed into (e.g. "usize").
    pub type_name: &'static str,
}

/// The error type of the request loader.
#[derive(Debug, thiserror::Error)]
pub enum RequestLoaderError {
    /// An I/O error occurred while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A party size could not be parsed.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseTokenError,
    },
    /// A line holds an identifier but no party size.
    #[error("line {line}: reservation '{id}' has no party size")]
    MissingPartySize { line: usize, id: String },
    /// A line holds more than an identifier and a party size.
    #[error("line {line}: unexpected trailing token '{token}'")]
    TrailingToken { line: usize, token: String },
}

impl RequestLoaderError {
    /// The 1-based line the error was found on, if it belongs to a line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::Parse { line, .. }
            | Self::MissingPartySize { line, .. }
            | Self::TrailingToken { line, .. } => Some(*line),
        }
    }
}

/// A configurable loader for reservation request lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestLoader {
    skip_malformed: bool,
}

impl RequestLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether malformed lines are skipped (with a warning) instead of failing.
    #[inline]
    pub fn skip_malformed(mut self, yes: bool) -> Self {
        self.skip_malformed = yes;
        self
    }

    /// Loads requests from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(
        &self,
        rdr: R,
    ) -> Result<Vec<ReservationRequest>, RequestLoaderError> {
        let mut requests = Vec::new();

        for (index, line) in rdr.lines().enumerate() {
            let line = line?;
            match parse_line(index + 1, &line) {
                Ok(Some(request)) => requests.push(request),
                Ok(None) => {}
                Err(e) if self.skip_malformed => {
                    tracing::warn!(error = %e, "skipping malformed reservation request");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(count = requests.len(), "loaded reservation requests");
        Ok(requests)
    }

    /// Loads requests from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<ReservationRequest>, RequestLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads requests from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(
        &self,
        r: R,
    ) -> Result<Vec<ReservationRequest>, RequestLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads requests from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<ReservationRequest>, RequestLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Parses one line. Blank and comment-only lines yield `Ok(None)`.
fn parse_line(line: usize, text: &str) -> Result<Option<ReservationRequest>, RequestLoaderError> {
    let content = match text.find('#') {
        Some(pos) => &text[..pos],
        None => text,
    };

    let mut tokens = content.split_whitespace();
    let Some(id) = tokens.next() else {
        return Ok(None);
    };

    let size_token = tokens
        .next()
        .ok_or_else(|| RequestLoaderError::MissingPartySize {
            line,
            id: id.to_owned(),
        })?;

    let party_size = size_token
        .parse::<usize>()
        .map_err(|_| RequestLoaderError::Parse {
            line,
            source: ParseTokenError {
                token: size_token.to_owned(),
                type_name: std::any::type_name::<usize>(),
            },
        })?;

    if let Some(token) = tokens.next() {
        return Err(RequestLoaderError::TrailingToken {
            line,
            token: token.to_owned(),
        });
    }

    Ok(Some(ReservationRequest::new(id, party_size)))
}
