//! Compiled patterns and raw search results.
//!
//! Thin wrapper around the external match engine (`regex::bytes`), kept
//! byte-oriented so ASCII-8BIT buffers search the same way UTF-8 ones do
//! and capture regions come back as byte offsets.

use std::fmt;

use regex::bytes::Regex;
use smallvec::SmallVec;

use crate::errors::RuntimeError;

pub type Regions = SmallVec<[Option<(usize, usize)>; 8]>;

pub struct Pattern {
    regex: Regex,
    source: String,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, RuntimeError> {
        let regex = Regex::new(source)
            .map_err(|e| RuntimeError::argument(format!("invalid pattern: {e}")))?;
        Ok(Self { regex, source: source.to_string() })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Searches `subject` starting at byte offset `start`. Region 0 is
    /// the whole match; inner regions are `None` when a group did not
    /// participate.
    pub fn search(&self, subject: &[u8], start: usize) -> Option<Regions> {
        if start > subject.len() {
            return None;
        }
        let caps = self.regex.captures_at(subject, start)?;
        let mut regions: Regions = SmallVec::new();
        for i in 0..caps.len() {
            regions.push(caps.get(i).map(|m| (m.start(), m.end())));
        }
        Some(regions)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.source)
    }
}
