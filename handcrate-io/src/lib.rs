//! I/O for recorded hand landmark sessions
//!
//! This crate reads and writes sequences of per-frame detector payloads so a
//! session captured from the landmark detector can be replayed through the
//! gesture pipeline offline.

pub mod jsonl;

pub use jsonl::{FrameReader, FrameRecord, FrameWriter};

use std::path::Path;

use handcrate_core::{DetectorResults, Error, HandFrame, Result};

/// Trait for reading whole sessions from files
pub trait SessionReader {
    fn read_session<P: AsRef<Path>>(path: P) -> Result<Vec<HandFrame>>;
}

/// Trait for writing whole sessions to files
pub trait SessionWriter {
    fn write_session<P: AsRef<Path>>(frames: &[HandFrame], path: P) -> Result<()>;
}

/// JSON Lines sessions (`.jsonl`, `.ndjson`)
pub struct JsonLinesSession;

impl SessionReader for JsonLinesSession {
    fn read_session<P: AsRef<Path>>(path: P) -> Result<Vec<HandFrame>> {
        FrameReader::open(path)?.collect()
    }
}

impl SessionWriter for JsonLinesSession {
    fn write_session<P: AsRef<Path>>(frames: &[HandFrame], path: P) -> Result<()> {
        let mut writer = FrameWriter::create(path)?;
        for frame in frames {
            writer.write_frame(frame)?;
        }
        writer.flush()
    }
}

/// A single JSON array of detector payloads (`.json`)
pub struct JsonArraySession;

impl SessionReader for JsonArraySession {
    fn read_session<P: AsRef<Path>>(path: P) -> Result<Vec<HandFrame>> {
        let content = std::fs::read_to_string(path)?;
        let payloads: Vec<DetectorResults> = serde_json::from_str(&content)
            .map_err(|e| Error::Parse { line: e.line(), message: e.to_string() })?;
        payloads
            .into_iter()
            .enumerate()
            .map(|(sequence, results)| results.into_frame(sequence as u64))
            .collect()
    }
}

/// Auto-detect format and read a session
pub fn read_session<P: AsRef<Path>>(path: P) -> Result<Vec<HandFrame>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("jsonl") | Some("ndjson") => JsonLinesSession::read_session(path),
        Some("json") => JsonArraySession::read_session(path),
        _ => Err(Error::InvalidData(format!(
            "Unsupported session format: {:?}",
            path.extension()
        ))),
    }
}

/// Auto-detect format and write a session. Only JSON Lines is written.
pub fn write_session<P: AsRef<Path>>(frames: &[HandFrame], path: P) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("jsonl") | Some("ndjson") => JsonLinesSession::write_session(frames, path),
        _ => Err(Error::InvalidData(format!(
            "Unsupported session format for writing: {:?}",
            path.extension()
        ))),
    }
}

#[cfg(test)]
mod tests;
