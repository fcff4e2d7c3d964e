//! JSON Lines session format
//!
//! One detector payload per line, in the detector's own result shape:
//!
//! ```text
//! {"multiHandLandmarks": [[{"x":0.5,"y":0.5,"z":0.0}, ...]], "multiHandedness": [{"label":"Left","score":0.97,"index":0}]}
//! ```
//!
//! An optional `"sequence"` field overrides the running frame counter.
//! Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use handcrate_core::{DetectorResults, Error, HandFrame, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One line of a session file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    #[serde(flatten)]
    pub results: DetectorResults,
}

/// Lazily reads frames from a JSON Lines stream.
///
/// Each item is one frame or the error for one line. The reader cannot be
/// rewound; open the file again to replay it. An I/O error from the
/// underlying stream ends the iteration after it is reported.
pub struct FrameReader<R: BufRead> {
    reader: R,
    line: usize,
    next_sequence: u64,
    buffer: Vec<u8>,
    done: bool,
}

impl FrameReader<BufReader<File>> {
    /// Open a session file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened session");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            next_sequence: 0,
            buffer: Vec::new(),
            done: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    fn parse_line(&mut self, text: &str) -> Result<HandFrame> {
        let record: FrameRecord = serde_json::from_str(text).map_err(|e| Error::Parse {
            line: self.line,
            message: e.to_string(),
        })?;

        let sequence = record.sequence.unwrap_or(self.next_sequence);
        self.next_sequence = sequence.checked_add(1).ok_or_else(|| Error::Parse {
            line: self.line,
            message: format!("sequence {sequence} leaves no room for a following frame"),
        })?;

        record.results.into_frame(sequence).map_err(|e| match e {
            Error::InvalidLandmarkCount { .. } | Error::InvalidData(_) => Error::Parse {
                line: self.line,
                message: e.to_string(),
            },
            other => other,
        })
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<HandFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line += 1;
                    let buffer = std::mem::take(&mut self.buffer);
                    let item = match std::str::from_utf8(&buffer) {
                        Ok(text) if text.trim().is_empty() => None,
                        Ok(text) => Some(self.parse_line(text.trim())),
                        Err(e) => Some(Err(Error::Parse {
                            line: self.line,
                            message: format!("line is not valid UTF-8: {e}"),
                        })),
                    };
                    self.buffer = buffer;
                    match item {
                        Some(item) => return Some(item),
                        None => continue,
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::Io(e)));
                }
            }
        }
    }
}

/// Writes frames as JSON Lines
pub struct FrameWriter<W: Write> {
    writer: W,
}

impl FrameWriter<BufWriter<File>> {
    /// Create (or truncate) a session file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Append one frame
    pub fn write_frame(&mut self, frame: &HandFrame) -> Result<()> {
        let record = FrameRecord {
            sequence: Some(frame.sequence),
            results: DetectorResults::from_frame(frame),
        };
        let line = serde_json::to_string(&record)
            .map_err(|e| Error::InvalidData(format!("cannot serialize frame {}: {e}", frame.sequence)))?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
