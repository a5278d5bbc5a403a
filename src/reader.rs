//! Frame stream reader - the incremental extraction core.
//!
//! Converts a raw byte source into a sequence of decoded, printed values,
//! with correct handling of chunk boundaries that do not align with frame
//! boundaries. All data accumulates in a single `BytesMut`; a two-state
//! machine tracks the one-time preamble skip:
//! - `AwaitingPreamble`: need the 8 preamble bytes before any frame parse
//! - `Streaming`: probe/decode/advance until the buffer runs dry
//!
//! The probe never consumes; only this module advances the buffer, and
//! only after a frame has been fully handled. Short data at any point
//! means "wait for the next chunk", never an error.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use bytes::{Buf, BytesMut};
use tracing::{debug, trace};

use crate::codec::ValueCodec;
use crate::error::{DumpError, Result};
use crate::protocol::{probe, DEFAULT_MAX_FRAME_SIZE, PREAMBLE_SIZE};

/// Read chunk size in bytes.
///
/// Any chunk size works; output is identical byte for byte regardless of
/// how the stream is sliced into reads.
pub const CHUNK_SIZE: usize = 1024;

/// Stream position relative to the one-time preamble skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    /// The 8 preamble bytes have not been consumed yet.
    AwaitingPreamble,
    /// Preamble skipped; the buffer head is a frame boundary.
    Streaming,
}

/// Reader that extracts, decodes, and prints frames from one capture.
///
/// Owns the accumulation buffer and two sinks: `out` receives one
/// rendered value per decoded frame, `diag` receives decode-error and
/// trailing-data reports. One instance processes one stream; state does
/// not carry across files.
pub struct FrameStreamReader<W, E> {
    buffer: BytesMut,
    state: StreamState,
    max_frame_size: u32,
    out: W,
    diag: E,
}

impl FrameStreamReader<io::Stdout, io::Stderr> {
    /// Create a reader bound to stdout and stderr.
    pub fn new() -> Self {
        Self::with_sinks(io::stdout(), io::stderr())
    }
}

impl Default for FrameStreamReader<io::Stdout, io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, E: Write> FrameStreamReader<W, E> {
    /// Create a reader with custom value and diagnostic sinks.
    pub fn with_sinks(out: W, diag: E) -> Self {
        Self {
            buffer: BytesMut::with_capacity(CHUNK_SIZE),
            state: StreamState::AwaitingPreamble,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            out,
            diag,
        }
    }

    /// Override the maximum accepted on-wire frame size.
    pub fn with_max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.max_frame_size = max_frame_size;
        self
    }

    /// Dump one capture file.
    ///
    /// Opens the file, streams it to the end, and reports trailing data.
    /// Every error is fatal for this file and propagates to the caller.
    pub fn dump<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "dumping capture");
        self.run(file)
    }

    /// Drive `source` to end of stream, then report trailing data.
    pub fn run<R: Read>(&mut self, mut source: R) -> Result<()> {
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let n = match source.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.feed(&chunk[..n])?;
        }
        self.finish()
    }

    /// Append one chunk and drain every complete frame now available.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<()> {
        self.append(chunk)?;
        self.drain()
    }

    /// Report bytes still buffered at end of stream.
    ///
    /// Trailing data is a diagnostic notice, never an error: a capture
    /// may legitimately end mid-frame.
    pub fn finish(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            debug!(bytes = self.buffer.len(), "trailing data at end of stream");
            write!(self.diag, "Trailing data: ")?;
            ValueCodec::render_raw(&self.buffer, &mut self.diag)?;
            writeln!(self.diag)?;
        }
        Ok(())
    }

    fn append(&mut self, chunk: &[u8]) -> Result<()> {
        let requested = self.buffer.len() + chunk.len();
        let limit = self.max_frame_size as usize + PREAMBLE_SIZE + CHUNK_SIZE;
        if requested > limit {
            return Err(DumpError::Buffer { requested, limit });
        }
        self.buffer.extend_from_slice(chunk);
        Ok(())
    }

    /// Extraction loop: preamble gate, probe, decode, print, advance.
    fn drain(&mut self) -> Result<()> {
        loop {
            if self.buffer.is_empty() {
                return Ok(());
            }

            if self.state == StreamState::AwaitingPreamble {
                if self.buffer.len() < PREAMBLE_SIZE {
                    return Ok(());
                }
                self.buffer.advance(PREAMBLE_SIZE);
                self.state = StreamState::Streaming;
                continue;
            }

            let span = match probe(&self.buffer, self.max_frame_size)? {
                Some(span) => span,
                None => return Ok(()),
            };

            let payload = span.payload(&self.buffer);
            match ValueCodec::decode(payload) {
                Ok(value) => {
                    ValueCodec::render(&value, &mut self.out)?;
                    writeln!(self.out)?;
                    trace!(consumed = span.consumed, "frame decoded");
                }
                Err(e) => {
                    writeln!(self.diag, "Error decoding frame: {e}")?;
                    ValueCodec::render_raw(payload, &mut self.diag)?;
                    writeln!(self.diag)?;
                    return Err(e);
                }
            }

            // Advance past the whole frame, length prefix included
            self.buffer.advance(span.consumed);
        }
    }
}

/// Dump one capture file to stdout and stderr.
pub fn dump<P: AsRef<Path>>(path: P) -> Result<()> {
    FrameStreamReader::new().dump(path)
}
