//! Frame probing over a byte view.
//!
//! [`probe`] is a pure function: it inspects a read-only view and reports
//! where the next complete frame sits, without consuming anything. The
//! buffer-trim step that does consume bytes belongs to the view's owner.
//! Insufficient data is reported as `Ok(None)`, never as an error — a
//! frame may straddle any number of chunk reads.

use super::wire_format::{FrameHeader, FRAME_HEADER_SIZE};
use crate::error::Result;

/// Location of one complete frame within a buffer view.
///
/// A parse result, not an owned object: it is produced by one [`probe`]
/// call, consumed immediately by decode-and-print, and invalidated once
/// the underlying buffer advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpan {
    /// Total on-wire frame length; the buffer must advance by this much.
    pub consumed: usize,
    /// Payload start, relative to the view.
    pub payload_offset: usize,
    /// Payload length in bytes.
    pub payload_len: usize,
}

impl FrameSpan {
    /// The payload sub-range of `view` this span describes.
    ///
    /// # Panics
    ///
    /// Panics if `view` is not the view the span was probed from.
    #[inline]
    pub fn payload<'a>(&self, view: &'a [u8]) -> &'a [u8] {
        &view[self.payload_offset..self.payload_offset + self.payload_len]
    }
}

/// Probe a view for one complete frame.
///
/// Returns:
/// - `Ok(Some(span))` if the view starts with a complete frame
/// - `Ok(None)` if more data is needed (short header or short payload)
/// - `Err(DumpError::Frame)` if the header is malformed — this never
///   resolves with more input and is fatal for the stream
pub fn probe(view: &[u8], max_frame_size: u32) -> Result<Option<FrameSpan>> {
    let header = match FrameHeader::decode(view) {
        Some(header) => header,
        None => return Ok(None),
    };

    header.validate(max_frame_size)?;

    if view.len() < header.size as usize {
        return Ok(None);
    }

    Ok(Some(FrameSpan {
        consumed: header.size as usize,
        payload_offset: header.payload_offset(),
        payload_len: header.payload_len(),
    }))
}

/// Build one well-formed on-wire frame around `payload`.
///
/// The dump never writes frames on its own; this exists for fixtures and
/// tests that need capture material to read back.
pub fn build_frame(payload: &[u8]) -> Vec<u8> {
    let header = FrameHeader::for_payload(payload.len());
    let mut buf = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len());
    buf.extend_from_slice(&header.encode());
    buf.extend_from_slice(payload);
    buf
}
