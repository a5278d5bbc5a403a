//! Protocol module - wire format and frame probing.
//!
//! This module implements the byte-level grammar of the captured stream:
//! - 8-byte frame header encoding/decoding and validation
//! - Pure frame probe over a read-only buffer view
//! - Frame construction helper for fixtures

mod frame;
mod wire_format;

pub use frame::{build_frame, probe, FrameSpan};
pub use wire_format::{
    FrameHeader, DEFAULT_MAX_FRAME_SIZE, FRAME_HEADER_SIZE, MIN_DOFF, PREAMBLE_SIZE,
};
