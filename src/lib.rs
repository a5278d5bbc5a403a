//! # wiredump
//!
//! Offline dump tool for length-delimited binary capture streams.
//!
//! A capture file holds an 8-byte stream preamble followed by framed,
//! self-describing MessagePack payloads. `wiredump` strips the preamble,
//! extracts each frame, decodes its payload to a value tree, and prints
//! one rendered value per frame to stdout. Undecodable payloads and
//! trailing bytes are reported on the diagnostic stream.
//!
//! ## Architecture
//!
//! - **protocol**: frame grammar — header codec and the pure frame probe
//! - **codec**: MessagePack value decode and rendering
//! - **reader**: the streaming extraction loop over an accumulation buffer
//!
//! ## Example
//!
//! ```no_run
//! use wiredump::FrameStreamReader;
//!
//! fn main() -> wiredump::Result<()> {
//!     FrameStreamReader::new().dump("capture.bin")
//! }
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod reader;

pub use error::{DumpError, Result};
pub use reader::{dump, FrameStreamReader};
