//! String, color, and encoding utilities shared across the Voxl engine.
//!
//! This crate provides the pure helper functions that the rest of the engine
//! leans on for turning text into colors, flag masks, seeds, and wide
//! strings. It sits at the shared-kernel layer: everything here is callable
//! from the client, the server, and the tooling without pulling in any engine
//! types.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects beyond `tracing` diagnostics
//! - **Non-fatal failure** - malformed input yields an error value or is
//!   tolerated, never a panic
//! - **Minimal dependencies** - serde, thiserror, tracing, hex
//! - **No engine types** - utilities must not import from engine crates

pub mod color;
pub mod encoding;
pub mod flags;
pub mod seed;
pub mod url;

// Re-export commonly used items at crate root for convenience
pub use color::{parse_color_string, Color, ColorParseError};
pub use encoding::{
    utf8_to_wide, utf8_to_wide_or_sentinel, wide_from_str, wide_to_utf8,
    wide_to_utf8_or_sentinel, EncodingError, WideChar,
};
pub use flags::{read_flag_string, write_flag_string, FlagDesc};
pub use seed::read_seed;
pub use url::{urldecode, urlencode};
