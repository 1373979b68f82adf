//! # cembed-core
//!
//! A library for embedding binary files as C byte-array headers.
//!
//! This crate provides the core functionality for:
//! - Formatting an opaque byte stream as a `static const unsigned char`
//!   array declaration
//! - Transcribing an input file into an output header, creating the
//!   output directory tree as needed
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`emit`]: Header text formatting
//! - [`transcode`]: The file-to-file pipeline
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use cembed_core::transcode_file;
//!
//! let report = transcode_file(
//!     "assets/logo_128x64.jpg",
//!     "include/generated/logo_jpg.h",
//!     "logo_jpg",
//! )?;
//! println!("embedded {} bytes", report.bytes);
//! # Ok::<(), cembed_core::Error>(())
//! ```
//!
//! The generated header is wrapped in `#pragma once` and is valid C and
//! C++; the array name is inserted verbatim, so the caller is responsible
//! for supplying a legal identifier.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod emit;
pub mod error;
pub mod transcode;

// Re-export primary types for convenience
pub use emit::{EmitterConfig, HeaderEmitter};
pub use error::{Error, Result};
pub use transcode::{transcode_file, TranscodeReport};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of array elements per output line
pub const BYTES_PER_LINE: usize = 16;
