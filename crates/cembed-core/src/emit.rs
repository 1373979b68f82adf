//! Header text formatting.
//!
//! This module renders an opaque byte stream as a C header containing a
//! `static const unsigned char` array declaration, guarded by
//! `#pragma once`. The layout is fixed for compatibility with existing
//! generated headers:
//!
//! ```c
//! #pragma once
//!
//! static const unsigned char image_jpg[] = {
//!   0xFF, 0xD8, 0xFF, 0xE0, ...
//! };
//! ```
//!
//! Every element, including the last, is followed by `", "`; after every
//! full row a newline and the indent are emitted, and the closing brace is
//! preceded by a newline regardless of where the final row ends.

use std::fmt::Write as FmtWrite;
use tracing::trace;

use crate::BYTES_PER_LINE;

/// Configuration for header emission
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Number of array elements per line (default: 16)
    pub bytes_per_line: usize,
    /// Indentation string for element lines (default: 2 spaces)
    pub indent: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: BYTES_PER_LINE,
            indent: "  ".to_string(),
        }
    }
}

impl EmitterConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of elements per line
    ///
    /// A value of 0 is treated as 1 when emitting.
    pub fn bytes_per_line(mut self, n: usize) -> Self {
        self.bytes_per_line = n;
        self
    }

    /// Sets the indentation string
    pub fn indent(mut self, s: impl Into<String>) -> Self {
        self.indent = s.into();
        self
    }
}

/// Renders byte streams as C array header text
#[derive(Debug, Clone)]
pub struct HeaderEmitter {
    /// Identifier declared for the array, inserted verbatim
    array_name: String,
    /// Layout configuration
    config: EmitterConfig,
}

impl HeaderEmitter {
    /// Creates a new emitter declaring the given array name
    pub fn new(array_name: impl Into<String>) -> Self {
        Self {
            array_name: array_name.into(),
            config: EmitterConfig::default(),
        }
    }

    /// Replaces the layout configuration
    pub fn with_config(mut self, config: EmitterConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the declared array name
    pub fn array_name(&self) -> &str {
        &self.array_name
    }

    /// Renders the complete header as a string
    pub fn emit(&self, data: &[u8]) -> String {
        let mut output = String::new();
        self.write_to(data, &mut output)
            .expect("String write cannot fail");
        output
    }

    /// Writes the complete header to a formatter
    pub fn write_to(&self, data: &[u8], w: &mut impl FmtWrite) -> std::fmt::Result {
        let per_line = self.config.bytes_per_line.max(1);
        let indent = &self.config.indent;

        trace!("Emitting {} bytes as '{}'", data.len(), self.array_name);

        w.write_str("#pragma once\n\n")?;
        write!(
            w,
            "static const unsigned char {}[] = {{\n{}",
            self.array_name, indent
        )?;

        for (i, byte) in data.iter().enumerate() {
            write!(w, "0x{byte:02X}, ")?;
            // A full row ends with the element's trailing ", " followed by
            // the line break, never a break before the element.
            if (i + 1) % per_line == 0 {
                w.write_str("\n")?;
                w.write_str(indent)?;
            }
        }

        w.write_str("\n};\n")
    }
}
