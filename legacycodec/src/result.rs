//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the legacycodec crate.
//!
//! Conversion itself never fails: unknown codes are passed through as text.
//! Errors only arise from rejected configuration, hex color parsing and the
//! streaming codec.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur when configuring or driving the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// I/O error from the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured code marker cannot be used.
    #[error("Invalid code marker {marker:?}: {reason}")]
    InvalidMarker {
        /// The rejected marker character
        marker: char,
        /// Why the marker was rejected
        reason: &'static str,
    },

    /// A hex color string was not of the form `#rrggbb`.
    #[error("Invalid hex color '{0}'")]
    InvalidHexColor(String),

    /// A line in the input stream exceeded the maximum buffered length.
    #[error("Line too long: {length} bytes (maximum allowed: {max})")]
    LineTooLong {
        /// Number of bytes buffered without a line terminator
        length: usize,
        /// The maximum allowed length
        max: usize,
    },

    /// Invalid UTF-8 sequence encountered at the specified position.
    #[error("Invalid UTF-8 sequence at position {position}")]
    InvalidUtf8 {
        /// Byte offset within the offending line
        position: usize,
    },
}

impl ConvertError {
    /// Check if the error was raised while validating a configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ConvertError::InvalidMarker { .. })
    }

    /// Check if the error originated from the streaming codec
    pub fn is_stream_error(&self) -> bool {
        matches!(
            self,
            ConvertError::Io(_) | ConvertError::LineTooLong { .. } | ConvertError::InvalidUtf8 { .. }
        )
    }
}
