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

use crate::code::{Decoration, LegacyCode};
use crate::consts::{AMPERSAND_MARKER, SECTION_MARKER};
use crate::{ConvertError, ConvertResult};
use tracing::debug;

/// Options controlling how legacy text is scanned and rendered.
///
/// Use one of the presets and adjust with the `with_*` methods:
///
/// ```
/// use retrohue_legacycodec::ConverterConfig;
///
/// let config = ConverterConfig::section().with_hex_colors(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConverterConfig {
    /// Character that introduces a legacy code
    pub marker: char,
    /// Recognize `&#rrggbb` and `&x&r&r&g&g&b&b` hex colors
    pub hex_colors: bool,
    /// Recognize the obfuscated (`k`) code
    pub obfuscated: bool,
    /// A color code clears all active decorations, as the legacy client does
    pub color_resets_decorations: bool,
    /// Escape `<` and `\` in literal text so it cannot be read back as a tag
    pub escape_markup: bool,
}

impl ConverterConfig {
    /// Ampersand marker with the classic sixteen colors and five decorations.
    pub fn ampersand() -> ConverterConfig {
        ConverterConfig {
            marker: AMPERSAND_MARKER,
            hex_colors: false,
            obfuscated: true,
            color_resets_decorations: false,
            escape_markup: false,
        }
    }

    /// Section sign marker, for text coming straight from the legacy protocol.
    pub fn section() -> ConverterConfig {
        ConverterConfig {
            marker: SECTION_MARKER,
            ..Self::ampersand()
        }
    }

    /// Ampersand marker with hex colors and markup escaping enabled.
    pub fn extended() -> ConverterConfig {
        ConverterConfig {
            marker: AMPERSAND_MARKER,
            hex_colors: true,
            obfuscated: true,
            color_resets_decorations: false,
            escape_markup: true,
        }
    }

    /// Replace the code marker.
    pub fn with_marker(mut self, marker: char) -> ConverterConfig {
        self.marker = marker;
        self
    }

    /// Enable or disable hex color codes.
    pub fn with_hex_colors(mut self, enabled: bool) -> ConverterConfig {
        self.hex_colors = enabled;
        self
    }

    /// Enable or disable the obfuscated code.
    pub fn with_obfuscated(mut self, enabled: bool) -> ConverterConfig {
        self.obfuscated = enabled;
        self
    }

    /// Enable or disable clearing decorations on color change.
    pub fn with_color_resets_decorations(mut self, enabled: bool) -> ConverterConfig {
        self.color_resets_decorations = enabled;
        self
    }

    /// Enable or disable escaping of markup characters in literal text.
    pub fn with_escape_markup(mut self, enabled: bool) -> ConverterConfig {
        self.escape_markup = enabled;
        self
    }

    /// Checks that the configuration can be used for conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidMarker`] if the marker is whitespace, a
    /// control character, an ASCII letter or digit, `#`, or one of the
    /// MiniMessage syntax characters `<`, `>` and `\`.
    pub fn validate(&self) -> ConvertResult<()> {
        let reason = if self.marker.is_whitespace() {
            Some("whitespace cannot be used as a marker")
        } else if self.marker.is_control() {
            Some("control characters cannot be used as a marker")
        } else if self.marker.is_ascii_alphanumeric() || self.marker == '#' {
            Some("collides with a code character")
        } else if matches!(self.marker, '<' | '>' | '\\') {
            Some("collides with MiniMessage syntax")
        } else {
            None
        };
        match reason {
            Some(reason) => {
                debug!(marker = ?self.marker, reason, "Rejected converter configuration");
                Err(ConvertError::InvalidMarker {
                    marker: self.marker,
                    reason,
                })
            }
            None => Ok(()),
        }
    }

    /// Resolves a code character, honoring the enabled code set.
    pub fn resolve(&self, code: char) -> Option<LegacyCode> {
        match LegacyCode::resolve(code)? {
            LegacyCode::Decoration(Decoration::Obfuscated) if !self.obfuscated => None,
            resolved => Some(resolved),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::ampersand()
    }
}
