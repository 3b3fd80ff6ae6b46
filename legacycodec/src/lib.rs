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

//! Conversion of legacy color coded text (`&cRed &lBold`) into MiniMessage
//! markup (`<red>Red <bold>Bold</bold></red>`).

mod code;
mod codec;
mod config;
pub mod consts;
mod converter;
mod emitter;
mod result;
mod scanner;
mod state;
mod strip;

pub use self::code::{Decoration, LegacyCode, NamedColor, Rgb, TextColor};
pub use self::codec::LegacyCodec;
pub use self::config::ConverterConfig;
pub use self::converter::{Converter, StyledSpan};
pub use self::emitter::MiniMessageEmitter;
pub use self::result::{ConvertError, ConvertResult};
pub use self::scanner::{LegacyScanner, Token};
pub use self::state::{Decorations, StyleState};
pub use self::strip::strip_legacy_codes;

/// Converts ampersand coded text into MiniMessage using the default configuration.
pub fn convert(input: &str) -> String {
    Converter::default().convert(input)
}

/// Converts text using `marker` as the code marker.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidMarker`] if `marker` cannot be used as a marker.
pub fn convert_with_marker(input: &str, marker: char) -> ConvertResult<String> {
    let converter = Converter::new(ConverterConfig::default().with_marker(marker))?;
    Ok(converter.convert(input))
}
