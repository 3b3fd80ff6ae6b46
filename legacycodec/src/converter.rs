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

use crate::config::ConverterConfig;
use crate::emitter::MiniMessageEmitter;
use crate::scanner::{LegacyScanner, Token};
use crate::state::StyleState;
use crate::ConvertResult;
use std::borrow::Cow;
use tracing::trace;

/// A run of text sharing a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    /// The literal text of the span
    pub text: String,
    /// The style applied to the whole span
    pub style: StyleState,
}

/// Converts legacy color coded text into MiniMessage markup.
///
/// A `Converter` holds a validated [`ConverterConfig`]. It keeps no state
/// between calls and can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use retrohue_legacycodec::{Converter, ConverterConfig};
///
/// let converter = Converter::new(ConverterConfig::ampersand()).unwrap();
/// assert_eq!(
///     converter.convert("&cHello &lWorld&r!"),
///     "<red>Hello <bold>World</bold></red>!"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Creates a converter after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ConverterConfig::validate`].
    pub fn new(config: ConverterConfig) -> ConvertResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Skips validation; scanning works with any marker, only the output may be ambiguous.
    pub(crate) fn from_config_unchecked(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// The configuration this converter was built with.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Tokenizes `input` without interpreting it.
    pub fn scan<'a>(&'a self, input: &'a str) -> LegacyScanner<'a> {
        LegacyScanner::new(input, &self.config)
    }

    /// Converts `input` into a MiniMessage string.
    pub fn convert(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() + input.len() / 2);
        // Writing into a String cannot fail.
        let _ = self.convert_into(input, &mut output);
        output
    }

    /// Converts `input`, appending the MiniMessage markup to `writer`.
    pub fn convert_into<W: std::fmt::Write>(&self, input: &str, writer: &mut W) -> std::fmt::Result {
        let mut emitter = MiniMessageEmitter::new(writer, self.config.escape_markup);
        for (text, style) in self.styled_literals(input) {
            emitter.write_span(text, &style)?;
        }
        emitter.finish().map(|_| ())
    }

    /// Splits `input` into styled spans.
    ///
    /// Adjacent literals with the same style are merged and empty spans are
    /// dropped, so consecutive spans always differ in style.
    pub fn spans(&self, input: &str) -> Vec<StyledSpan> {
        let mut spans: Vec<StyledSpan> = Vec::new();
        for (text, style) in self.styled_literals(input) {
            if text.is_empty() {
                continue;
            }
            match spans.last_mut() {
                Some(last) if last.style == style => last.text.push_str(text),
                _ => spans.push(StyledSpan {
                    text: text.to_string(),
                    style,
                }),
            }
        }
        spans
    }

    /// Removes every recognized code from `input`.
    ///
    /// Unrecognized codes stay in place as literal text. The input is borrowed
    /// when it contains no marker at all.
    pub fn strip<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !input.contains(self.config.marker) {
            return Cow::Borrowed(input);
        }
        let mut output = String::with_capacity(input.len());
        for token in self.scan(input) {
            if let Token::Literal(text) = token {
                output.push_str(text);
            }
        }
        Cow::Owned(output)
    }

    /// Pairs every literal in `input` with the style active at that point.
    fn styled_literals<'a>(&'a self, input: &'a str) -> impl Iterator<Item = (&'a str, StyleState)> {
        let marker = self.config.marker;
        let resets = self.config.color_resets_decorations;
        let mut style = StyleState::default();
        self.scan(input).filter_map(move |token| match token {
            Token::Code(code) => {
                style.apply(code, resets);
                None
            }
            Token::Literal(text) => {
                if text.starts_with(marker) {
                    trace!(literal = text, "Passing through unrecognized legacy code");
                }
                Some((text, style))
            }
        })
    }
}
