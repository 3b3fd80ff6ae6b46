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

use crate::code::{LegacyCode, Rgb, TextColor};
use crate::config::ConverterConfig;
use crate::consts::HEX_COLOR_DIGITS;
use std::iter::FusedIterator;

/// A unit of scanned legacy text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text to be copied to the output verbatim.
    ///
    /// Unrecognized codes and a trailing marker are also yielded as literals,
    /// marker included.
    Literal(&'a str),
    /// A recognized code to apply to the style state.
    Code(LegacyCode),
}

/// Internal state machine states for the scanner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Copying literal text until the next marker.
    Outside,
    /// A marker has been consumed and the code character comes next.
    InCode,
}

/// A lazy tokenizer over legacy color coded text.
///
/// `LegacyScanner` walks its input left to right and yields [`Token`]s. It never
/// fails: a marker at the end of the input or followed by an unknown code
/// character is yielded as literal text. Cloning a scanner yields an
/// independent iterator starting from the same position, so a scan can be
/// restarted by cloning it before iterating.
///
/// With hex colors enabled two extended forms are recognized after the marker:
/// `#rrggbb` and `x` followed by six marker + hex digit pairs. An incomplete
/// extended form falls back to the one character rule.
#[derive(Clone, Debug)]
pub struct LegacyScanner<'a> {
    input: &'a str,
    position: usize,
    state: State,
    config: &'a ConverterConfig,
}

impl<'a> LegacyScanner<'a> {
    /// Creates a scanner over `input`.
    ///
    /// The configuration is expected to be valid; see [`ConverterConfig::validate`].
    pub fn new(input: &'a str, config: &'a ConverterConfig) -> Self {
        Self {
            input,
            position: 0,
            state: State::Outside,
            config,
        }
    }

    /// Yields literal text up to the next marker.
    ///
    /// Returns `None` at the end of the input, or after consuming a marker at
    /// the current position, in which case the state moves to `InCode`.
    fn process_outside(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.position..];
        if rest.is_empty() {
            return None;
        }
        match rest.find(self.config.marker) {
            Some(0) => {
                self.position += self.config.marker.len_utf8();
                self.state = State::InCode;
                None
            }
            Some(end) => {
                self.position += end;
                Some(Token::Literal(&rest[..end]))
            }
            None => {
                self.position = self.input.len();
                Some(Token::Literal(rest))
            }
        }
    }

    fn process_in_code(&mut self) -> Token<'a> {
        self.state = State::Outside;
        let start = self.position - self.config.marker.len_utf8();
        let rest = &self.input[self.position..];

        let Some(code) = rest.chars().next() else {
            // Trailing marker
            return Token::Literal(&self.input[start..]);
        };

        if self.config.hex_colors {
            if let Some((rgb, consumed)) = self.scan_hex(rest) {
                self.position += consumed;
                return Token::Code(LegacyCode::Color(TextColor::Hex(rgb)));
            }
        }

        self.position += code.len_utf8();
        match self.config.resolve(code) {
            Some(resolved) => Token::Code(resolved),
            None => Token::Literal(&self.input[start..self.position]),
        }
    }

    /// Attempts to read an extended hex color directly after a marker.
    ///
    /// Returns the color and the number of bytes consumed after the marker.
    fn scan_hex(&self, rest: &str) -> Option<(Rgb, usize)> {
        let mut chars = rest.chars();
        let mut digits = ['0'; HEX_COLOR_DIGITS];
        match chars.next()? {
            '#' => {
                for digit in digits.iter_mut() {
                    *digit = chars.next().filter(char::is_ascii_hexdigit)?;
                }
                let consumed = 1 + HEX_COLOR_DIGITS;
                Some((Rgb::from_hex_digits(digits)?, consumed))
            }
            'x' | 'X' => {
                for digit in digits.iter_mut() {
                    if chars.next()? != self.config.marker {
                        return None;
                    }
                    *digit = chars.next().filter(char::is_ascii_hexdigit)?;
                }
                let consumed = 1 + HEX_COLOR_DIGITS * (self.config.marker.len_utf8() + 1);
                Some((Rgb::from_hex_digits(digits)?, consumed))
            }
            _ => None,
        }
    }
}

impl<'a> Iterator for LegacyScanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.state == State::Outside {
            if let Some(token) = self.process_outside() {
                return Some(token);
            }
        }
        match self.state {
            State::Outside => None,
            State::InCode => Some(self.process_in_code()),
        }
    }
}

impl FusedIterator for LegacyScanner<'_> {}
