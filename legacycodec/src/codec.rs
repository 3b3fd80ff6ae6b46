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

use crate::consts::MAX_LINE_LENGTH;
use crate::{ConvertError, ConvertResult, Converter};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{instrument, warn};

/// Line oriented codec converting legacy color coded text into MiniMessage.
///
/// Decoding splits the byte stream on `\n` (a trailing `\r` is dropped) and
/// yields every complete line converted to MiniMessage. Each line is converted
/// on its own, so styles never leak from one line into the next. Encoding
/// converts legacy text and writes the resulting markup bytes.
///
/// Lines longer than [`MAX_LINE_LENGTH`] bytes are rejected with
/// [`ConvertError::LineTooLong`]; the rest of the offending line is discarded
/// and decoding resumes with the next line.
#[derive(Debug, Default)]
pub struct LegacyCodec {
    converter: Converter,
    /// Offset into the buffer up to which no line terminator was found.
    next_index: usize,
    /// Dropping an over-long line until its terminator arrives.
    discarding: bool,
}

impl LegacyCodec {
    /// Creates a codec that converts with the given converter.
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            next_index: 0,
            discarding: false,
        }
    }

    /// Get a reference to the converter
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    fn convert_line(&self, line: &[u8]) -> ConvertResult<String> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let text = std::str::from_utf8(line).map_err(|error| ConvertError::InvalidUtf8 {
            position: error.valid_up_to(),
        })?;
        Ok(self.converter.convert(text))
    }
}

impl Decoder for LegacyCodec {
    type Item = String;
    type Error = ConvertError;

    #[instrument(skip_all)]
    fn decode(&mut self, src: &mut BytesMut) -> ConvertResult<Option<Self::Item>> {
        loop {
            let newline = src[self.next_index..]
                .iter()
                .position(|byte| *byte == b'\n')
                .map(|offset| self.next_index + offset);

            match (self.discarding, newline) {
                (true, Some(end)) => {
                    src.advance(end + 1);
                    self.discarding = false;
                    self.next_index = 0;
                }
                (true, None) => {
                    src.advance(src.len());
                    self.next_index = 0;
                    return Ok(None);
                }
                (false, Some(end)) => {
                    self.next_index = 0;
                    let line = src.split_to(end + 1);
                    if end > MAX_LINE_LENGTH {
                        warn!(length = end, "Discarding over-long line");
                        return Err(ConvertError::LineTooLong {
                            length: end,
                            max: MAX_LINE_LENGTH,
                        });
                    }
                    return self.convert_line(&line[..end]).map(Some);
                }
                (false, None) if src.len() > MAX_LINE_LENGTH => {
                    let length = src.len();
                    warn!(length, "Discarding over-long line");
                    src.advance(length);
                    self.next_index = 0;
                    self.discarding = true;
                    return Err(ConvertError::LineTooLong {
                        length,
                        max: MAX_LINE_LENGTH,
                    });
                }
                (false, None) => {
                    self.next_index = src.len();
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> ConvertResult<Option<Self::Item>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        self.next_index = 0;
        if self.discarding {
            self.discarding = false;
            src.clear();
            return Ok(None);
        }
        if src.is_empty() {
            return Ok(None);
        }
        let line = src.split();
        self.convert_line(&line).map(Some)
    }
}

impl Encoder<&str> for LegacyCodec {
    type Error = ConvertError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> ConvertResult<()> {
        let converted = self.converter.convert(item);
        dst.reserve(converted.len());
        dst.put_slice(converted.as_bytes());
        Ok(())
    }
}

impl Encoder<String> for LegacyCodec {
    type Error = ConvertError;

    fn encode(&mut self, item: String, dst: &mut BytesMut) -> ConvertResult<()> {
        <Self as Encoder<&str>>::encode(self, item.as_str(), dst)
    }
}
