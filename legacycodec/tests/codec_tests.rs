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

//! Comprehensive tests for LegacyCodec

use futures::StreamExt;
use retrohue_legacycodec::consts::MAX_LINE_LENGTH;
use retrohue_legacycodec::{ConvertError, Converter, ConverterConfig, LegacyCodec};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder, FramedRead};

fn create_codec() -> LegacyCodec {
    LegacyCodec::new(Converter::default())
}

#[test]
fn test_encode_converts_text() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::new();

    codec.encode("&cHello", &mut buffer).unwrap();
    assert_eq!(&buffer[..], b"<red>Hello</red>");
}

#[test]
fn test_encode_appends() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from("> ");

    codec.encode(String::from("&lHi"), &mut buffer).unwrap();
    assert_eq!(&buffer[..], b"> <bold>Hi</bold>");
}

#[test]
fn test_decode_lines() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from("&aOne\n&bTwo\r\nThree");

    assert_eq!(
        codec.decode(&mut buffer).unwrap(),
        Some("<green>One</green>".to_string())
    );
    assert_eq!(
        codec.decode(&mut buffer).unwrap(),
        Some("<aqua>Two</aqua>".to_string())
    );
    assert_eq!(codec.decode(&mut buffer).unwrap(), None);
    assert_eq!(
        codec.decode_eof(&mut buffer).unwrap(),
        Some("Three".to_string())
    );
    assert_eq!(codec.decode_eof(&mut buffer).unwrap(), None);
}

#[test]
fn test_decode_styles_do_not_leak_between_lines() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from("&cRed\nPlain\n");

    assert_eq!(
        codec.decode(&mut buffer).unwrap(),
        Some("<red>Red</red>".to_string())
    );
    assert_eq!(codec.decode(&mut buffer).unwrap(), Some("Plain".to_string()));
}

#[test]
fn test_decode_partial_input() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from("&eHel");

    assert_eq!(codec.decode(&mut buffer).unwrap(), None);
    buffer.extend_from_slice(b"lo\n");
    assert_eq!(
        codec.decode(&mut buffer).unwrap(),
        Some("<yellow>Hello</yellow>".to_string())
    );
    assert!(buffer.is_empty());
}

#[test]
fn test_decode_empty_line() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from("\n");

    assert_eq!(codec.decode(&mut buffer).unwrap(), Some(String::new()));
}

#[test]
fn test_decode_invalid_utf8() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from(&b"ab\xFFcd\nok\n"[..]);

    match codec.decode(&mut buffer) {
        Err(ConvertError::InvalidUtf8 { position }) => assert_eq!(position, 2),
        other => panic!("Expected InvalidUtf8, got {:?}", other),
    }
    assert_eq!(codec.decode(&mut buffer).unwrap(), Some("ok".to_string()));
}

#[test]
fn test_decode_line_too_long() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from(vec![b'a'; MAX_LINE_LENGTH + 1].as_slice());

    let err = codec.decode(&mut buffer).unwrap_err();
    assert!(matches!(err, ConvertError::LineTooLong { .. }));
    assert!(err.is_stream_error());

    // The remainder of the long line is discarded, the next line survives.
    buffer.extend_from_slice(b"aaaa\n&9next\n");
    assert_eq!(
        codec.decode(&mut buffer).unwrap(),
        Some("<blue>next</blue>".to_string())
    );
}

#[test]
fn test_decode_terminated_line_too_long() {
    let mut codec = create_codec();
    let mut line = vec![b'a'; MAX_LINE_LENGTH + 1];
    line.extend_from_slice(b"\nshort\n");
    let mut buffer = BytesMut::from(line.as_slice());

    assert!(matches!(
        codec.decode(&mut buffer),
        Err(ConvertError::LineTooLong { .. })
    ));
    assert_eq!(codec.decode(&mut buffer).unwrap(), Some("short".to_string()));
}

#[test]
fn test_decode_eof_while_discarding() {
    let mut codec = create_codec();
    let mut buffer = BytesMut::from(vec![b'a'; MAX_LINE_LENGTH + 1].as_slice());

    assert!(codec.decode(&mut buffer).is_err());
    buffer.extend_from_slice(b"tail");
    assert_eq!(codec.decode_eof(&mut buffer).unwrap(), None);
    assert!(buffer.is_empty());
}

#[test]
fn test_codec_with_section_marker() {
    let converter = Converter::new(ConverterConfig::section()).unwrap();
    let mut codec = LegacyCodec::new(converter);
    let mut buffer = BytesMut::from("§6Gold &6Text\n");

    assert_eq!(
        codec.decode(&mut buffer).unwrap(),
        Some("<gold>Gold &6Text</gold>".to_string())
    );
    assert_eq!(codec.converter().config().marker, '§');
}

#[tokio::test]
async fn test_framed_read() {
    let input: &[u8] = b"&cRed\n&lBold\nPlain";
    let mut framed = FramedRead::new(input, create_codec());

    let mut lines = Vec::new();
    while let Some(line) = framed.next().await {
        lines.push(line.unwrap());
    }

    assert_eq!(lines, vec!["<red>Red</red>", "<bold>Bold</bold>", "Plain"]);
}
