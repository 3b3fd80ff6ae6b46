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

use crate::code::{Decoration, TextColor};
use crate::state::StyleState;
use std::fmt::Write;

/// A MiniMessage tag that has been opened and not yet closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OpenTag {
    Color(TextColor),
    Decoration(Decoration),
}

impl OpenTag {
    fn is_active_in(&self, state: &StyleState) -> bool {
        match self {
            OpenTag::Color(color) => state.color == Some(*color),
            OpenTag::Decoration(decoration) => state.decorations.contains(*decoration),
        }
    }

    fn write_name<W: Write>(&self, writer: &mut W) -> std::fmt::Result {
        match self {
            OpenTag::Color(color) => color.write_tag_name(writer),
            OpenTag::Decoration(decoration) => writer.write_str(decoration.tag_name()),
        }
    }

    fn write_open<W: Write>(&self, writer: &mut W) -> std::fmt::Result {
        writer.write_char('<')?;
        self.write_name(writer)?;
        writer.write_char('>')
    }

    fn write_close<W: Write>(&self, writer: &mut W) -> std::fmt::Result {
        writer.write_str("</")?;
        self.write_name(writer)?;
        writer.write_char('>')
    }
}

/// Serializes styled text spans into MiniMessage markup.
///
/// The emitter keeps a stack of open tags. Before a span is written the stack is
/// reconciled with the span's [`StyleState`]: tags above the longest prefix that
/// is still valid are closed in reverse order, then the missing tags are opened,
/// color first and decorations in code order. Tags are only ever written in
/// front of non-empty text, so style changes that no text uses produce no
/// output, and consecutive spans with the same state share one set of tags.
///
/// # Examples
///
/// ```
/// use retrohue_legacycodec::{MiniMessageEmitter, NamedColor, StyleState};
///
/// let mut emitter = MiniMessageEmitter::new(String::new(), false);
/// let red = StyleState { color: Some(NamedColor::Red.into()), ..Default::default() };
/// emitter.write_span("Hello", &red).unwrap();
/// assert_eq!(emitter.finish().unwrap(), "<red>Hello</red>");
/// ```
#[derive(Debug)]
pub struct MiniMessageEmitter<W> {
    writer: W,
    open: Vec<OpenTag>,
    current: StyleState,
    escape_markup: bool,
    /// Length of the run of `\\` ending the unescaped text written so far.
    trailing_backslashes: usize,
}

impl<W: Write> MiniMessageEmitter<W> {
    /// Creates an emitter writing into `writer`.
    ///
    /// With `escape_markup` set, `<` and `\` in span text are prefixed with a
    /// backslash. Without it text is copied unchanged, except that an unpaired
    /// `\` directly in front of a tag is doubled so the tag stays a tag.
    pub fn new(writer: W, escape_markup: bool) -> Self {
        Self {
            writer,
            open: Vec::new(),
            current: StyleState::default(),
            escape_markup,
            trailing_backslashes: 0,
        }
    }

    /// The style of the most recently written span.
    pub fn current(&self) -> &StyleState {
        &self.current
    }

    /// Writes `text` formatted with `style`.
    pub fn write_span(&mut self, text: &str, style: &StyleState) -> std::fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        self.transition(style)?;
        if self.escape_markup {
            return write_escaped(&mut self.writer, text);
        }
        let run = text.chars().rev().take_while(|ch| *ch == '\\').count();
        self.trailing_backslashes = if run == text.len() {
            self.trailing_backslashes + run
        } else {
            run
        };
        self.writer.write_str(text)
    }

    /// Closes every open tag and returns the writer.
    pub fn finish(mut self) -> Result<W, std::fmt::Error> {
        self.close_to(0)?;
        Ok(self.writer)
    }

    fn transition(&mut self, target: &StyleState) -> std::fmt::Result {
        if self.current == *target {
            return Ok(());
        }

        let keep = self
            .open
            .iter()
            .take_while(|tag| tag.is_active_in(target))
            .count();
        self.close_to(keep)?;

        if let Some(color) = target.color {
            let tag = OpenTag::Color(color);
            if !self.open.contains(&tag) {
                self.push(tag)?;
            }
        }
        for decoration in target.decorations.iter() {
            let tag = OpenTag::Decoration(decoration);
            if !self.open.contains(&tag) {
                self.push(tag)?;
            }
        }

        self.current = *target;
        Ok(())
    }

    /// Pairs an odd trailing backslash run so it cannot escape the next tag.
    fn guard_tag(&mut self) -> std::fmt::Result {
        if self.trailing_backslashes % 2 == 1 {
            self.writer.write_char('\\')?;
        }
        self.trailing_backslashes = 0;
        Ok(())
    }

    fn push(&mut self, tag: OpenTag) -> std::fmt::Result {
        self.guard_tag()?;
        tag.write_open(&mut self.writer)?;
        self.open.push(tag);
        Ok(())
    }

    fn close_to(&mut self, depth: usize) -> std::fmt::Result {
        while self.open.len() > depth {
            if let Some(tag) = self.open.pop() {
                self.guard_tag()?;
                tag.write_close(&mut self.writer)?;
            }
        }
        Ok(())
    }
}

fn write_escaped<W: Write>(writer: &mut W, text: &str) -> std::fmt::Result {
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if ch == '<' || ch == '\\' {
            writer.write_str(&text[start..index])?;
            writer.write_char('\\')?;
            start = index;
        }
    }
    writer.write_str(&text[start..])
}
