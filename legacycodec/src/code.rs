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

use crate::{ConvertError, ConvertResult};
use std::str::FromStr;

/// The semantic meaning of a single legacy formatting code.
///
/// A legacy code is a marker character (usually `&` or `§`) followed by a code
/// character. Code characters are case-insensitive and every recognized code
/// character maps to exactly one `LegacyCode`.
///
/// | Code      | Meaning                             |
/// |-----------|-------------------------------------|
/// | `0`-`9`   | Named colors, see [`NamedColor`]    |
/// | `a`-`f`   | Named colors, see [`NamedColor`]    |
/// | `k`       | [`Decoration::Obfuscated`]          |
/// | `l`       | [`Decoration::Bold`]                |
/// | `m`       | [`Decoration::Strikethrough`]       |
/// | `n`       | [`Decoration::Underlined`]          |
/// | `o`       | [`Decoration::Italic`]              |
/// | `r`       | [`LegacyCode::Reset`]               |
///
/// Extended hex colors (`&#rrggbb` and `&x&r&r&g&g&b&b`) resolve to
/// `LegacyCode::Color(TextColor::Hex(..))` but have no single code character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LegacyCode {
    /// Replace the active color.
    Color(TextColor),
    /// Enable a text decoration.
    Decoration(Decoration),
    /// Clear the active color and every decoration.
    Reset,
}

impl LegacyCode {
    /// Resolves a single code character into its meaning.
    ///
    /// Returns `None` for characters that are not legacy codes. This is not an
    /// error; callers pass such sequences through as literal text.
    pub fn resolve(code: char) -> Option<LegacyCode> {
        let code = code.to_ascii_lowercase();
        if let Some(color) = NamedColor::from_code_char(code) {
            return Some(LegacyCode::Color(TextColor::Named(color)));
        }
        if let Some(decoration) = Decoration::from_code_char(code) {
            return Some(LegacyCode::Decoration(decoration));
        }
        match code {
            'r' => Some(LegacyCode::Reset),
            _ => None,
        }
    }

    /// Returns the canonical (lowercase) code character, or `None` for hex colors.
    pub fn code_char(&self) -> Option<char> {
        match self {
            LegacyCode::Color(TextColor::Named(color)) => Some(color.code_char()),
            LegacyCode::Color(TextColor::Hex(_)) => None,
            LegacyCode::Decoration(decoration) => Some(decoration.code_char()),
            LegacyCode::Reset => Some('r'),
        }
    }
}

/// A color applied by a legacy code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// One of the sixteen fixed palette colors.
    Named(NamedColor),
    /// A 24-bit color from an extended hex code.
    Hex(Rgb),
}

impl TextColor {
    /// Returns the RGB value of this color.
    pub fn rgb(&self) -> Rgb {
        match self {
            TextColor::Named(color) => color.rgb(),
            TextColor::Hex(rgb) => *rgb,
        }
    }

    /// Writes the MiniMessage tag name, `red` or `#ff8800`.
    pub fn write_tag_name<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        match self {
            TextColor::Named(color) => writer.write_str(color.tag_name()),
            TextColor::Hex(rgb) => write!(writer, "{}", rgb),
        }
    }
}

impl From<NamedColor> for TextColor {
    fn from(color: NamedColor) -> Self {
        TextColor::Named(color)
    }
}

impl From<Rgb> for TextColor {
    fn from(rgb: Rgb) -> Self {
        TextColor::Hex(rgb)
    }
}

/// The sixteen fixed colors of the legacy palette.
///
/// Variants are declared in code order (`0` through `f`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// Black - Code `0` (`#000000`).
    Black,
    /// Dark Blue - Code `1` (`#0000aa`).
    DarkBlue,
    /// Dark Green - Code `2` (`#00aa00`).
    DarkGreen,
    /// Dark Aqua - Code `3` (`#00aaaa`).
    DarkAqua,
    /// Dark Red - Code `4` (`#aa0000`).
    DarkRed,
    /// Dark Purple - Code `5` (`#aa00aa`).
    DarkPurple,
    /// Gold - Code `6` (`#ffaa00`).
    Gold,
    /// Gray - Code `7` (`#aaaaaa`).
    Gray,
    /// Dark Gray - Code `8` (`#555555`).
    DarkGray,
    /// Blue - Code `9` (`#5555ff`).
    Blue,
    /// Green - Code `a` (`#55ff55`).
    Green,
    /// Aqua - Code `b` (`#55ffff`).
    Aqua,
    /// Red - Code `c` (`#ff5555`).
    Red,
    /// Light Purple - Code `d` (`#ff55ff`).
    LightPurple,
    /// Yellow - Code `e` (`#ffff55`).
    Yellow,
    /// White - Code `f` (`#ffffff`).
    White,
}

impl NamedColor {
    /// Every named color in code order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Looks up a color by its code character (`0`-`9`, `a`-`f`, case-insensitive).
    pub fn from_code_char(code: char) -> Option<NamedColor> {
        code.to_digit(16).map(|index| Self::ALL[index as usize])
    }

    /// Converts a two character legacy code such as `&a` into a color.
    ///
    /// The code must be exactly the prefix followed by a color code character.
    /// Decoration and reset codes, wrong prefixes and any other length yield
    /// `None`.
    pub fn from_legacy_code(code: &str, prefix: char) -> Option<NamedColor> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(code), None) if first == prefix => Self::from_code_char(code),
            _ => None,
        }
    }

    /// Returns the canonical lowercase code character.
    pub fn code_char(&self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    /// Returns the MiniMessage tag name of this color.
    pub fn tag_name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Returns the RGB value the legacy client renders this color with.
    pub fn rgb(&self) -> Rgb {
        match self {
            NamedColor::Black => Rgb::new(0x00, 0x00, 0x00),
            NamedColor::DarkBlue => Rgb::new(0x00, 0x00, 0xAA),
            NamedColor::DarkGreen => Rgb::new(0x00, 0xAA, 0x00),
            NamedColor::DarkAqua => Rgb::new(0x00, 0xAA, 0xAA),
            NamedColor::DarkRed => Rgb::new(0xAA, 0x00, 0x00),
            NamedColor::DarkPurple => Rgb::new(0xAA, 0x00, 0xAA),
            NamedColor::Gold => Rgb::new(0xFF, 0xAA, 0x00),
            NamedColor::Gray => Rgb::new(0xAA, 0xAA, 0xAA),
            NamedColor::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            NamedColor::Blue => Rgb::new(0x55, 0x55, 0xFF),
            NamedColor::Green => Rgb::new(0x55, 0xFF, 0x55),
            NamedColor::Aqua => Rgb::new(0x55, 0xFF, 0xFF),
            NamedColor::Red => Rgb::new(0xFF, 0x55, 0x55),
            NamedColor::LightPurple => Rgb::new(0xFF, 0x55, 0xFF),
            NamedColor::Yellow => Rgb::new(0xFF, 0xFF, 0x55),
            NamedColor::White => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }

    /// Finds the named color closest to an arbitrary RGB value.
    ///
    /// # Algorithm
    ///
    /// Both colors are converted to HSV with every component in `0.0..=1.0`.
    /// The distance is the sum of squared component differences, where the hue
    /// difference wraps around the color wheel and is weighted by three. Ties
    /// resolve to the color that comes first in code order, and an exact match
    /// stops the search.
    pub fn nearest_to(rgb: Rgb) -> NamedColor {
        let target = rgb.to_hsv();
        let mut matched = NamedColor::Black;
        let mut matched_distance = f32::MAX;
        for candidate in Self::ALL {
            let distance = hsv_distance(target, candidate.rgb().to_hsv());
            if distance < matched_distance {
                matched = candidate;
                matched_distance = distance;
            }
            if distance == 0.0 {
                break;
            }
        }
        matched
    }

    /// Parses a `#rrggbb` string and finds the nearest named color.
    ///
    /// Returns `None` unless the input is exactly seven characters, starts with
    /// `#` and contains six hex digits.
    pub fn nearest_to_hex(hex: &str) -> Option<NamedColor> {
        hex.parse::<Rgb>().ok().map(Self::nearest_to)
    }
}

impl std::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag_name())
    }
}

fn hsv_distance(a: (f32, f32, f32), b: (f32, f32, f32)) -> f32 {
    let hue = (a.0 - b.0).abs();
    let hue_distance = 3.0 * hue.min(1.0 - hue);
    let saturation_diff = a.1 - b.1;
    let value_diff = a.2 - b.2;
    hue_distance * hue_distance + saturation_diff * saturation_diff + value_diff * value_diff
}

/// A 24-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Builds a color from six hex digits without a leading `#`.
    ///
    /// Returns `None` if any of the digits is not a hex digit.
    pub fn from_hex_digits(digits: [char; 6]) -> Option<Rgb> {
        let mut channels = [0u8; 3];
        for (channel, pair) in channels.iter_mut().zip(digits.chunks(2)) {
            let high = pair[0].to_digit(16)?;
            let low = pair[1].to_digit(16)?;
            *channel = (high * 16 + low) as u8;
        }
        Some(Rgb::new(channels[0], channels[1], channels[2]))
    }

    /// Converts to hue, saturation and value, each in `0.0..=1.0`.
    fn to_hsv(self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        if delta == 0.0 {
            return (0.0, saturation, max);
        }

        let mut hue = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        (hue / 360.0, saturation, max)
    }
}

impl FromStr for Rgb {
    type Err = ConvertError;

    /// Parses the `#rrggbb` form.
    fn from_str(s: &str) -> ConvertResult<Rgb> {
        let invalid = || ConvertError::InvalidHexColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        let mut buffer = ['0'; 6];
        let mut count = 0;
        for ch in digits.chars() {
            if count == buffer.len() {
                return Err(invalid());
            }
            buffer[count] = ch;
            count += 1;
        }
        if count != buffer.len() {
            return Err(invalid());
        }
        Rgb::from_hex_digits(buffer).ok_or_else(invalid)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Text decorations toggled by legacy format codes.
///
/// Variants are declared in code order (`k` through `o`), which is also the
/// order in which the emitter opens simultaneous decoration tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decoration {
    /// Obfuscated (scrambled) text - Code `k`.
    Obfuscated,
    /// Bold text - Code `l`.
    Bold,
    /// Strikethrough text - Code `m`.
    Strikethrough,
    /// Underlined text - Code `n`.
    Underlined,
    /// Italic text - Code `o`.
    Italic,
}

impl Decoration {
    /// Every decoration in code order.
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    /// Looks up a decoration by its code character (case-insensitive).
    pub fn from_code_char(code: char) -> Option<Decoration> {
        match code.to_ascii_lowercase() {
            'k' => Some(Decoration::Obfuscated),
            'l' => Some(Decoration::Bold),
            'm' => Some(Decoration::Strikethrough),
            'n' => Some(Decoration::Underlined),
            'o' => Some(Decoration::Italic),
            _ => None,
        }
    }

    /// Returns the canonical lowercase code character.
    pub fn code_char(&self) -> char {
        match self {
            Decoration::Obfuscated => 'k',
            Decoration::Bold => 'l',
            Decoration::Strikethrough => 'm',
            Decoration::Underlined => 'n',
            Decoration::Italic => 'o',
        }
    }

    /// Returns the MiniMessage tag name of this decoration.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Decoration::Obfuscated => "obfuscated",
            Decoration::Bold => "bold",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Underlined => "underlined",
            Decoration::Italic => "italic",
        }
    }

    pub(crate) fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl std::fmt::Display for Decoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_colors() {
        assert_eq!(
            LegacyCode::resolve('c'),
            Some(LegacyCode::Color(TextColor::Named(NamedColor::Red)))
        );
        assert_eq!(
            LegacyCode::resolve('0'),
            Some(LegacyCode::Color(TextColor::Named(NamedColor::Black)))
        );
        assert_eq!(
            LegacyCode::resolve('4'),
            Some(LegacyCode::Color(TextColor::Named(NamedColor::DarkRed)))
        );
        assert_eq!(
            LegacyCode::resolve('5'),
            Some(LegacyCode::Color(TextColor::Named(NamedColor::DarkPurple)))
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        for code in "0123456789abcdefklmnor".chars() {
            assert_eq!(
                LegacyCode::resolve(code),
                LegacyCode::resolve(code.to_ascii_uppercase()),
                "code {code}"
            );
            assert!(LegacyCode::resolve(code).is_some());
        }
    }

    #[test]
    fn test_resolve_decorations_and_reset() {
        assert_eq!(
            LegacyCode::resolve('l'),
            Some(LegacyCode::Decoration(Decoration::Bold))
        );
        assert_eq!(
            LegacyCode::resolve('N'),
            Some(LegacyCode::Decoration(Decoration::Underlined))
        );
        assert_eq!(LegacyCode::resolve('r'), Some(LegacyCode::Reset));
    }

    #[test]
    fn test_resolve_unrecognized() {
        for code in ['z', 'g', 'x', '#', ' ', '&', '<', 'é'] {
            assert_eq!(LegacyCode::resolve(code), None, "code {code:?}");
        }
    }

    #[test]
    fn test_code_char_round_trip() {
        for code in "0123456789abcdefklmnor".chars() {
            let resolved = LegacyCode::resolve(code).unwrap();
            assert_eq!(resolved.code_char(), Some(code));
            assert_eq!(LegacyCode::resolve(code), Some(resolved));
        }
        let hex = LegacyCode::Color(TextColor::Hex(Rgb::new(1, 2, 3)));
        assert_eq!(hex.code_char(), None);
    }

    #[test]
    fn test_from_legacy_code() {
        assert_eq!(NamedColor::from_legacy_code("&a", '&'), Some(NamedColor::Green));
        assert_eq!(NamedColor::from_legacy_code("&F", '&'), Some(NamedColor::White));
        assert_eq!(NamedColor::from_legacy_code("§4", '§'), Some(NamedColor::DarkRed));
        assert_eq!(NamedColor::from_legacy_code("abc123", '&'), None);
        assert_eq!(NamedColor::from_legacy_code("&p", '&'), None);
        assert_eq!(NamedColor::from_legacy_code("&l", '&'), None);
        assert_eq!(NamedColor::from_legacy_code("§a", '&'), None);
        assert_eq!(NamedColor::from_legacy_code("&", '&'), None);
        assert_eq!(NamedColor::from_legacy_code("", '&'), None);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(NamedColor::LightPurple.tag_name(), "light_purple");
        assert_eq!(NamedColor::DarkAqua.to_string(), "dark_aqua");
        assert_eq!(Decoration::Underlined.to_string(), "underlined");
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::from_code_char(color.code_char()), Some(color));
        }
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!("#ff8800".parse::<Rgb>().unwrap(), Rgb::new(0xFF, 0x88, 0x00));
        assert_eq!("#ABCDEF".parse::<Rgb>().unwrap(), Rgb::new(0xAB, 0xCD, 0xEF));
        assert!("ff8800".parse::<Rgb>().is_err());
        assert!("#ff880".parse::<Rgb>().is_err());
        assert!("#ff88000".parse::<Rgb>().is_err());
        assert!("#gg8800".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(0xFF, 0x88, 0x00).to_string(), "#ff8800");
    }

    #[test]
    fn test_nearest_exact_match() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::nearest_to(color.rgb()), color);
        }
        assert_eq!(NamedColor::nearest_to_hex("#ff5555"), Some(NamedColor::Red));
    }

    #[test]
    fn test_nearest_approximation() {
        assert_eq!(NamedColor::nearest_to_hex("#fe5656"), Some(NamedColor::Red));
        assert_eq!(NamedColor::nearest_to_hex("#010101"), Some(NamedColor::Black));
        assert_eq!(NamedColor::nearest_to_hex("#fefefe"), Some(NamedColor::White));
        assert_eq!(NamedColor::nearest_to_hex("#00abab"), Some(NamedColor::DarkAqua));
    }

    #[test]
    fn test_nearest_rejects_malformed() {
        assert_eq!(NamedColor::nearest_to_hex("ff0000"), None);
        assert_eq!(NamedColor::nearest_to_hex("#ff00"), None);
        assert_eq!(NamedColor::nearest_to_hex("#xyzxyz"), None);
        assert_eq!(NamedColor::nearest_to_hex(""), None);
    }
}
