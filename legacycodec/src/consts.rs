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

/// Ampersand code marker, as used by most chat plugins and config files.
pub const AMPERSAND_MARKER: char = '&';

/// Section sign code marker, as used natively by the legacy client protocol.
pub const SECTION_MARKER: char = '\u{00A7}';

/// Maximum length of a single buffered line in [`LegacyCodec`](crate::LegacyCodec).
///
/// Lines exceeding this length trigger a `LineTooLong` error and the buffered
/// bytes are discarded up to the next line terminator.
pub const MAX_LINE_LENGTH: usize = 8192;

/// Number of hex digits in an extended `#rrggbb` color code.
pub const HEX_COLOR_DIGITS: usize = 6;
