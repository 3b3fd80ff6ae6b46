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
use crate::converter::Converter;
use std::borrow::Cow;

/// Removes legacy color and format codes from a string.
///
/// Every recognized code (`0`-`9`, `a`-`f`, `k`-`o`, `r`, any case) introduced
/// by `marker` is removed. Anything else, including unrecognized codes and a
/// trailing marker, is kept verbatim.
///
/// # Performance
///
/// The function checks for the presence of the marker before processing. If
/// the marker does not occur, it returns a borrowed reference to the original
/// string (zero-copy). Otherwise, it allocates a new `String` with the codes
/// removed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use retrohue_legacycodec::strip_legacy_codes;
///
/// assert_eq!(strip_legacy_codes("&cRed &lBold", '&'), "Red Bold");
/// assert_eq!(strip_legacy_codes("§aGreen", '§'), "Green");
///
/// let plain = strip_legacy_codes("Plain Text", '&');
/// assert!(matches!(plain, Cow::Borrowed(_)));
/// ```
///
/// # Limitations
///
/// Extended hex colors are left in place; use [`Converter::strip`] with a
/// configuration that enables them to remove those as well.
pub fn strip_legacy_codes(input: &str, marker: char) -> Cow<'_, str> {
    Converter::from_config_unchecked(ConverterConfig::default().with_marker(marker)).strip(input)
}
