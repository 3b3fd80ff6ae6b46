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

use crate::code::{Decoration, LegacyCode, TextColor};

/// The cumulative formatting active at a point in scanned text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Active color, if any
    pub color: Option<TextColor>,
    /// Active decorations
    pub decorations: Decorations,
}

impl StyleState {
    /// Returns `true` if no color and no decoration is active.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }

    /// Applies a code to this state.
    ///
    /// When `color_resets_decorations` is set, a color code also clears every
    /// decoration.
    pub fn apply(&mut self, code: LegacyCode, color_resets_decorations: bool) {
        match code {
            LegacyCode::Color(color) => {
                self.color = Some(color);
                if color_resets_decorations {
                    self.decorations = Decorations::default();
                }
            }
            LegacyCode::Decoration(decoration) => self.decorations.insert(decoration),
            LegacyCode::Reset => *self = StyleState::default(),
        }
    }
}

/// A set of [`Decoration`]s.
///
/// Iteration always yields decorations in code order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decorations(u8);

impl Decorations {
    /// Returns `true` if no decoration is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the decoration is set.
    pub fn contains(&self, decoration: Decoration) -> bool {
        self.0 & decoration.bit() != 0
    }

    /// Adds a decoration to the set.
    pub fn insert(&mut self, decoration: Decoration) {
        self.0 |= decoration.bit();
    }

    /// Iterates the set in code order.
    pub fn iter(&self) -> impl Iterator<Item = Decoration> + use<> {
        let set = *self;
        Decoration::ALL
            .into_iter()
            .filter(move |decoration| set.contains(*decoration))
    }
}

impl FromIterator<Decoration> for Decorations {
    fn from_iter<T: IntoIterator<Item = Decoration>>(iter: T) -> Self {
        let mut decorations = Decorations::default();
        for decoration in iter {
            decorations.insert(decoration);
        }
        decorations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::NamedColor;

    #[test]
    fn test_apply_color_keeps_decorations() {
        let mut state = StyleState::default();
        state.apply(LegacyCode::Decoration(Decoration::Bold), false);
        state.apply(LegacyCode::Color(NamedColor::Red.into()), false);
        assert_eq!(state.color, Some(TextColor::Named(NamedColor::Red)));
        assert!(state.decorations.contains(Decoration::Bold));
    }

    #[test]
    fn test_apply_color_resets_decorations() {
        let mut state = StyleState::default();
        state.apply(LegacyCode::Decoration(Decoration::Bold), true);
        state.apply(LegacyCode::Color(NamedColor::Red.into()), true);
        assert!(state.decorations.is_empty());
        assert!(!state.is_plain());
    }

    #[test]
    fn test_apply_reset() {
        let mut state = StyleState::default();
        state.apply(LegacyCode::Color(NamedColor::Aqua.into()), false);
        state.apply(LegacyCode::Decoration(Decoration::Italic), false);
        state.apply(LegacyCode::Reset, false);
        assert!(state.is_plain());
        assert_eq!(state, StyleState::default());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = StyleState::default();
        once.apply(LegacyCode::Decoration(Decoration::Underlined), false);
        let mut twice = once;
        twice.apply(LegacyCode::Decoration(Decoration::Underlined), false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_decorations_iterate_in_code_order() {
        let decorations: Decorations = [Decoration::Italic, Decoration::Obfuscated, Decoration::Bold]
            .into_iter()
            .collect();
        let ordered: Vec<_> = decorations.iter().collect();
        assert_eq!(
            ordered,
            vec![Decoration::Obfuscated, Decoration::Bold, Decoration::Italic]
        );
    }
}
