// Copyright 2025 The rocketchat-api Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Localized strings for user-visible payload content.
//!
//! A few payloads embed display strings that the server relays to other
//! clients verbatim, so they have to be resolved in the sender's locale
//! at request-assembly time.

/// Key for the label of the "join video call" action link.
pub(crate) const JOIN_VIDEO_CALL: &str = "chat.message.actions.join_video_call";

/// Resolves localization keys to display strings in the active locale.
pub trait Localize {
    /// Look up the display string for `key`.
    ///
    /// Implementations must be total and side-effect-free; unknown keys
    /// resolve to some fallback rather than failing.
    fn localize(&self, key: &str) -> String;
}

/// The built-in English string catalog.
///
/// Unknown keys are echoed back, so a missing translation shows up as the
/// raw key instead of breaking the payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct Catalog;

impl Localize for Catalog {
    fn localize(&self, key: &str) -> String {
        match key {
            JOIN_VIDEO_CALL => "Join video call".to_owned(),
            _ => key.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Localize, JOIN_VIDEO_CALL};

    #[test]
    fn catalog_resolves_known_key() {
        assert_eq!(Catalog.localize(JOIN_VIDEO_CALL), "Join video call");
    }

    #[test]
    fn catalog_echoes_unknown_keys() {
        assert_eq!(Catalog.localize("no.such.key"), "no.such.key");
    }
}
