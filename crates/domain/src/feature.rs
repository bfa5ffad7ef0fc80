// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A physical feature a room can offer and an event can require.
///
/// The eight feature tags are fixed by the design; the set surfaces in the
/// persisted room and event records, so any change is a migration event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RoomFeature {
    /// Room has a whiteboard.
    Whiteboard,
    /// Room has a projector and screen.
    Projector,
    /// Rows of seats surrounding a speaker platform.
    AuditoriumSetup,
    /// Seats around tables.
    ConferenceSetup,
    /// Room is empty.
    EmptySetup,
    /// Room has a computer accessible to speakers and organizers.
    Computer,
    /// Room has an elevated stage platform.
    Stage,
    /// Room has a microphone and speakers.
    Microphone,
}

impl RoomFeature {
    /// Every feature tag, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Whiteboard,
        Self::Projector,
        Self::AuditoriumSetup,
        Self::ConferenceSetup,
        Self::EmptySetup,
        Self::Computer,
        Self::Stage,
        Self::Microphone,
    ];

    /// Returns the display name of this feature.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whiteboard => "Whiteboard",
            Self::Projector => "Projector",
            Self::AuditoriumSetup => "Auditorium setup",
            Self::ConferenceSetup => "Conference setup",
            Self::EmptySetup => "Empty setup",
            Self::Computer => "Computer",
            Self::Stage => "Stage",
            Self::Microphone => "Microphone",
        }
    }

    /// Returns a one-line description of this feature.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Whiteboard => "Whiteboard: Room has a whiteboard.",
            Self::Projector => "Projector: Room has a projector and screen.",
            Self::AuditoriumSetup => {
                "Auditorium setup: Room has rows of seats surrounding a speaker platform."
            }
            Self::ConferenceSetup => "Conference setup: Room has seats around tables.",
            Self::EmptySetup => "Empty setup: Room is empty.",
            Self::Computer => {
                "Computer: Room has a computer accessible to speakers, organizers, and admins only."
            }
            Self::Stage => "Stage: Room has an elevated stage platform.",
            Self::Microphone => "Microphone: Room has a microphone and speakers.",
        }
    }

    /// Parses a feature from its display name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the name does not match any feature tag.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownFeature(name.to_owned()))
    }
}

impl std::fmt::Display for RoomFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats a feature set as the comma-separated display form used in room
/// and event listings.
#[must_use]
pub fn display_features<'a, I>(features: I) -> String
where
    I: IntoIterator<Item = &'a RoomFeature>,
{
    let names: Vec<&'static str> = features.into_iter().map(RoomFeature::as_str).collect();
    names.join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            RoomFeature::parse("auditorium SETUP").unwrap(),
            RoomFeature::AuditoriumSetup
        );
        assert_eq!(RoomFeature::parse("whiteboard").unwrap(), RoomFeature::Whiteboard);
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        assert!(RoomFeature::parse("jacuzzi").is_err());
    }

    #[test]
    fn test_display_features_joins_names() {
        let features = [RoomFeature::Stage, RoomFeature::Microphone];
        assert_eq!(display_features(&features), "Stage, Microphone");
    }
}
