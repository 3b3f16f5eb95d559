//! Candidate profile types
//!
//! A [`Profile`] is what the swipe feed shows. The feed itself only looks at
//! [`Profile::id`]; every other field is display data for the card.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::impl_domain_label_conversions;

/// Stable identifier of a candidate profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Generate a fresh random identifier (UUIDv4)
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How familiar a profile is with a listed kink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Curious,
    Beginner,
    Intermediate,
    Experienced,
}

impl_domain_label_conversions!(ExperienceLevel {
    Curious => "curious",
    Beginner => "beginner",
    Intermediate => "intermediate",
    Experienced => "experienced",
});

/// Relationship structure a profile is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Monogamous,
    Open,
    Polyamorous,
    Casual,
    Exploring,
}

impl_domain_label_conversions!(RelationshipType {
    Monogamous => "monogamous",
    Open => "open",
    Polyamorous => "polyamorous",
    Casual => "casual",
    Exploring => "exploring",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Kink {
    pub name: String,
    pub level: ExperienceLevel,
}

/// Question/answer pair shown on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TextPrompt {
    pub question: String,
    pub answer: String,
}

/// Approximate location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A candidate shown to the user for a swipe decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub kinks: Vec<Kink>,
    pub roles: Vec<String>,
    pub looking_for: Vec<String>,
    pub image_url: String,
    pub public_album: Vec<String>,
    pub private_vault: Vec<String>,
    #[cfg_attr(feature = "ts-gen", ts(optional))]
    pub video_url: Option<String>,
    pub text_prompts: Vec<TextPrompt>,
    pub is_verified: bool,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub last_active: DateTime<Utc>,
    pub height_cm: u16,
    pub relationship_type: RelationshipType,
    pub location: GeoPoint,
    pub is_spotlight: bool,
}

impl Profile {
    /// Minimal profile with a fresh id and empty display attributes.
    ///
    /// Real cards come from a profile source; this is the starting point
    /// for hand-built fixtures.
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            id: ProfileId::new(),
            name: name.into(),
            age,
            bio: String::new(),
            kinks: Vec::new(),
            roles: Vec::new(),
            looking_for: Vec::new(),
            image_url: String::new(),
            public_album: Vec::new(),
            private_vault: Vec::new(),
            video_url: None,
            text_prompts: Vec::new(),
            is_verified: false,
            last_active: Utc::now(),
            height_cm: 170,
            relationship_type: RelationshipType::Exploring,
            location: GeoPoint { lat: 0.0, lon: 0.0 },
            is_spotlight: false,
        }
    }

    /// Replace the identifier
    #[must_use]
    pub fn with_id(mut self, id: ProfileId) -> Self {
        self.id = id;
        self
    }
}
