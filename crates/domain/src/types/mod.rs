//! Domain types and models

pub mod feed;
pub mod profile;

pub use feed::{FeedSnapshot, SwipeDecision};
pub use profile::{
    ExperienceLevel, GeoPoint, Kink, Profile, ProfileId, RelationshipType, TextPrompt,
};
