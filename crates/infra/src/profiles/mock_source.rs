//! Randomised profile source for local sessions and demos.
//!
//! Names are drawn without repetition from a fixed pool; once the pool runs
//! dry it is refilled, so names repeat only after every name has been used.
//! Identifiers are always fresh.

use std::collections::VecDeque;

use chrono::{Duration as ChronoDuration, Utc};
use inferno_core::ProfileSource;
use inferno_domain::{
    ExperienceLevel, GeoPoint, Kink, Profile, ProfileId, RelationshipType, Result, TextPrompt,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Builder;

const NAMES: &[&str] = &[
    "Sophia", "Liam", "Olivia", "Noah", "Ava", "Elijah", "Mia", "James", "Chloe", "Lucas",
    "Isabella", "Mason", "Zoe", "Logan", "Aria", "Ethan", "Riley", "Carter",
];

const BIOS: &[&str] = &[
    "Just a free spirit looking for a deep connection. Let's explore the city and each other.",
    "Tech geek by day, adventurer by weekend. My dog thinks I'm cool, so I have that going for me.",
    "Artist with a passion for spicy food and old movies. Tell me your favorite film and I'll tell you mine.",
    "Fitness enthusiast who loves a good cheat meal. Looking for a workout partner and a partner in crime.",
    "I'm an open book, but I prefer to be read by candlelight. Let's get lost in conversation.",
    "Sarcasm is my love language. If you can keep up, you might just win me over.",
    "World traveler with a bad case of wanderlust. Looking for someone to get lost with.",
    "Bookworm who occasionally pretends to be an extrovert.",
];

const KINKS: &[&str] = &[
    "Bondage",
    "Roleplay",
    "Sensation play",
    "Praise",
    "Exhibitionism",
    "Voyeurism",
    "Rope",
    "Dominance",
    "Submission",
    "Toys",
];

const ROLES: &[&str] = &["Dominant", "Submissive", "Switch", "Top", "Bottom", "Vanilla", "Explorer"];

const LOOKING_FOR: &[&str] =
    &["Friends", "Dates", "Play partners", "Relationship", "Something casual", "Open to anything"];

const PROMPTS: &[&str] = &[
    "My ideal first date is...",
    "The way to my heart is...",
    "I'm weirdly attracted to...",
    "A green flag for me is...",
    "I'll fall for you if...",
];

const PROMPT_ANSWERS: &[&str] = &[
    "finding out together.",
    "you telling me yours first.",
    "a little bit of danger.",
    "making you blush.",
    "not being afraid to ask for what they want.",
    "pineapple.",
];

const SAMPLE_VIDEO_URL: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4";

const BASE_LAT: f64 = 37.7749;
const BASE_LON: f64 = -122.4194;

const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

struct Generator {
    rng: StdRng,
    available_names: VecDeque<&'static str>,
}

impl Generator {
    fn new(rng: StdRng) -> Self {
        Self { rng, available_names: VecDeque::new() }
    }

    fn next_name(&mut self) -> &'static str {
        if self.available_names.is_empty() {
            let mut pool = NAMES.to_vec();
            pool.shuffle(&mut self.rng);
            self.available_names.extend(pool);
        }
        self.available_names.pop_front().unwrap_or(NAMES[0])
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    fn subset(&mut self, items: &[&'static str], min: usize, max: usize) -> Vec<String> {
        let count = self.rng.gen_range(min..=max);
        items.choose_multiple(&mut self.rng, count).map(|item| (*item).to_string()).collect()
    }

    fn jitter(&mut self, base: f64) -> f64 {
        base + self.rng.gen_range(-1.0..1.0)
    }

    fn profile(&mut self) -> Profile {
        let id = ProfileId::from_uuid(Builder::from_random_bytes(self.rng.gen()).into_uuid());
        let name = self.next_name();
        let image = |suffix: &str| format!("https://picsum.photos/seed/{id}{suffix}/400/600");

        let kink_count = self.rng.gen_range(2..=4);
        let kinks = KINKS
            .choose_multiple(&mut self.rng, kink_count)
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
            .map(|kink| Kink { name: kink.to_string(), level: self.pick(ExperienceLevel::ALL) })
            .collect();

        let prompt_count = self.rng.gen_range(1..=2);
        let text_prompts = PROMPTS
            .choose_multiple(&mut self.rng, prompt_count)
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
            .map(|question| TextPrompt {
                question: question.to_string(),
                answer: self.pick(PROMPT_ANSWERS).to_string(),
            })
            .collect();

        let private_vault =
            if self.rng.gen_bool(0.5) { vec![image("-p1")] } else { Vec::new() };
        let video_url = self.rng.gen_bool(0.2).then(|| SAMPLE_VIDEO_URL.to_string());
        let last_active = Utc::now() - ChronoDuration::milliseconds(self.rng.gen_range(0..WEEK_MS));

        Profile {
            id,
            name: name.to_string(),
            age: self.rng.gen_range(22..=34),
            bio: self.pick(BIOS).to_string(),
            kinks,
            roles: self.subset(ROLES, 1, 3),
            looking_for: self.subset(LOOKING_FOR, 1, 2),
            image_url: image(""),
            public_album: vec![image("-1"), image("-2")],
            private_vault,
            video_url,
            text_prompts,
            is_verified: self.rng.gen_bool(0.6),
            last_active,
            height_cm: self.rng.gen_range(155..=195),
            relationship_type: self.pick(RelationshipType::ALL),
            location: GeoPoint { lat: self.jitter(BASE_LAT), lon: self.jitter(BASE_LON) },
            is_spotlight: self.rng.gen_bool(0.25),
        }
    }
}

/// Profile source backed by a random generator.
pub struct MockProfileSource {
    generator: Mutex<Generator>,
}

impl MockProfileSource {
    /// Source seeded from OS entropy
    pub fn new() -> Self {
        Self { generator: Mutex::new(Generator::new(StdRng::from_entropy())) }
    }

    /// Deterministic source for tests
    pub fn with_seed(seed: u64) -> Self {
        Self { generator: Mutex::new(Generator::new(StdRng::seed_from_u64(seed))) }
    }
}

impl Default for MockProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSource for MockProfileSource {
    fn generate(&self, count: usize) -> Result<Vec<Profile>> {
        let mut generator = self.generator.lock();
        let profiles: Vec<Profile> = (0..count).map(|_| generator.profile()).collect();
        tracing::debug!(count = profiles.len(), "generated mock profiles");
        Ok(profiles)
    }
}
