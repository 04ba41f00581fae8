//! Suggestion candidates.
//!
//! The bundled pool is generated from `data/suggestion_pool.json`; callers
//! can also build their own candidates (tests, custom pools).

use std::borrow::Cow;

use serde::Serialize;

use crate::profile::TypeProfile;

/// Entry eligible for suggestion
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Candidate {
    pub name: Cow<'static, str>,
    pub types: TypeProfile,
    /// Minimum progression (badges) before the candidate is obtainable.
    /// `None` means it is never offered.
    pub min_badge: Option<u8>,
    pub location: Option<Cow<'static, str>>,
    pub note: Option<Cow<'static, str>>,
}

impl Candidate {
    pub fn new(name: impl Into<Cow<'static, str>>, types: TypeProfile) -> Self {
        Self {
            name: name.into(),
            types,
            min_badge: None,
            location: None,
            note: None,
        }
    }

    pub fn gate(mut self, min_badge: u8) -> Self {
        self.min_badge = Some(min_badge);
        self
    }

    pub fn location(mut self, location: impl Into<Cow<'static, str>>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn note(mut self, note: impl Into<Cow<'static, str>>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Obtainable at `progression` badges
    #[inline]
    pub fn is_available(&self, progression: u8) -> bool {
        self.min_badge.is_some_and(|gate| gate <= progression)
    }
}

include!(concat!(env!("OUT_DIR"), "/pool.rs"));

/// Case-insensitive lookup into `SUGGESTION_POOL`
pub fn find(name: &str) -> Option<&'static Candidate> {
    let key = name.trim().to_lowercase();
    POOL_LOOKUP.get(key.as_str()).map(|&idx| &SUGGESTION_POOL[idx])
}

/// Hand-maintained location for a species, if any
pub fn manual_location(species: &str) -> Option<&'static str> {
    let key = species.trim().to_lowercase();
    MANUAL_LOCATIONS.get(key.as_str()).copied()
}
