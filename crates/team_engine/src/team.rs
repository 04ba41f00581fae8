//! Team roster store.
//!
//! Six fixed slots with per-slot locks, a blacklist of names the user never
//! wants suggested, and the progression counter (badges earned).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::profile::TypeProfile;
use crate::provider::{normalize_key, Creature};

pub const TEAM_SIZE: usize = 6;
pub const MAX_BADGES: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("slot {0} is out of range")]
    InvalidSlot(usize),

    #[error("slot {0} is locked")]
    Locked(usize),

    #[error("the team is full")]
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    slots: [Option<Creature>; TEAM_SIZE],
    #[serde(default)]
    locked: [bool; TEAM_SIZE],
    #[serde(default)]
    blacklist: Vec<String>,
    #[serde(default)]
    badges: u8,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_slot(slot: usize) -> Result<(), TeamError> {
        if slot < TEAM_SIZE {
            Ok(())
        } else {
            Err(TeamError::InvalidSlot(slot))
        }
    }

    /// Place `creature` in `slot`, or the first empty slot when `slot` is
    /// `None`. An occupied locked slot is left alone. Returns the slot used.
    pub fn add(&mut self, creature: Creature, slot: Option<usize>) -> Result<usize, TeamError> {
        let idx = match slot {
            Some(idx) => {
                Self::check_slot(idx)?;
                if self.locked[idx] && self.slots[idx].is_some() {
                    return Err(TeamError::Locked(idx));
                }
                idx
            }
            None => self.slots.iter().position(Option::is_none).ok_or(TeamError::Full)?,
        };
        self.slots[idx] = Some(creature);
        Ok(idx)
    }

    /// Empty a slot. Locked slots are kept; returns what was removed.
    pub fn remove(&mut self, slot: usize) -> Result<Option<Creature>, TeamError> {
        Self::check_slot(slot)?;
        if self.locked[slot] {
            return Ok(None);
        }
        Ok(self.slots[slot].take())
    }

    /// Overwrite a slot regardless of its lock
    pub fn replace(&mut self, slot: usize, creature: Creature) -> Result<Option<Creature>, TeamError> {
        Self::check_slot(slot)?;
        Ok(self.slots[slot].replace(creature))
    }

    /// Flip a slot's lock, returning the new state
    pub fn toggle_lock(&mut self, slot: usize) -> Result<bool, TeamError> {
        Self::check_slot(slot)?;
        self.locked[slot] = !self.locked[slot];
        Ok(self.locked[slot])
    }

    pub fn is_locked(&self, slot: usize) -> bool {
        self.locked.get(slot).copied().unwrap_or(false)
    }

    /// Empty every unlocked slot
    pub fn clear(&mut self) {
        for (slot, locked) in self.slots.iter_mut().zip(self.locked) {
            if !locked {
                *slot = None;
            }
        }
    }

    pub fn badges(&self) -> u8 {
        self.badges
    }

    /// Set progression, clamped to 0..=8
    pub fn set_badges(&mut self, badges: u8) {
        self.badges = badges.min(MAX_BADGES);
    }

    /// Add a name to the blacklist (stored lower-case, once)
    pub fn blacklist_add(&mut self, name: &str) {
        let key = normalize_key(name);
        if !key.is_empty() && !self.blacklist.contains(&key) {
            self.blacklist.push(key);
        }
    }

    pub fn blacklist_remove(&mut self, name: &str) -> bool {
        let key = normalize_key(name);
        let before = self.blacklist.len();
        self.blacklist.retain(|n| *n != key);
        before != self.blacklist.len()
    }

    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }

    pub fn blacklist_set(&self) -> HashSet<String> {
        self.blacklist.iter().cloned().collect()
    }

    pub fn slot(&self, slot: usize) -> Option<&Creature> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// `(slot, creature, locked)` for every occupied slot
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Creature, bool)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|c| (idx, c, self.locked[idx])))
    }

    /// Occupied slots, in slot order
    pub fn members(&self) -> Vec<&Creature> {
        self.slots.iter().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == TEAM_SIZE
    }

    pub fn profiles(&self) -> Vec<TypeProfile> {
        self.slots.iter().flatten().map(|c| c.types).collect()
    }

    /// Lower-cased names of members and every species in their families
    pub fn owned_names(&self) -> HashSet<String> {
        let mut owned = HashSet::new();
        for creature in self.slots.iter().flatten() {
            owned.insert(normalize_key(&creature.name));
            owned.extend(creature.family.iter().map(|name| normalize_key(name)));
        }
        owned
    }
}
