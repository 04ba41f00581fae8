//! Gym leaders and level caps.

use serde::Serialize;

use crate::types::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GymLeader {
    pub id: &'static str,
    pub name: &'static str,
    pub gym_type: Type,
    pub ace: &'static str,
    /// Level cap while this gym is the next challenge
    pub level_cap: u8,
    /// Badge number awarded (1-based)
    pub badge: u8,
    pub advice: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/gyms.rs"));

/// Gym to challenge with `badges` already earned, `None` once all are done
pub fn next_gym(badges: u8) -> Option<&'static GymLeader> {
    GYM_LEADERS.iter().find(|g| g.badge > badges)
}

/// Level cap for the next gym, or the final cap once every badge is earned
pub fn level_cap(badges: u8) -> u8 {
    next_gym(badges)
        .or_else(|| GYM_LEADERS.last())
        .map_or(100, |g| g.level_cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaders_sorted_by_badge() {
        assert_eq!(GYM_LEADERS.len(), 8);
        for (i, g) in GYM_LEADERS.iter().enumerate() {
            assert_eq!(g.badge as usize, i + 1);
        }
    }

    #[test]
    fn next_gym_follows_progress() {
        assert_eq!(next_gym(0).map(|g| g.name), Some("Milo"));
        assert_eq!(next_gym(3).map(|g| g.gym_type), Some(Type::Ghost));
        assert!(next_gym(8).is_none());
    }

    #[test]
    fn level_caps() {
        assert_eq!(level_cap(0), 25);
        assert_eq!(level_cap(4), 45);
        assert_eq!(level_cap(8), 100);
    }
}
