//! Type effectiveness calculation.
//!
//! Multipliers are kept on the chart's fixed-point 4-scale so that dual-type
//! products stay exact: 0 (immune), 1 (0.25x), 2 (0.5x), 4 (1x), 8 (2x),
//! 16 (4x).

use std::fmt;

use crate::profile::TypeProfile;
use crate::types::{Type, TypeEffectiveness, TypeSet, TYPE_CHART};

/// Damage multiplier on a 4-scale (4 = 1.0x)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multiplier(u8);

impl Multiplier {
    pub const IMMUNE: Self = Self(0);
    pub const QUARTER: Self = Self(1);
    pub const HALF: Self = Self(2);
    pub const NEUTRAL: Self = Self(4);
    pub const DOUBLE: Self = Self(8);
    pub const QUADRUPLE: Self = Self(16);

    /// Raw fixed-point value
    #[inline]
    pub const fn fixed(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        self.0 as f32 / 4.0
    }

    /// Greater than 1x
    #[inline]
    pub const fn is_super_effective(self) -> bool {
        self.0 > Self::NEUTRAL.0
    }

    /// Less than 1x (includes immunity)
    #[inline]
    pub const fn is_resisted(self) -> bool {
        self.0 < Self::NEUTRAL.0
    }

    #[inline]
    pub const fn is_immune(self) -> bool {
        self.0 == 0
    }

    /// Combine two multipliers (4 * 4 / 4 = 4)
    #[inline]
    pub const fn stack(self, other: Self) -> Self {
        Self((self.0 as u16 * other.0 as u16 / 4) as u8)
    }
}

impl From<TypeEffectiveness> for Multiplier {
    #[inline]
    fn from(eff: TypeEffectiveness) -> Self {
        Self(eff.multiplier())
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("0x"),
            1 => f.write_str("0.25x"),
            2 => f.write_str("0.5x"),
            v => write!(f, "{}x", v / 4),
        }
    }
}

/// Effectiveness of `attacker` against a single `defender` type.
#[inline]
pub fn multiplier(attacker: Type, defender: Type) -> Multiplier {
    TYPE_CHART[attacker as usize][defender as usize].into()
}

/// Effectiveness of `attacker` against every type of `defender`, multiplied.
///
/// A single immunity zeroes the whole product.
#[inline]
pub fn dual_multiplier(attacker: Type, defender: &TypeProfile) -> Multiplier {
    defender
        .iter()
        .fold(Multiplier::NEUTRAL, |acc, t| acc.stack(multiplier(attacker, t)))
}

/// Attacking types that deal more than 1x, strongest first.
///
/// Ties keep canonical type order.
pub fn weaknesses(defender: &TypeProfile) -> Vec<(Type, Multiplier)> {
    let mut found: Vec<(Type, Multiplier)> = Type::ALL
        .iter()
        .map(|&attacker| (attacker, dual_multiplier(attacker, defender)))
        .filter(|(_, m)| m.is_super_effective())
        .collect();
    found.sort_by(|a, b| b.1.cmp(&a.1));
    found
}

/// Attacking types that deal less than 1x, weakest first (immunities lead).
pub fn resistances(defender: &TypeProfile) -> Vec<(Type, Multiplier)> {
    let mut found: Vec<(Type, Multiplier)> = Type::ALL
        .iter()
        .map(|&attacker| (attacker, dual_multiplier(attacker, defender)))
        .filter(|(_, m)| m.is_resisted())
        .collect();
    found.sort_by(|a, b| a.1.cmp(&b.1));
    found
}

/// Defending types that at least one of `attackers` hits super-effectively.
pub fn offensive_coverage<I>(attackers: I) -> TypeSet
where
    I: IntoIterator<Item = Type>,
{
    let mut covered = TypeSet::empty();
    for attacker in attackers {
        for &defender in &Type::ALL {
            if multiplier(attacker, defender).is_super_effective() {
                covered.insert(defender.bit());
            }
        }
    }
    covered
}

/// Does any of the profile's own types hit `defender` super-effectively?
#[inline]
pub fn hits_super_effectively(attacker: &TypeProfile, defender: Type) -> bool {
    attacker
        .iter()
        .any(|t| multiplier(t, defender).is_super_effective())
}

impl TypeSet {
    /// Check membership of a single type
    #[inline]
    pub fn has(self, t: Type) -> bool {
        self.contains(t.bit())
    }

    /// Number of types in the set
    #[inline]
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Types in canonical order
    pub fn types(self) -> impl Iterator<Item = Type> {
        Type::ALL.into_iter().filter(move |t| self.has(*t))
    }

    pub fn to_vec(self) -> Vec<Type> {
        self.types().collect()
    }
}

impl FromIterator<Type> for TypeSet {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TypeSet::empty(), |set, t| set | t.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_lookups() {
        assert_eq!(multiplier(Type::Fire, Type::Grass), Multiplier::DOUBLE);
        assert_eq!(multiplier(Type::Water, Type::Fire), Multiplier::DOUBLE);
        assert_eq!(multiplier(Type::Fire, Type::Water), Multiplier::HALF);
        assert_eq!(multiplier(Type::Ground, Type::Flying), Multiplier::IMMUNE);
        assert_eq!(multiplier(Type::Normal, Type::Fire), Multiplier::NEUTRAL);
    }

    #[test]
    fn dual_stacking() {
        // 2x * 2x = 4x
        let grass_flying = TypeProfile::dual(Type::Grass, Type::Flying);
        assert_eq!(dual_multiplier(Type::Ice, &grass_flying), Multiplier::QUADRUPLE);

        // 2x * 0.5x = 1x
        let water_ground = TypeProfile::dual(Type::Water, Type::Ground);
        assert_eq!(dual_multiplier(Type::Ice, &water_ground), Multiplier::HALF.stack(Multiplier::DOUBLE));
        assert_eq!(dual_multiplier(Type::Ice, &water_ground), Multiplier::NEUTRAL);

        // 0x wins regardless of the other type
        assert_eq!(dual_multiplier(Type::Electric, &water_ground), Multiplier::IMMUNE);
        let steel_fairy = TypeProfile::dual(Type::Steel, Type::Fairy);
        assert_eq!(dual_multiplier(Type::Dragon, &steel_fairy), Multiplier::IMMUNE);

        // 0.5x * 0.5x = 0.25x
        let fire_dragon = TypeProfile::dual(Type::Fire, Type::Dragon);
        assert_eq!(dual_multiplier(Type::Fire, &fire_dragon), Multiplier::QUARTER);
    }

    #[test]
    fn water_ground_has_single_quad_weakness() {
        let swampert = TypeProfile::dual(Type::Water, Type::Ground);
        let weak = weaknesses(&swampert);
        assert_eq!(weak, vec![(Type::Grass, Multiplier::QUADRUPLE)]);

        let resist = resistances(&swampert);
        assert_eq!(resist[0], (Type::Electric, Multiplier::IMMUNE));
        assert!(resist.iter().all(|(_, m)| m.is_resisted()));
    }

    #[test]
    fn weaknesses_sorted_descending() {
        let grass_flying = TypeProfile::dual(Type::Grass, Type::Flying);
        let weak = weaknesses(&grass_flying);
        assert_eq!(weak[0], (Type::Ice, Multiplier::QUADRUPLE));
        for pair in weak.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn fire_coverage() {
        let covered = offensive_coverage([Type::Fire]);
        assert_eq!(covered.to_vec(), vec![Type::Grass, Type::Ice, Type::Bug, Type::Steel]);
    }

    #[test]
    fn multiplier_display() {
        assert_eq!(Multiplier::QUADRUPLE.to_string(), "4x");
        assert_eq!(Multiplier::DOUBLE.to_string(), "2x");
        assert_eq!(Multiplier::NEUTRAL.to_string(), "1x");
        assert_eq!(Multiplier::HALF.to_string(), "0.5x");
        assert_eq!(Multiplier::QUARTER.to_string(), "0.25x");
        assert_eq!(Multiplier::IMMUNE.to_string(), "0x");
    }

    #[test]
    fn typeset_iterates_in_canonical_order() {
        let set: TypeSet = [Type::Fairy, Type::Normal, Type::Ice].into_iter().collect();
        assert_eq!(set.to_vec(), vec![Type::Normal, Type::Ice, Type::Fairy]);
        assert_eq!(set.count(), 3);
        assert_eq!(set.complement().count(), Type::COUNT - 3);
    }
}
