//! Roster-wide type gap analysis.
//!
//! `analyze_team` folds every member's defensive multipliers into per-type
//! weakness/resistance counts and unions their same-type offensive reach.
//! The result is a snapshot: it is recomputed from scratch whenever the
//! roster changes.

use serde::Serialize;

use crate::calc::{dual_multiplier, multiplier, offensive_coverage};
use crate::profile::TypeProfile;
use crate::types::{Type, TypeSet};

/// Weakness count at which a type counts as a shared team weakness
pub const SHARED_WEAKNESS_THRESHOLD: u8 = 2;

/// Number of example types listed in advice text
const ADVICE_EXAMPLES: usize = 3;

/// Per-type counter indexed by `Type`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeCounts([u8; Type::COUNT]);

impl TypeCounts {
    #[inline]
    pub fn get(&self, t: Type) -> u8 {
        self.0[t as usize]
    }

    #[inline]
    fn bump(&mut self, t: Type) {
        let slot = &mut self.0[t as usize];
        *slot = slot.saturating_add(1);
    }

    /// `(type, count)` pairs in canonical order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (Type, u8)> + '_ {
        Type::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// Types whose count is at least `min`, canonical order
    pub fn at_least(&self, min: u8) -> Vec<Type> {
        self.iter()
            .filter(|&(_, count)| count >= min)
            .map(|(t, _)| t)
            .collect()
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl Serialize for TypeCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Type::COUNT))?;
        for (t, count) in self.iter() {
            map.serialize_entry(t.name(), &count)?;
        }
        map.end()
    }
}

/// Derived snapshot of a roster's type coverage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamAnalysis {
    /// Members taking more than 1x from each attacking type
    pub weaknesses: TypeCounts,
    /// Members taking less than 1x from each attacking type
    pub resistances: TypeCounts,
    /// Types the roster hits super-effectively with its own types
    pub offensive_coverage: TypeSet,
    /// Complement of `offensive_coverage`
    pub missing_coverage: TypeSet,
}

/// Analyze a roster given each member's type profile.
///
/// An empty roster is valid: every count is zero and nothing is covered.
pub fn analyze_team(members: &[TypeProfile]) -> TeamAnalysis {
    let mut weaknesses = TypeCounts::default();
    let mut resistances = TypeCounts::default();

    for &attacker in &Type::ALL {
        for member in members {
            let mult = dual_multiplier(attacker, member);
            if mult.is_super_effective() {
                weaknesses.bump(attacker);
            } else if mult.is_resisted() {
                resistances.bump(attacker);
            }
        }
    }

    let offensive = offensive_coverage(members.iter().flat_map(|m| m.iter()));

    TeamAnalysis {
        weaknesses,
        resistances,
        offensive_coverage: offensive,
        missing_coverage: offensive.complement(),
    }
}

/// Gaps a suggestion should patch
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionCriteria {
    /// Shared weaknesses a candidate should resist
    pub resists: Vec<Type>,
    /// Types the roster cannot hit super-effectively yet
    pub hits: Vec<Type>,
}

/// Classify the analysis into the two sets consumed by the scorer.
pub fn suggestion_criteria(analysis: &TeamAnalysis) -> SuggestionCriteria {
    SuggestionCriteria {
        resists: analysis.weaknesses.at_least(SHARED_WEAKNESS_THRESHOLD),
        hits: analysis.missing_coverage.to_vec(),
    }
}

/// Shared weaknesses, most widespread first (ties in canonical order)
pub fn shared_weaknesses(analysis: &TeamAnalysis) -> Vec<(Type, u8)> {
    let mut shared: Vec<(Type, u8)> = analysis
        .weaknesses
        .iter()
        .filter(|&(_, count)| count >= SHARED_WEAKNESS_THRESHOLD)
        .collect();
    shared.sort_by(|a, b| b.1.cmp(&a.1));
    shared
}

/// Types that take less than 1x from `attacker`
pub fn resisting_types(attacker: Type) -> Vec<Type> {
    Type::ALL
        .into_iter()
        .filter(|&t| multiplier(attacker, t).is_resisted())
        .collect()
}

/// Types that hit `defender` super-effectively
pub fn hitting_types(defender: Type) -> Vec<Type> {
    Type::ALL
        .into_iter()
        .filter(|&t| multiplier(t, defender).is_super_effective())
        .collect()
}

/// Hint for patching one gap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advice {
    /// The team shares a weakness to this attacking type
    Resist(Type),
    /// The team cannot hit this type super-effectively
    Hit(Type),
}

impl Advice {
    /// Example types that would patch the gap
    pub fn examples(&self) -> Vec<Type> {
        let mut types = match *self {
            Advice::Resist(t) => resisting_types(t),
            Advice::Hit(t) => hitting_types(t),
        };
        types.truncate(ADVICE_EXAMPLES);
        types
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.examples().iter().map(|t| t.name()).collect();
        match self {
            Advice::Resist(t) => write!(f, "Consider adding: {} (Resists {})", names.join("/"), t),
            Advice::Hit(t) => write!(f, "Consider adding: {} (Hits {})", names.join("/"), t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(types: &[Type]) -> TypeProfile {
        TypeProfile::from_types(types).unwrap()
    }

    #[test]
    fn oversized_roster_counts_saturate() {
        let roster = vec![p(&[Type::Grass]); 300];
        let analysis = analyze_team(&roster);
        assert_eq!(analysis.weaknesses.get(Type::Fire), u8::MAX);
        assert_eq!(analysis.resistances.get(Type::Water), u8::MAX);
    }

    #[test]
    fn empty_roster_has_maximal_gaps() {
        let analysis = analyze_team(&[]);
        assert!(analysis.weaknesses.is_all_zero());
        assert!(analysis.resistances.is_all_zero());
        assert!(analysis.offensive_coverage.is_empty());
        assert_eq!(analysis.missing_coverage, TypeSet::all());

        let criteria = suggestion_criteria(&analysis);
        assert!(criteria.resists.is_empty());
        assert_eq!(criteria.hits, Type::ALL.to_vec());
    }

    #[test]
    fn electric_and_flying_counts() {
        let analysis = analyze_team(&[p(&[Type::Electric]), p(&[Type::Flying])]);
        // Ice only hits Flying; Electric is neutral to it
        assert_eq!(analysis.weaknesses.get(Type::Ice), 1);
        assert_eq!(analysis.weaknesses.get(Type::Ground), 1);
        assert_eq!(analysis.resistances.get(Type::Flying), 1);
        assert_eq!(analysis.resistances.get(Type::Electric), 1);
    }

    #[test]
    fn two_flyers_share_rock_weakness() {
        let analysis = analyze_team(&[
            p(&[Type::Electric, Type::Flying]),
            p(&[Type::Water, Type::Flying]),
        ]);
        assert_eq!(analysis.weaknesses.get(Type::Ice), 1);
        assert_eq!(analysis.weaknesses.get(Type::Rock), 2);
        // Electric/Flying takes 1x from Electric, Water/Flying takes 4x
        assert_eq!(analysis.weaknesses.get(Type::Electric), 1);
        // Ground: Flying is immune on both
        assert_eq!(analysis.resistances.get(Type::Ground), 2);

        let criteria = suggestion_criteria(&analysis);
        assert_eq!(criteria.resists, vec![Type::Rock]);
    }

    #[test]
    fn neutral_member_counts_in_neither_bucket() {
        // Ice vs Water/Ground is 0.5x * 2x
        let analysis = analyze_team(&[p(&[Type::Water, Type::Ground])]);
        assert_eq!(analysis.weaknesses.get(Type::Ice), 0);
        assert_eq!(analysis.resistances.get(Type::Ice), 0);
    }

    #[test]
    fn fire_only_roster_coverage() {
        let analysis = analyze_team(&[p(&[Type::Fire])]);
        assert_eq!(
            analysis.offensive_coverage.to_vec(),
            vec![Type::Grass, Type::Ice, Type::Bug, Type::Steel]
        );
        assert_eq!(analysis.missing_coverage.count(), Type::COUNT - 4);
        assert!(!analysis.missing_coverage.has(Type::Grass));
        assert!(analysis.missing_coverage.has(Type::Water));
    }

    #[test]
    fn shared_weaknesses_sorted_by_count() {
        let analysis = analyze_team(&[
            p(&[Type::Grass]),
            p(&[Type::Grass, Type::Flying]),
            p(&[Type::Bug]),
        ]);
        let shared = shared_weaknesses(&analysis);
        // Fire and Flying hit all three, Ice hits the grass types
        assert_eq!(shared[0], (Type::Fire, 3));
        assert_eq!(shared[1], (Type::Flying, 3));
        assert!(shared.contains(&(Type::Ice, 2)));
        for pair in shared.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn advice_text() {
        assert_eq!(
            Advice::Resist(Type::Ice).to_string(),
            "Consider adding: Fire/Water/Ice (Resists Ice)"
        );
        assert_eq!(
            Advice::Hit(Type::Dragon).to_string(),
            "Consider adding: Ice/Dragon/Fairy (Hits Dragon)"
        );
    }

    #[test]
    fn counts_serialize_by_type_name() {
        let analysis = analyze_team(&[p(&[Type::Fire])]);
        let json = serde_json::to_value(analysis.weaknesses).unwrap();
        assert_eq!(json["Water"], 1);
        assert_eq!(json["Fire"], 0);
    }
}
