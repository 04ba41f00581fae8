//! Creature type profiles.
//!
//! A creature has one or two types. Anything else is unrepresentable: the
//! constructors only accept one or two `Type`s and deserialization rejects
//! empty or oversized lists.

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// Error raised when building a profile from an unchecked list of types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("a type profile needs at least one type")]
    Empty,

    #[error("a type profile has at most two types, got {0}")]
    TooMany(usize),

    #[error("unknown type `{0}`")]
    UnknownType(String),
}

/// Ordered list of one or two types.
///
/// Defensive multipliers multiply across both types; offensively each type
/// is its own attacking reference (same-type-attack-bonus assumption).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Type>", into = "Vec<Type>")]
pub struct TypeProfile {
    primary: Type,
    secondary: Option<Type>,
}

impl TypeProfile {
    /// Single-typed profile
    #[inline]
    pub const fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Dual-typed profile. The same type twice collapses to a single type.
    #[inline]
    pub const fn dual(primary: Type, secondary: Type) -> Self {
        if primary as u8 == secondary as u8 {
            Self::single(primary)
        } else {
            Self {
                primary,
                secondary: Some(secondary),
            }
        }
    }

    /// Build from a slice of one or two types
    pub fn from_types(types: &[Type]) -> Result<Self, ProfileError> {
        match types {
            [] => Err(ProfileError::Empty),
            [t] => Ok(Self::single(*t)),
            [a, b] => Ok(Self::dual(*a, *b)),
            more => Err(ProfileError::TooMany(more.len())),
        }
    }

    /// Parse "fire" or "water/ground" (also accepts ',' and '+' as separators)
    pub fn parse(s: &str) -> Result<Self, ProfileError> {
        let types = s
            .split(['/', ',', '+'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Type::from_str(part).ok_or_else(|| ProfileError::UnknownType(part.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_types(&types)
    }

    #[inline]
    pub const fn primary(&self) -> Type {
        self.primary
    }

    #[inline]
    pub const fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    #[inline]
    pub const fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    /// Check whether this profile includes `t`
    #[inline]
    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Types in order (primary first)
    pub fn iter(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl TryFrom<Vec<Type>> for TypeProfile {
    type Error = ProfileError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        Self::from_types(&types)
    }
}

impl From<TypeProfile> for Vec<Type> {
    fn from(profile: TypeProfile) -> Self {
        profile.iter().collect()
    }
}

impl From<Type> for TypeProfile {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl std::fmt::Display for TypeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_of_same_type_collapses() {
        let p = TypeProfile::dual(Type::Fire, Type::Fire);
        assert_eq!(p, TypeProfile::single(Type::Fire));
        assert!(!p.is_dual());
    }

    #[test]
    fn iter_keeps_order() {
        let p = TypeProfile::dual(Type::Water, Type::Ground);
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![Type::Water, Type::Ground]);
        assert!(p.contains(Type::Ground));
        assert!(!p.contains(Type::Grass));
    }

    #[test]
    fn from_types_rejects_bad_lengths() {
        assert_eq!(TypeProfile::from_types(&[]), Err(ProfileError::Empty));
        assert_eq!(
            TypeProfile::from_types(&[Type::Fire, Type::Water, Type::Grass]),
            Err(ProfileError::TooMany(3))
        );
    }

    #[test]
    fn parse_accepts_separators() {
        assert_eq!(
            TypeProfile::parse("water/ground").unwrap(),
            TypeProfile::dual(Type::Water, Type::Ground)
        );
        assert_eq!(
            TypeProfile::parse(" Electric ").unwrap(),
            TypeProfile::single(Type::Electric)
        );
        assert_eq!(
            TypeProfile::parse("dark+fairy").unwrap(),
            TypeProfile::dual(Type::Dark, Type::Fairy)
        );
        assert_eq!(
            TypeProfile::parse("fire/sound"),
            Err(ProfileError::UnknownType("sound".to_string()))
        );
    }

    #[test]
    fn serde_round_trips_as_list() {
        let p = TypeProfile::dual(Type::Steel, Type::Ghost);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"["Steel","Ghost"]"#);

        let err = serde_json::from_str::<TypeProfile>("[]");
        assert!(err.is_err());
    }

    #[test]
    fn display_joins_with_slash() {
        assert_eq!(TypeProfile::dual(Type::Grass, Type::Dragon).to_string(), "Grass/Dragon");
        assert_eq!(TypeProfile::single(Type::Ice).to_string(), "Ice");
    }
}
