//! Property tests for the type calculator, gap analysis and ranking.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::select;

use team_engine::calc::{resistances, weaknesses};
use team_engine::{
    analyze_team, dual_multiplier, multiplier, rank_candidates, suggestion_criteria, Multiplier,
    RankContext, TierTable, Type, TypeProfile, SUGGESTION_POOL,
};

fn any_type() -> impl Strategy<Value = Type> {
    select(Type::ALL.to_vec())
}

fn any_profile() -> impl Strategy<Value = TypeProfile> {
    (any_type(), proptest::option::of(any_type())).prop_map(|(a, b)| match b {
        Some(b) => TypeProfile::dual(a, b),
        None => TypeProfile::single(a),
    })
}

fn any_roster() -> impl Strategy<Value = Vec<TypeProfile>> {
    proptest::collection::vec(any_profile(), 0..=6)
}

proptest! {
    #[test]
    fn single_multiplier_is_a_chart_value(a in any_type(), d in any_type()) {
        let m = multiplier(a, d);
        prop_assert!([Multiplier::IMMUNE, Multiplier::HALF, Multiplier::NEUTRAL, Multiplier::DOUBLE].contains(&m));
    }

    #[test]
    fn dual_multiplier_is_product(a in any_type(), p in any_profile()) {
        let expected: f32 = p.iter().map(|d| multiplier(a, d).as_f32()).product();
        prop_assert_eq!(dual_multiplier(a, &p).as_f32(), expected);
    }

    #[test]
    fn weak_resist_neutral_partition(p in any_profile()) {
        let weak: HashSet<Type> = weaknesses(&p).into_iter().map(|(t, _)| t).collect();
        let resist: HashSet<Type> = resistances(&p).into_iter().map(|(t, _)| t).collect();
        prop_assert!(weak.is_disjoint(&resist));
        for t in Type::ALL {
            let neutral = dual_multiplier(t, &p) == Multiplier::NEUTRAL;
            prop_assert_eq!(weak.contains(&t) as u8 + resist.contains(&t) as u8 + neutral as u8, 1);
        }
    }

    #[test]
    fn analysis_is_deterministic(roster in any_roster()) {
        prop_assert_eq!(analyze_team(&roster), analyze_team(&roster));
    }

    #[test]
    fn counts_bounded_by_roster_size(roster in any_roster()) {
        let analysis = analyze_team(&roster);
        for t in Type::ALL {
            let total = analysis.weaknesses.get(t) as usize + analysis.resistances.get(t) as usize;
            prop_assert!(total <= roster.len());
        }
        prop_assert_eq!(
            analysis.offensive_coverage.count() + analysis.missing_coverage.count(),
            Type::COUNT
        );
    }

    #[test]
    fn adding_a_member_never_shrinks(roster in proptest::collection::vec(any_profile(), 0..6), extra in any_profile()) {
        let before = analyze_team(&roster);
        let mut grown = roster.clone();
        grown.push(extra);
        let after = analyze_team(&grown);

        for t in Type::ALL {
            prop_assert!(after.weaknesses.get(t) >= before.weaknesses.get(t));
            prop_assert!(after.resistances.get(t) >= before.resistances.get(t));
        }
        prop_assert!(after.offensive_coverage.contains(before.offensive_coverage));
    }

    #[test]
    fn ranking_respects_filters(roster in any_roster(), progression in 0u8..=8) {
        let tiers = TierTable::gen8();
        let criteria = suggestion_criteria(&analyze_team(&roster));
        let excluded: HashSet<String> = ["wingull".to_string()].into();
        let owned: HashSet<String> = ["magikarp".to_string()].into();
        let ctx = RankContext {
            criteria: &criteria,
            progression,
            excluded: &excluded,
            owned: &owned,
            tiers: &tiers,
        };
        let ranked = rank_candidates(&SUGGESTION_POOL, &ctx);

        prop_assert!(ranked.len() <= 10);
        for entry in &ranked {
            prop_assert!(entry.score > 0.0);
            prop_assert!(entry.candidate.min_badge.is_some_and(|gate| gate <= progression));
            let key = entry.candidate.name.to_lowercase();
            prop_assert!(key != "wingull" && key != "magikarp");
        }
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].candidate.name <= pair[1].candidate.name)
            );
        }
    }
}
