//! End-to-end checks of analysis and ranking on small hand-built rosters.

use std::collections::HashSet;

use team_engine::analysis::shared_weaknesses;
use team_engine::calc::{offensive_coverage, resistances, weaknesses};
use team_engine::{
    analyze_team, dual_multiplier, multiplier, rank_candidates, suggestion_criteria, Candidate,
    Multiplier, RankContext, Reason, SuggestionCriteria, Tier, TierTable, Type, TypeProfile,
};

fn single(t: Type) -> TypeProfile {
    TypeProfile::single(t)
}

fn dual(a: Type, b: Type) -> TypeProfile {
    TypeProfile::dual(a, b)
}

fn rank(
    pool: &[Candidate],
    criteria: &SuggestionCriteria,
    progression: u8,
    tiers: &TierTable,
) -> Vec<String> {
    let none = HashSet::new();
    let ctx = RankContext {
        criteria,
        progression,
        excluded: &none,
        owned: &none,
        tiers,
    };
    rank_candidates(pool, &ctx)
        .into_iter()
        .map(|s| s.candidate.name.into_owned())
        .collect()
}

#[test]
fn dual_type_multipliers_stack() {
    // 2x and 0.5x cancel out
    assert_eq!(dual_multiplier(Type::Ice, &dual(Type::Water, Type::Ground)), Multiplier::NEUTRAL);
    // two 2x make 4x
    assert_eq!(dual_multiplier(Type::Grass, &dual(Type::Water, Type::Ground)), Multiplier::QUADRUPLE);
    // one immunity zeroes the product
    assert_eq!(dual_multiplier(Type::Electric, &dual(Type::Water, Type::Ground)), Multiplier::IMMUNE);
    assert_eq!(multiplier(Type::Normal, Type::Fire), Multiplier::NEUTRAL);
}

#[test]
fn water_ground_pair_shares_grass() {
    let roster = [dual(Type::Water, Type::Ground), dual(Type::Water, Type::Ground)];
    let analysis = analyze_team(&roster);
    assert_eq!(analysis.weaknesses.get(Type::Grass), 2);
    assert_eq!(analysis.weaknesses.get(Type::Electric), 0);
    assert_eq!(analysis.resistances.get(Type::Electric), 2);
    assert_eq!(shared_weaknesses(&analysis), vec![(Type::Grass, 2)]);
}

#[test]
fn grass_and_flying_share_ice() {
    let roster = [single(Type::Grass), single(Type::Flying)];
    let analysis = analyze_team(&roster);
    assert_eq!(analysis.weaknesses.get(Type::Ice), 2);
    assert!(suggestion_criteria(&analysis).resists.contains(&Type::Ice));
}

#[test]
fn electric_and_flying_counted_per_member() {
    let roster = [single(Type::Electric), single(Type::Flying)];
    let analysis = analyze_team(&roster);
    // Ice is neutral on Electric, so only the flyer counts
    assert_eq!(dual_multiplier(Type::Ice, &single(Type::Electric)), Multiplier::NEUTRAL);
    assert_eq!(analysis.weaknesses.get(Type::Ice), 1);
    assert_eq!(analysis.weaknesses.get(Type::Ground), 1);
    assert_eq!(analysis.weaknesses.get(Type::Rock), 1);
    assert!(suggestion_criteria(&analysis).resists.is_empty());
}

#[test]
fn fire_alone_covers_four_types() {
    let analysis = analyze_team(&[single(Type::Fire)]);
    let covered = analysis.offensive_coverage.to_vec();
    assert_eq!(covered, vec![Type::Grass, Type::Ice, Type::Bug, Type::Steel]);
    for t in [Type::Water, Type::Rock, Type::Fire, Type::Dragon] {
        assert!(analysis.missing_coverage.has(t), "{t} should be missing");
    }
    assert_eq!(analysis.missing_coverage.count(), Type::COUNT - 4);
    assert_eq!(offensive_coverage([Type::Fire]), analysis.offensive_coverage);
}

#[test]
fn weakness_and_resistance_ordering() {
    let bug_grass = dual(Type::Bug, Type::Grass);
    let weak = weaknesses(&bug_grass);
    assert_eq!(weak[0], (Type::Fire, Multiplier::QUADRUPLE));
    assert_eq!(weak[1], (Type::Flying, Multiplier::QUADRUPLE));
    assert!(weak[2..].iter().all(|(_, m)| *m == Multiplier::DOUBLE));

    let resisted = resistances(&dual(Type::Water, Type::Ground));
    assert_eq!(resisted[0], (Type::Electric, Multiplier::IMMUNE));
    for pair in resisted.windows(2) {
        assert!(pair[0].1 <= pair[1].1);
    }
}

#[test]
fn progression_gate_controls_eligibility() {
    let pool = [Candidate::new("Gated", single(Type::Fire)).gate(5)];
    let criteria = SuggestionCriteria {
        resists: vec![],
        hits: vec![Type::Grass],
    };
    let tiers = TierTable::default();
    assert!(rank(&pool, &criteria, 3, &tiers).is_empty());
    assert_eq!(rank(&pool, &criteria, 5, &tiers), vec!["Gated"]);
}

#[test]
fn top_tier_exempt_from_gap_suppression() {
    let pool = [
        Candidate::new("Champion", single(Type::Normal)).gate(0),
        Candidate::new("Scrub", single(Type::Normal)).gate(0),
    ];
    let criteria = SuggestionCriteria {
        resists: vec![],
        hits: vec![Type::Dragon],
    };
    let tiers = TierTable::from_lists([(Tier::Uber, ["Champion"]), (Tier::NU, ["Scrub"])]);

    let none = HashSet::new();
    let ctx = RankContext {
        criteria: &criteria,
        progression: 8,
        excluded: &none,
        owned: &none,
        tiers: &tiers,
    };
    let ranked = rank_candidates(&pool, &ctx);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].candidate.name, "Champion");
    assert_eq!(ranked[0].score, 7.5);
    assert_eq!(ranked[0].reasons, vec![Reason::TopPick]);
}

#[test]
fn bundled_data_ranks_a_real_roster() {
    let tiers = TierTable::gen8();
    let analysis = analyze_team(&[single(Type::Fire)]);
    let criteria = suggestion_criteria(&analysis);
    let names = rank(&team_engine::SUGGESTION_POOL, &criteria, 0, &tiers);
    assert_eq!(names.first().map(String::as_str), Some("Wingull"));
    assert!(names.len() <= 10);
}
