//! Property-based tests for stat derivation, damage and battle flow.

use proptest::prelude::*;

use hero_clash::core::GameRng;
use hero_clash::engagement::Engagement;
use hero_clash::fighter::{Alignment, AttackKind, Attributes, Fighter, FighterProfile, Status};
use hero_clash::roster::{Roster, TeamAlignment};

fn attributes() -> impl Strategy<Value = Attributes> {
    prop::array::uniform6(0u32..=100).prop_map(|[combat, durability, intelligence, power, speed, strength]| {
        Attributes {
            combat,
            durability,
            intelligence,
            power,
            speed,
            strength,
        }
    })
}

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![Just(Alignment::Good), Just(Alignment::Bad), Just(Alignment::Neutral)]
}

fn affinity() -> impl Strategy<Value = f64> {
    (1u32..=10, any::<bool>()).prop_map(|(roll, boost)| {
        let roll = f64::from(roll);
        if boost {
            roll
        } else {
            roll.recip()
        }
    })
}

fn derived(attributes: Attributes, stamina: u32, affinity: f64) -> Fighter {
    let mut fighter = Fighter::with_stamina(FighterProfile::new("Subject", Alignment::Good, attributes), stamina);
    fighter.assign_affinity(affinity);
    fighter.derive_all();
    fighter
}

proptest! {
    /// Hit points follow the formula on the derived attributes.
    #[test]
    fn prop_hit_points_formula(raw in attributes(), stamina in 0u32..=10, affinity in affinity()) {
        let fighter = derived(raw, stamina, affinity);
        let a = fighter.attributes();
        let pool = f64::from(a.strength) * 0.8 + f64::from(a.durability) * 0.7 + f64::from(a.power);
        let expected = (pool / 2.0 * (1.0 + f64::from(stamina) / 10.0)).floor() + 100.0;

        prop_assert_eq!(fighter.hit_points(), expected);
        prop_assert!(fighter.hit_points() >= 100.0);
    }

    /// Derived attributes never depend on how often they are derived.
    #[test]
    fn prop_derivation_is_stable(raw in attributes(), stamina in 0u32..=10, affinity in affinity()) {
        let mut fighter = derived(raw, stamina, affinity);
        let attributes = *fighter.attributes();
        let attacks = fighter.attacks().copied();

        fighter.derive_all();
        prop_assert_eq!(fighter.attributes(), &attributes);
        prop_assert_eq!(fighter.attacks().copied(), attacks);
        prop_assert_eq!(fighter.raw_attributes(), &raw);
    }

    /// Exactly three attack values, each non-negative.
    #[test]
    fn prop_attacks(raw in attributes(), stamina in 0u32..=10, affinity in affinity()) {
        let fighter = derived(raw, stamina, affinity);
        let attacks = fighter.attacks().unwrap();

        prop_assert_eq!(attacks.len(), 3);
        for kind in AttackKind::ALL {
            prop_assert!(fighter.attack_damage(kind) >= 0.0);
            prop_assert_eq!(fighter.attack_damage(kind), attacks[kind]);
        }
    }

    /// Damage never takes hit points below zero, and never raises them.
    #[test]
    fn prop_damage_clamps(start in 100u32..5000, hits in prop::collection::vec(0.0f64..2000.0, 1..20)) {
        let attributes = Attributes { strength: start, ..Attributes::default() };
        let mut fighter = derived(attributes, 0, 1.0);

        let mut previous = fighter.hit_points();
        for hit in hits {
            fighter.apply_damage(hit);
            fighter.refresh_status();

            prop_assert!(fighter.hit_points() >= 0.0);
            prop_assert!(fighter.hit_points() <= previous);
            prop_assert_eq!(fighter.status() == Status::Defeated, fighter.hit_points() == 0.0);
            prop_assert_eq!(fighter.is_alive(), fighter.hit_points() > 0.0);
            previous = fighter.hit_points();
        }
    }

    /// A roster is good exactly when at least three members are good.
    #[test]
    fn prop_roster_alignment(alignments in prop::array::uniform5(alignment())) {
        let fighters = alignments
            .iter()
            .enumerate()
            .map(|(i, &a)| Fighter::with_stamina(FighterProfile::new(format!("F{i}"), a, Attributes::default()), 0))
            .collect();
        let mut roster = Roster::new(fighters).unwrap();

        let good = alignments.iter().filter(|&&a| a == Alignment::Good).count();
        let expected = if good >= 3 { TeamAlignment::Good } else { TeamAlignment::Bad };
        prop_assert_eq!(roster.compute_alignment(), expected);
    }

    /// Affinity boosts matching fighters and penalises the rest.
    #[test]
    fn prop_affinity_direction(alignments in prop::array::uniform5(alignment()), seed in any::<u64>()) {
        let fighters = alignments
            .iter()
            .enumerate()
            .map(|(i, &a)| Fighter::with_stamina(FighterProfile::new(format!("F{i}"), a, Attributes::default()), 0))
            .collect();
        let roster = Roster::assemble(fighters, &mut GameRng::new(seed)).unwrap();
        let team = roster.alignment().unwrap();

        for fighter in roster.fighters() {
            let affinity = fighter.affinity().unwrap();
            if team.matches(fighter.alignment()) {
                prop_assert!((1.0..=10.0).contains(&affinity));
            } else {
                prop_assert!((0.1..=1.0).contains(&affinity));
            }
        }
    }

    /// Battles between fighting rosters always end with one side standing.
    #[test]
    fn prop_battle_terminates(
        player in prop::array::uniform5(attributes()),
        cpu in prop::array::uniform5(attributes()),
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let build = |stats: [Attributes; 5], rng: &mut GameRng| {
            let fighters = stats
                .iter()
                .enumerate()
                .map(|(i, &a)| {
                    // Keep every fighter able to hurt somebody
                    let a = Attributes { intelligence: a.intelligence.max(1), speed: a.speed.max(1), ..a };
                    Fighter::new(FighterProfile::new(format!("F{i}"), Alignment::Good, a), &mut *rng)
                })
                .collect();
            Roster::assemble(fighters, rng).unwrap()
        };
        let player = build(player, &mut rng);
        let cpu = build(cpu, &mut rng);
        let mut battle = Engagement::new(player, cpu, rng.fork()).unwrap();

        let outcome = battle.run_automated(1_000_000, |b| b.attacker_choices().len()).unwrap();
        let winner = outcome.winner().unwrap();
        prop_assert!(battle.roster(winner.opponent()).is_defeated());
        prop_assert!(!battle.roster(winner).is_defeated());
        prop_assert!(battle.turn_count() >= 8);
    }
}
