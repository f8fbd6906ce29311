//! Combat integration tests
//!
//! Drive whole encounters through `Combat` and check the observable
//! contract: events, phases and the final `CombatResult`.

use fate_combat::cards::{BalancePole, Card, CardAbility, DamageType};
use fate_combat::combat::{
    Combat, CombatEvent, CombatOutcome, CombatPhase, VictoryKind,
};
use fate_combat::content::{load_encounter, EncounterDefinition, EnemyDefinition, PlayerDefinition};
use fate_combat::core::CombatError;
use fate_combat::entity::{DiplomacyTrack, Intent, StatusKind};
use fate_combat::fate::{FateCard, FateKeyword, FateSuit};

fn player(strength: i32, health: i32, deck: Vec<Card>) -> PlayerDefinition {
    PlayerDefinition {
        name: "Vasilisa".into(),
        strength,
        health,
        energy: 3,
        deck,
    }
}

fn enemy(name: &str, health: i32, defense: i32, will: Option<i32>) -> EnemyDefinition {
    EnemyDefinition {
        name: name.into(),
        health,
        power: 3,
        defense,
        will,
        // Healing at full health changes nothing, so these enemies are inert
        pattern: vec![Intent::Heal(1)],
        faith_reward: 0,
        loot_card_ids: Vec::new(),
    }
}

fn zero_fate() -> Vec<FateCard> {
    vec![FateCard::new("blank", 0)]
}

fn start(definition: EncounterDefinition) -> Combat {
    let mut combat = Combat::new(definition).unwrap();
    combat.begin_combat().unwrap();
    combat
}

fn health_of(combat: &Combat, entity: fate_combat::core::EntityId) -> i32 {
    combat.world().health.get(entity).unwrap().current()
}

/// Enemy health 10, defense 3, strength 5, neutral fate card: hit for 3
#[test]
fn test_plain_attack_hits_for_margin_plus_one() {
    let definition = EncounterDefinition::new(
        11,
        player(5, 20, Vec::new()),
        vec![enemy("boar", 10, 3, None)],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);
    let boar = combat.enemies()[0];

    let events = combat.commit_attack().unwrap();
    assert_eq!(events.len(), 1);
    match &events[0] {
        CombatEvent::PlayerAttacked {
            target,
            total,
            defense,
            damage,
            ..
        } => {
            assert_eq!(*target, boar);
            assert_eq!(*total, 5);
            assert_eq!(*defense, 3);
            assert_eq!(*damage, 3);
        }
        other => panic!("expected a hit, got {:?}", other),
    }
    assert_eq!(health_of(&combat, boar), 7);
}

/// Will 1, strength 10: one influence pacifies, health untouched
#[test]
fn test_single_influence_pacifies() {
    let definition = EncounterDefinition::new(
        12,
        player(10, 20, Vec::new()),
        vec![enemy("rusalka", 10, 0, Some(1))],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);
    let rusalka = combat.enemies()[0];

    combat.influence().unwrap();
    let health = combat.world().health.get(rusalka).unwrap();
    assert_eq!(health.will_current(), Some(0));
    assert_eq!(health.current(), 10);

    combat.end_turn().unwrap();
    assert!(combat.is_over());
    assert_eq!(combat.phase(), CombatPhase::Victory);
    let result = combat.result().unwrap();
    assert_eq!(result.outcome, CombatOutcome::Victory(VictoryKind::Pacified));
    assert_eq!(result.resonance_delta, 5.0);
}

/// A cost-5 card against 3 energy is rejected with nothing staged
#[test]
fn test_over_budget_selection_changes_nothing() {
    let deck = vec![Card::new("avalanche", 5).with_power(10)];
    let definition = EncounterDefinition::new(
        13,
        player(1, 20, deck),
        vec![enemy("troll", 30, 0, None)],
    );
    let mut combat = start(definition);

    assert!(!combat.select_card("avalanche"));
    assert!(combat.selection().is_empty());
    assert_eq!(combat.reserved_energy(), 0);
    assert_eq!(combat.energy(), 3);
}

#[test]
fn test_selection_budget_tracks_reservations() {
    let deck = vec![
        Card::new("jab", 1).with_power(1),
        Card::new("hook", 2).with_power(2),
        Card::new("cross", 1).with_power(1),
    ];
    let definition = EncounterDefinition::new(
        14,
        player(1, 20, deck),
        vec![enemy("troll", 30, 0, None)],
    );
    let mut combat = start(definition);

    assert!(combat.select_card("jab"));
    assert!(combat.select_card("hook"));
    assert_eq!(combat.reserved_energy(), 3);
    assert!(!combat.select_card("cross"));
    assert!(!combat.select_card("jab"));

    assert!(combat.deselect_card("hook"));
    assert!(combat.select_card("cross"));
    assert_eq!(combat.reserved_energy(), 2);

    combat.end_turn().unwrap();
    assert_eq!(combat.reserved_energy(), 0);
    assert!(combat.selection().is_empty());
}

#[test]
fn test_matching_suit_doubles_keyword() {
    let run = |suit: FateSuit| {
        let fate = vec![FateCard::new("surge", 0)
            .with_suit(suit)
            .with_keyword(FateKeyword::Surge)];
        let definition = EncounterDefinition::new(
            15,
            player(2, 20, Vec::new()),
            vec![enemy("boar", 30, 0, None)],
        )
        .with_fate_deck(fate);
        let mut combat = start(definition);
        match combat.commit_attack().unwrap().remove(0) {
            CombatEvent::PlayerAttacked { total, .. } => total,
            other => panic!("expected a hit, got {:?}", other),
        }
    };

    // base surge is +2 on a physical attack
    assert_eq!(run(FateSuit::Nav), 2 + 4);
    assert_eq!(run(FateSuit::Prav), 2);
    assert_eq!(run(FateSuit::Yav), 2);
}

#[test]
fn test_resonance_zone_rules_shift_fate_value() {
    let fate = vec![FateCard::new("crossroads", 0).with_rule(
        fate_combat::fate::ResonanceZone::DeepNav,
        -3,
    )];
    let definition = EncounterDefinition::new(
        16,
        player(5, 20, Vec::new()),
        vec![enemy("boar", 30, 0, None)],
    )
    .with_fate_deck(fate)
    .with_resonance(-80.0);
    let mut combat = start(definition);

    let event = combat.commit_attack().unwrap().remove(0);
    assert!(matches!(event, CombatEvent::PlayerAttacked { total: 2, .. }));
}

#[test]
fn test_track_switching_bonuses_and_decay() {
    let definition = EncounterDefinition::new(
        17,
        player(5, 20, Vec::new()),
        vec![enemy("domovoi", 40, 1, Some(40))],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);
    let me = combat.player();

    // physical -> spiritual: surprise 3 lands on the same influence
    let influenced = combat.influence().unwrap().remove(0);
    assert!(matches!(
        influenced,
        CombatEvent::PlayerInfluenced {
            total: 8,
            will_damage: 8,
            track_switched: true,
            ..
        }
    ));

    // spiritual -> physical: rage shield raises defense to 1 + 3
    let attacked = combat.commit_attack().unwrap().remove(0);
    assert!(matches!(attacked, CombatEvent::PlayerAttacked { defense: 4, .. }));
    let diplomacy = *combat.world().diplomacy.get(me).unwrap();
    assert_eq!(diplomacy.track, DiplomacyTrack::Physical);
    assert_eq!(diplomacy.surprise_bonus, 3);
    assert_eq!(diplomacy.rage_shield, 3);

    combat.end_turn().unwrap();
    combat.resolve_enemy_turn().unwrap();
    let diplomacy = *combat.world().diplomacy.get(me).unwrap();
    assert_eq!(diplomacy.surprise_bonus, 2);
    assert_eq!(diplomacy.rage_shield, 2);
}

#[test]
fn test_influence_without_will_is_no_op() {
    let definition = EncounterDefinition::new(
        18,
        player(5, 20, Vec::new()),
        vec![enemy("wolf", 10, 0, None)],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);
    let wolf = combat.enemies()[0];

    let events = combat.influence().unwrap();
    assert_eq!(events, vec![CombatEvent::InfluenceNotAvailable { target: wolf }]);
    assert!(events[0].is_no_op());
    assert_eq!(combat.world().fate_deck.remaining(), 1);
}

#[test]
fn test_exhausted_card_never_returns() {
    let deck = vec![
        Card::new("flare", 1)
            .exhausting()
            .with_ability(CardAbility::ShiftBalance {
                pole: BalancePole::Light,
                amount: 5,
            }),
        Card::new("a", 1),
        Card::new("b", 1),
        Card::new("c", 1),
    ];
    let definition = EncounterDefinition::new(
        19,
        player(1, 20, deck),
        vec![enemy("stone", 99, 0, None)],
    );
    let mut combat = start(definition);

    let events = combat.play_card("flare").unwrap();
    assert!(matches!(events[0], CombatEvent::CardPlayed { exhausted: true, .. }));
    assert_eq!(combat.resonance(), 5.0);

    for _ in 0..8 {
        let ids: Vec<String> = combat.hand().iter().map(|c| c.id.clone()).collect();
        for id in ids {
            combat.play_card(&id).unwrap();
        }
        combat.end_turn().unwrap();
        combat.resolve_enemy_turn().unwrap();

        let deck = combat.deck().unwrap();
        assert!(deck.hand.iter().all(|c| c.id != "flare"));
        assert!(deck.draw_pile.iter().all(|c| c.id != "flare"));
        assert!(deck.discard_pile.iter().all(|c| c.id != "flare"));
        assert_eq!(deck.exhaust_pile.len(), 1);
        assert_eq!(deck.total_cards(), 4);
    }
}

#[test]
fn test_shield_absorbs_after_fate_mitigation() {
    let deck = vec![Card::new("guard", 1).with_ability(CardAbility::TemporaryStat {
        stat: StatusKind::Shield,
        amount: 4,
        duration: 1,
    })];
    let mut foe = enemy("bear", 30, 0, None);
    foe.pattern = vec![Intent::Attack(6)];
    let definition = EncounterDefinition::new(20, player(1, 20, deck), vec![foe])
        .with_fate_deck(vec![FateCard::new("steady", 1)]);
    let mut combat = start(definition);
    let me = combat.player();

    combat.play_card("guard").unwrap();
    combat.end_turn().unwrap();
    let events = combat.resolve_enemy_turn().unwrap();

    assert!(matches!(
        events[0],
        CombatEvent::EnemyAttacked {
            amount: 6,
            mitigation: 1,
            absorbed: 4,
            damage: 1,
            evaded: false,
            ..
        }
    ));
    assert_eq!(health_of(&combat, me), 19);
    assert_eq!(combat.world().statuses.get(me).unwrap().amount(StatusKind::Shield), 0);
}

#[test]
fn test_poison_can_decide_the_round() {
    let deck = vec![Card::new("nettle", 1).with_ability(CardAbility::TemporaryStat {
        stat: StatusKind::Poison,
        amount: 3,
        duration: 2,
    })];
    let definition = EncounterDefinition::new(
        21,
        player(1, 20, deck),
        vec![enemy("sprite", 3, 0, None)],
    );
    let mut combat = start(definition);

    combat.play_card("nettle").unwrap();
    combat.end_turn().unwrap();
    let events = combat.resolve_enemy_turn().unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::StatusTicked { poison_damage: 3, .. })));
    assert_eq!(
        events.last(),
        Some(&CombatEvent::CombatEnded {
            outcome: CombatOutcome::Victory(VictoryKind::Killed)
        })
    );
    assert_eq!(combat.result().unwrap().rounds, 2);
}

#[test]
fn test_defeat_has_no_rewards() {
    let mut foe = enemy("koschei", 50, 5, None);
    foe.pattern = vec![Intent::Attack(12)];
    foe.faith_reward = 9;
    foe.loot_card_ids = vec!["needle".into()];
    let definition = EncounterDefinition::new(22, player(1, 10, Vec::new()), vec![foe])
        .with_fate_deck(zero_fate());
    let mut combat = start(definition);

    combat.end_turn().unwrap();
    combat.resolve_enemy_turn().unwrap();

    assert_eq!(combat.phase(), CombatPhase::Defeat);
    let result = combat.result().unwrap();
    assert_eq!(result.outcome, CombatOutcome::Defeat);
    assert_eq!(result.resonance_delta, 0.0);
    assert_eq!(result.faith_delta, 0);
    assert!(result.loot_card_ids.is_empty());
    assert_eq!(result.player_health, 0);
    assert!(matches!(
        combat.resolve_enemy_turn(),
        Err(CombatError::WrongPhase { .. })
    ));
}

#[test]
fn test_all_pacified_sums_rewards() {
    let mut first = enemy("vila", 5, 0, Some(1));
    first.faith_reward = 2;
    first.loot_card_ids = vec!["feather".into()];
    let mut second = enemy("kikimora", 5, 0, Some(1));
    second.faith_reward = 4;
    second.loot_card_ids = vec!["spindle".into()];
    let definition = EncounterDefinition::new(23, player(10, 20, Vec::new()), vec![first, second])
        .with_fate_deck(zero_fate());
    let mut combat = start(definition);
    let enemies = combat.enemies();

    combat.influence().unwrap();
    assert!(!combat.is_over());
    assert_eq!(combat.target(), Some(enemies[0]));

    // The pacified first enemy hands the target over
    combat.influence().unwrap();
    assert_eq!(combat.target(), Some(enemies[1]));

    let result = combat.result().unwrap();
    assert_eq!(result.outcome, CombatOutcome::Victory(VictoryKind::Pacified));
    assert_eq!(result.faith_delta, 6);
    assert_eq!(
        result.loot_card_ids,
        vec!["feather".to_string(), "spindle".to_string()]
    );
}

#[test]
fn test_any_kill_makes_victory_killed() {
    let deck = vec![Card::new("axe", 1).with_power(30)];
    let definition = EncounterDefinition::new(
        24,
        player(10, 20, deck),
        vec![enemy("vila", 5, 0, Some(1)), enemy("kikimora", 5, 0, Some(1))],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);
    let enemies = combat.enemies();

    combat.select_target(enemies[1]).unwrap();
    combat.play_card("axe").unwrap();
    assert!(combat.world().health.get(enemies[1]).unwrap().is_dead());
    assert_eq!(
        combat.select_target(enemies[1]),
        Err(CombatError::NoTarget)
    );

    combat.influence().unwrap();
    assert_eq!(
        combat.result().unwrap().outcome,
        CombatOutcome::Victory(VictoryKind::Killed)
    );
}

#[test]
fn test_mental_card_drains_will() {
    let deck = vec![Card::new("rebuke", 2).with_ability(CardAbility::Damage {
        amount: 4,
        damage_type: DamageType::Mental,
    })];
    let definition = EncounterDefinition::new(
        25,
        player(1, 20, deck),
        vec![enemy("domovoi", 10, 0, Some(3))],
    );
    let mut combat = start(definition);

    let events = combat.play_card("rebuke").unwrap();
    assert!(matches!(
        events[0],
        CombatEvent::CardPlayed {
            will_damage: 3,
            damage: 0,
            ..
        }
    ));
    assert_eq!(
        combat.result().unwrap().outcome,
        CombatOutcome::Victory(VictoryKind::Pacified)
    );
}

#[test]
fn test_commit_skips_attack_when_cards_finish_target() {
    let deck = vec![Card::new("hex", 1).with_ability(CardAbility::Damage {
        amount: 5,
        damage_type: DamageType::Mental,
    })];
    let definition = EncounterDefinition::new(
        26,
        player(1, 20, deck),
        vec![enemy("wisp", 8, 0, Some(5))],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);

    assert!(combat.select_card("hex"));
    let events = combat.commit_attack().unwrap();
    assert!(events
        .iter()
        .all(|e| !matches!(e, CombatEvent::PlayerAttacked { .. } | CombatEvent::PlayerMissed { .. })));
    assert_eq!(combat.world().fate_deck.remaining(), 1);
    assert!(combat.is_over());
}

#[test]
fn test_log_matches_returned_events() {
    let definition = EncounterDefinition::new(
        27,
        player(3, 20, Vec::new()),
        vec![enemy("boar", 30, 1, None)],
    )
    .with_fate_deck(zero_fate());
    let mut combat = start(definition);

    let mut returned = combat.commit_attack().unwrap();
    combat.end_turn().unwrap();
    returned.extend(combat.resolve_enemy_turn().unwrap());

    let logged: Vec<CombatEvent> = combat.log().events.iter().map(|e| e.event.clone()).collect();
    assert_eq!(logged, returned);
    let ids: Vec<u32> = combat.log().events.iter().map(|e| e.id).collect();
    assert_eq!(ids, (0..returned.len() as u32).collect::<Vec<_>>());
}

#[test]
fn test_sample_encounter_runs_to_completion() {
    let definition = load_encounter("data/encounters/leshy_grove.toml").unwrap();
    let mut combat = start(definition);

    while !combat.is_over() && combat.round() <= 60 {
        let ids: Vec<String> = combat.hand().iter().map(|c| c.id.clone()).collect();
        for id in &ids {
            combat.select_card(id);
        }
        combat.commit_attack().unwrap();
        combat.end_turn().unwrap();
        if combat.phase() == CombatPhase::EnemyResolve {
            combat.resolve_enemy_turn().unwrap();
        }
    }

    assert!(combat.is_over());
    let result = combat.result().unwrap();
    assert_eq!(result.rounds, combat.round());
    assert_eq!(result.fate_deck_state.draw_pile.len() + result.fate_deck_state.discard_pile.len(), 8);
}
