use battle_core::{
    AccuracyRating, ActionEffect, Battle, BattleAction, BattleError, BattleOutcome, BattlePhase,
    CanBeDamaged, Difficulty, DropEntry, Enemy, EquipmentSlot, ExperienceLedger, FixedRng, Item,
    Player, ScalingStat, Side, Skill, SpeedRating, StatBlock, StatDelta, StatKind,
    TypingPerformance,
};

fn level_one_player() -> Player {
    Player::new("root", 1, StatBlock::default())
}

fn fifty_hp_enemy() -> Enemy {
    Enemy::new("segfault", 1, StatBlock::new(50, 10, 12, 4, 8, 2))
        .with_drop(DropEntry::new("core dump", 100))
}

fn typed(speed: SpeedRating, accuracy: AccuracyRating) -> TypingPerformance {
    TypingPerformance::new(speed, accuracy, Difficulty::new(5).unwrap())
}

fn assert_vitals_clamped(battle: &Battle<'_>) {
    let player = battle.player();
    let enemy = battle.enemy();
    assert!(player.health().current() <= player.health().maximum());
    assert!(player.mana().current() <= player.mana().maximum());
    assert!(enemy.health().current() <= enemy.health().maximum());
    assert!(enemy.mana().current() <= enemy.mana().maximum());
}

#[test]
fn level_one_player_defeats_fifty_hp_enemy() {
    let mut player = level_one_player();
    let mut ledger = ExperienceLedger::new();
    let mut battle = Battle::new(&mut player, fifty_hp_enemy()).with_ledger(&mut ledger);

    battle.start().unwrap();
    assert!(battle.is_active());
    assert_eq!(battle.current_turn_actor(), Ok(Side::Player));

    let perfect = typed(SpeedRating::Fast, AccuracyRating::Perfect);
    let first = battle
        .submit_action(Side::Player, BattleAction::Attack, Some(&perfect))
        .unwrap();
    assert_eq!(first.effect, ActionEffect::Damage { amount: 36 });
    assert_vitals_clamped(&battle);

    battle.run_enemy_turn().unwrap();
    assert_vitals_clamped(&battle);

    let finisher = battle
        .submit_action(Side::Player, BattleAction::Attack, Some(&perfect))
        .unwrap();
    assert!(finisher.target_defeated);
    assert_vitals_clamped(&battle);

    assert_eq!(battle.phase(), BattlePhase::Victory);
    assert_eq!(battle.enemy().health().current(), 0);

    let report = battle.report().unwrap();
    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert_eq!(report.reward_points, 40);
    assert_eq!(report.turns, 3);
    assert_eq!(report.rounds, 2);
    assert!(report.drops_eligible);
    assert_eq!(battle.roll_drops(&FixedRng(500), 7).len(), 1);
    assert_eq!(battle.events().len(), 3);

    drop(battle);
    assert_eq!(ledger.total(), 40);
    assert_eq!(ledger.entries(), 2);
}

#[test]
fn out_of_turn_submission_is_rejected_without_mutation() {
    let mut player = level_one_player();
    let mut battle = Battle::new(&mut player, fifty_hp_enemy());
    battle.start().unwrap();

    let state = battle.state().clone();
    let enemy = battle.enemy().clone();
    let player_vitals = battle.player().vitals();

    let err = battle
        .submit_action(Side::Enemy, BattleAction::Attack, None)
        .unwrap_err();
    assert_eq!(
        err,
        BattleError::NotActorsTurn {
            expected: Side::Player,
            got: Side::Enemy
        }
    );
    assert_eq!(battle.state(), &state);
    assert_eq!(battle.enemy(), &enemy);
    assert_eq!(battle.player().vitals(), player_vitals);
    assert!(battle.events().is_empty());
}

#[test]
fn terminal_battle_rejects_further_turns() {
    let mut player = level_one_player();
    let mut battle = Battle::new(&mut player, fifty_hp_enemy());
    battle.start().unwrap();
    battle
        .submit_action(Side::Player, BattleAction::Flee, None)
        .unwrap();
    assert_eq!(battle.phase(), BattlePhase::Fled);

    let state = battle.state().clone();
    for result in [
        battle.submit_action(
            Side::Player,
            BattleAction::Attack,
            Some(&typed(SpeedRating::Fast, AccuracyRating::Perfect)),
        ),
        battle.run_enemy_turn(),
    ] {
        assert!(matches!(
            result,
            Err(BattleError::InvalidTransition {
                phase: BattlePhase::Fled,
                ..
            })
        ));
    }
    assert!(battle.start().is_err());
    assert!(battle.current_turn_actor().is_err());
    assert_eq!(battle.state(), &state);
}

#[test]
fn weak_player_is_defeated() {
    let mut player = Player::new("guest", 1, StatBlock::new(10, 0, 1, 0, 1, 0));
    let brute = Enemy::new("oom killer", 5, StatBlock::new(500, 0, 30, 50, 20, 0));
    let mut battle = Battle::new(&mut player, brute);
    battle.start().unwrap();

    // Enemy is faster and one-shots the player.
    assert_eq!(battle.current_turn_actor(), Ok(Side::Enemy));
    battle.run_enemy_turn().unwrap();

    assert_eq!(battle.phase(), BattlePhase::Defeat);
    let report = battle.report().unwrap();
    assert_eq!(report.outcome, BattleOutcome::Defeat);
    assert!(!report.drops_eligible);
    drop(battle);
    assert_eq!(player.health().current(), 0);
}

#[test]
fn miss_still_consumes_the_turn() {
    let mut player = level_one_player();
    let mut battle = Battle::new(&mut player, fifty_hp_enemy());
    battle.start().unwrap();

    let outcome = battle
        .submit_action(
            Side::Player,
            BattleAction::Attack,
            Some(&typed(SpeedRating::Miss, AccuracyRating::Perfect)),
        )
        .unwrap();
    assert_eq!(outcome.effect, ActionEffect::Missed);
    assert_eq!(outcome.reward.points(), 0);
    assert_eq!(battle.enemy().health().current(), 50);
    assert_eq!(battle.current_turn_actor(), Ok(Side::Enemy));
}

#[test]
fn equipment_change_reorders_the_next_round_only() {
    let mut player = Player::new("root", 1, StatBlock::new(100, 30, 10, 10, 5, 10));
    let mut battle = Battle::new(&mut player, fifty_hp_enemy());
    battle.start().unwrap();
    assert_eq!(battle.state().order().sides(), [Side::Enemy, Side::Player]);

    battle.run_enemy_turn().unwrap();
    battle.player_equipment_mut().equip(Item::new(
        "running shoes",
        EquipmentSlot::Accessory,
        StatDelta::single(StatKind::Agility, 20),
    ));
    // Current round keeps its order.
    assert_eq!(battle.current_turn_actor(), Ok(Side::Player));
    assert_eq!(battle.calculate_player_action_points(), 2);

    battle
        .submit_action(
            Side::Player,
            BattleAction::Attack,
            Some(&typed(SpeedRating::Slow, AccuracyRating::Good)),
        )
        .unwrap();

    assert_eq!(battle.state().round(), 2);
    assert_eq!(battle.state().order().sides(), [Side::Player, Side::Enemy]);
    assert_eq!(battle.state().action_points_remaining(), 2);
}

#[test]
fn enemy_policy_spends_mana_on_skills() {
    let mut player = level_one_player();
    let caster = Enemy::new("fork bomb", 2, StatBlock::new(80, 12, 6, 9, 20, 0))
        .with_skill(Skill::damage("spawn", 5, 6, ScalingStat::Willpower));
    let mut battle = Battle::new(&mut player, caster);
    battle.start().unwrap();

    let first = battle.run_enemy_turn().unwrap();
    assert_eq!(first.action, BattleAction::Skill(0));
    assert_eq!(first.mana_spent, 5);
    // (9 + 6) − 10
    assert_eq!(first.effect, ActionEffect::Damage { amount: 5 });
    assert_eq!(battle.enemy().mana().current(), 7);
}
