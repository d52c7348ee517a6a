#![cfg(feature = "serde")]

use battle_core::{
    AccuracyRating, Battle, BattleAction, BattleData, BattlePhase, CanBeDamaged, Difficulty, Enemy,
    EquipmentSlot, GradingThresholds, Item, Player, Side, SnapshotError, SpeedRating, StatBlock,
    StatDelta, StatKind, TypingChallenge, TypingPerformance,
};

fn player() -> Player {
    Player::new("root", 1, StatBlock::default())
}

fn enemy() -> Enemy {
    Enemy::new("segfault", 1, StatBlock::new(50, 10, 12, 4, 8, 2))
}

fn mid_battle_snapshot() -> BattleData {
    let mut player = player();
    let mut battle = Battle::new(&mut player, enemy());
    battle.start().unwrap();
    battle
        .submit_action(
            Side::Player,
            BattleAction::Attack,
            Some(&TypingPerformance::new(
                SpeedRating::Fast,
                AccuracyRating::Perfect,
                Difficulty::new(5).unwrap(),
            )),
        )
        .unwrap();
    battle
        .set_challenge(TypingChallenge::for_word("segfault", 3000).unwrap())
        .unwrap();
    battle.snapshot().unwrap()
}

#[test]
fn snapshot_uses_save_file_field_names() {
    let data = mid_battle_snapshot();
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["enemyName"], "segfault");
    assert_eq!(json["enemyHealth"], 14);
    assert_eq!(json["enemyMaxHealth"], 50);
    assert_eq!(json["currentChallenge"]["word"], "segfault");
    assert_eq!(json["currentChallenge"]["timeLimit"], 3000);
    assert_eq!(json["currentChallenge"]["difficulty"], 2);
}

#[test]
fn minimal_save_record_restores_at_round_start() {
    let data: BattleData = serde_json::from_str(
        r#"{ "enemyName": "segfault", "enemyHealth": 20, "enemyMaxHealth": 50 }"#,
    )
    .unwrap();
    assert_eq!(data.round, 1);
    assert!(data.current_challenge.is_none());

    let mut player = player();
    let battle = Battle::restore(&mut player, enemy(), &data).unwrap();
    assert_eq!(battle.phase(), BattlePhase::Active);
    assert_eq!(battle.enemy().health().current(), 20);
    assert_eq!(battle.current_turn_actor(), Ok(Side::Player));
}

#[test]
fn restored_battle_matches_the_original() {
    let mut original_player = player();
    let mut original = Battle::new(&mut original_player, enemy());
    original.start().unwrap();
    original
        .submit_action(
            Side::Player,
            BattleAction::Attack,
            Some(&TypingPerformance::new(
                SpeedRating::Normal,
                AccuracyRating::Good,
                Difficulty::new(3).unwrap(),
            )),
        )
        .unwrap();

    let bytes = original.snapshot().unwrap().to_bytes().unwrap();
    let data = BattleData::from_bytes(&bytes).unwrap();

    let mut restored_player = player();
    let restored = Battle::restore(&mut restored_player, enemy(), &data).unwrap();

    assert_eq!(restored.state(), original.state());
    assert_eq!(restored.enemy(), original.enemy());
    assert_eq!(restored.current_turn_actor(), Ok(Side::Enemy));
    assert_eq!(restored.state().reward_points(), 4);
}

#[test]
fn restore_rejects_mismatched_enemies() {
    let mut player = player();

    let wrong_name = BattleData::new("kernel panic", 20, 50);
    assert!(matches!(
        Battle::restore(&mut player, enemy(), &wrong_name),
        Err(SnapshotError::EnemyMismatch { .. })
    ));

    let wrong_max = BattleData::new("segfault", 20, 80);
    assert_eq!(
        Battle::restore(&mut player, enemy(), &wrong_max).err(),
        Some(SnapshotError::MaxHealthMismatch {
            saved: 80,
            actual: 50
        })
    );

    let dead = BattleData::new("segfault", 0, 50);
    assert!(matches!(
        Battle::restore(&mut player, enemy(), &dead),
        Err(SnapshotError::EnemyHealthOutOfRange { .. })
    ));

    let mut past_end = BattleData::new("segfault", 20, 50);
    past_end.turn_position = 2;
    assert_eq!(
        Battle::restore(&mut player, enemy(), &past_end).err(),
        Some(SnapshotError::InvalidTurnPosition { position: 2 })
    );
}

#[test]
fn restore_keeps_the_round_order_after_a_mid_round_equipment_change() {
    let mut player = player();
    let speedy = || Enemy::new("segfault", 1, StatBlock::new(50, 10, 12, 4, 15, 2));

    let (saved, live_state) = {
        let mut battle = Battle::new(&mut player, speedy());
        battle.start().unwrap();
        assert_eq!(battle.state().order().sides(), [Side::Enemy, Side::Player]);
        battle.run_enemy_turn().unwrap();

        battle.player_equipment_mut().equip(Item::new(
            "running shoes",
            EquipmentSlot::Accessory,
            StatDelta::single(StatKind::Agility, 20),
        ));
        assert_eq!(battle.current_turn_actor(), Ok(Side::Player));
        (battle.snapshot().unwrap(), battle.state().clone())
    };
    assert_eq!(saved.turn_order, Some(vec![Side::Enemy, Side::Player]));

    let bytes = saved.to_bytes().unwrap();
    let data = BattleData::from_bytes(&bytes).unwrap();
    let restored = Battle::restore(&mut player, speedy(), &data).unwrap();

    assert_eq!(restored.current_turn_actor(), Ok(Side::Player));
    assert_eq!(restored.state(), &live_state);
}

#[test]
fn restore_rejects_a_malformed_turn_order() {
    let mut player = player();
    let mut data = BattleData::new("segfault", 20, 50);
    data.turn_order = Some(vec![Side::Enemy, Side::Enemy]);
    assert_eq!(
        Battle::restore(&mut player, enemy(), &data).err(),
        Some(SnapshotError::InvalidTurnOrder)
    );
}

#[test]
fn saved_challenges_are_validated_on_load() {
    let with_challenge = |challenge: &str| {
        format!(
            r#"{{ "enemyName": "segfault", "enemyHealth": 20, "enemyMaxHealth": 50,
                 "currentChallenge": {challenge} }}"#
        )
    };

    for invalid in [
        r#"{ "word": "grep", "timeLimit": 0, "difficulty": 1 }"#,
        r#"{ "word": "", "timeLimit": 3000, "difficulty": 1 }"#,
        r#"{ "word": "grep", "timeLimit": 3000, "difficulty": 0 }"#,
    ] {
        assert!(serde_json::from_str::<BattleData>(&with_challenge(invalid)).is_err());
    }

    let data: BattleData = serde_json::from_str(&with_challenge(
        r#"{ "word": "grep", "timeLimit": 3000, "difficulty": 1 }"#,
    ))
    .unwrap();
    let mut player = player();
    let battle = Battle::restore(&mut player, enemy(), &data).unwrap();
    let challenge = battle.current_challenge().unwrap();
    let graded = challenge.grade("grep", 0, &GradingThresholds::default());
    assert_eq!(graded.speed, SpeedRating::Fast);
}

#[test]
fn corrupt_bytes_fail_to_decode() {
    assert!(matches!(
        BattleData::from_bytes(&[0xff, 0x01]),
        Err(SnapshotError::Decode(_))
    ));
}
