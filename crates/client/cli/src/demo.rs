//! Scripted demo battle.
//!
//! A seeded typist produces typing attempts in place of a keyboard, so the
//! same seed always replays the same battle.
use std::fmt;

use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_core::{
    ActionEffect, ActionOutcome, Battle, BattleAction, BattleData, BattleReport, CanAct,
    CanBeDamaged, EquipmentSlot, ExperienceLedger, PcgRng, Player, RngOracle, ScalingStat, Side,
    Skill, StatBlock, TypingChallenge, compute_seed,
};

use crate::config::CliConfig;

/// Player health percent at or below which the script stops attacking.
const LOW_HEALTH_PERCENT: u32 = 30;
/// Chance of a fumbled keystroke per attempt.
const TYPO_PER_MILLE: u32 = 150;
/// Turn cap after which the script gives up and flees.
const MAX_TURNS: u32 = 500;

/// Produces deterministic typing attempts.
#[derive(Clone, Debug)]
pub struct ScriptedTypist {
    seed: u64,
    attempts: u32,
}

impl ScriptedTypist {
    pub fn new(seed: u64) -> Self {
        Self { seed, attempts: 0 }
    }

    /// Returns the typed text and elapsed milliseconds for one attempt.
    ///
    /// Elapsed time falls between 20% and 110% of the limit, so some attempts
    /// run out of time.
    pub fn attempt(&mut self, challenge: &TypingChallenge) -> (String, u64) {
        let rng = PcgRng;
        let limit = u32::try_from(challenge.time_limit_ms()).unwrap_or(u32::MAX);
        let timing_seed = compute_seed(self.seed, self.attempts, Side::Player.index(), 0);
        let typo_seed = compute_seed(self.seed, self.attempts, Side::Player.index(), 1);
        self.attempts += 1;

        let elapsed = rng.range(timing_seed, limit / 5, limit.saturating_add(limit / 10));

        let mut typed = challenge.word().to_owned();
        if rng.roll_per_mille(typo_seed) <= TYPO_PER_MILLE {
            typed.pop();
            typed.push('#');
        }
        (typed, u64::from(elapsed))
    }
}

/// Heals when low, otherwise uses the first affordable damaging skill.
pub fn choose_player_action(player: &Player) -> BattleAction {
    let mana = player.mana().current();
    let affordable = |wanted: fn(&Skill) -> bool| {
        player
            .skills()
            .iter()
            .position(|skill| wanted(skill) && skill.mana_cost <= mana)
    };

    if player.health().percent() <= LOW_HEALTH_PERCENT {
        return match affordable(|skill| skill.effect.is_heal()) {
            Some(index) => BattleAction::Skill(index),
            None => BattleAction::Defend,
        };
    }
    match affordable(|skill| skill.effect.damage_power().is_some()) {
        Some(index) => BattleAction::Skill(index),
        None => BattleAction::Attack,
    }
}

/// Builds the demo character and outfits it from the item catalog.
fn build_player(name: &str, factory: &ContentFactory) -> Result<Player> {
    let items = factory.load_items()?;
    let mut player = Player::new(name, 1, StatBlock::default())
        .with_skill(Skill::damage("rm -rf", 6, 8, ScalingStat::Strength))
        .with_skill(Skill::heal("fsck", 8, 25))
        .with_skill(Skill::drain("sudo !!", 5, 6));

    for slot in [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Accessory,
    ] {
        if let Some(item) = items.first_for_slot(slot) {
            player.equipment_mut().equip(item.clone());
        }
    }
    // Equipment may raise the maximums the player was created with.
    player.restore_full();
    Ok(player)
}

/// Result of one scripted battle.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub transcript: Vec<String>,
    pub report: BattleReport,
    pub drops: Vec<String>,
    pub ledger_total: u64,
    pub checkpoints: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.transcript {
            writeln!(f, "{line}")?;
        }
        writeln!(
            f,
            "{} against {} after {} rounds ({} turns)",
            self.report.outcome, self.report.enemy_name, self.report.rounds, self.report.turns
        )?;
        writeln!(f, "EX earned: {}", self.report.reward_points)?;
        if self.drops.is_empty() {
            writeln!(f, "Drops: none")?;
        } else {
            writeln!(f, "Drops: {}", self.drops.join(", "))?;
        }
        write!(f, "Ledger total: {}", self.ledger_total)
    }
}

fn describe(outcome: &ActionOutcome) -> String {
    let effect = match outcome.effect {
        ActionEffect::Damage { amount } => format!("deals {amount} damage"),
        ActionEffect::Heal { amount } => format!("restores {amount} health"),
        ActionEffect::Drain { damage, healed } => {
            format!("drains {damage} health and recovers {healed}")
        }
        ActionEffect::Guard => "raises a guard".to_owned(),
        ActionEffect::Missed => "misses".to_owned(),
        ActionEffect::Fled => "flees".to_owned(),
    };
    let rating = outcome
        .performance
        .map(|performance| format!(" [{} / {}]", performance.speed, performance.accuracy))
        .unwrap_or_default();
    format!(
        "{}: {} {}{rating}",
        outcome.actor,
        outcome.action.as_str(),
        effect
    )
}

/// Runs one battle against the configured (or seed-picked) enemy.
pub fn run(config: &CliConfig) -> Result<RunSummary> {
    let factory = ContentFactory::new(&config.data_dir);
    let battle_config = factory.load_config()?;
    let enemies = factory.load_enemies()?;
    let words = factory.load_words()?;

    let enemy_name = match &config.enemy {
        Some(name) => name.clone(),
        None => {
            let names: Vec<&str> = enemies.names().collect();
            let index = PcgRng.range(config.seed, 0, names.len().saturating_sub(1) as u32);
            names
                .get(index as usize)
                .map(|name| (*name).to_owned())
                .context("enemy catalog is empty")?
        }
    };
    let enemy = factory.spawn_enemy(&enemy_name)?;
    let mut player = build_player(&config.player_name, &factory)?;
    let mut ledger = ExperienceLedger::new();
    let mut typist = ScriptedTypist::new(config.seed);

    tracing::info!(
        seed = config.seed,
        enemy = %enemy_name,
        player = %config.player_name,
        "demo battle starting"
    );

    let mut transcript = Vec::new();
    let mut checkpoints = 0;
    let (report, drops) = {
        let mut battle = Battle::new(&mut player, enemy)
            .with_config(battle_config)
            .with_ledger(&mut ledger);
        battle.start()?;

        while battle.is_active() {
            let outcome = match battle.current_turn_actor()? {
                Side::Player => {
                    let action = if battle.state().turn_count() >= MAX_TURNS {
                        BattleAction::Flee
                    } else {
                        choose_player_action(battle.player())
                    };
                    let performance = match action {
                        BattleAction::Attack | BattleAction::Skill(_) => {
                            let word = words.pick(battle.state().turn_count()).unwrap_or("ls");
                            let challenge = TypingChallenge::for_word(word, config.time_limit_ms)?;
                            battle.set_challenge(challenge.clone())?;
                            checkpoints += checkpoint(&battle.snapshot()?)?;

                            let (typed, elapsed) = typist.attempt(&challenge);
                            Some(challenge.grade(&typed, elapsed, &battle.config().grading))
                        }
                        _ => None,
                    };
                    battle.submit_action(Side::Player, action, performance.as_ref())?
                }
                Side::Enemy => battle.run_enemy_turn()?,
            };
            transcript.push(describe(&outcome));
        }

        let report = battle
            .report()
            .context("battle loop exited before the battle ended")?;
        let drops: Vec<String> = battle
            .roll_drops(&PcgRng, config.seed)
            .into_iter()
            .map(|entry| entry.item.clone())
            .collect();
        (report, drops)
    };

    tracing::info!(
        outcome = %report.outcome,
        reward_points = report.reward_points,
        drops = drops.len(),
        "demo battle finished"
    );

    Ok(RunSummary {
        transcript,
        report,
        drops,
        ledger_total: ledger.total(),
        checkpoints,
    })
}

/// Encodes a mid-battle save and checks that it decodes.
fn checkpoint(data: &BattleData) -> Result<usize> {
    let bytes = data.to_bytes()?;
    let decoded = BattleData::from_bytes(&bytes)?;
    anyhow::ensure!(&decoded == data, "checkpoint did not survive a round trip");
    tracing::debug!(
        bytes = bytes.len(),
        enemy_hp = data.enemy_health,
        round = data.round,
        "checkpoint saved"
    );
    Ok(1)
}
