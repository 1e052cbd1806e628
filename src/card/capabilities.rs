use crate::card::types::{
    Card, CreatureCard, EliteCard, TournamentCard, ELITE_ATTACK, ELITE_BLOCK, TOURNAMENT_ATTACK,
    TOURNAMENT_BLOCK,
};
use serde::Serialize;

/// Orthogonal behavior contracts a card variant may implement. Each variant
/// enumerates its set statically via `Card::capabilities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Combat,
    Magic,
    Ranking,
}

/// Result of declaring an attack. The target's health is not mutated;
/// `combat_resolved` only records whether the hit would finish it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackResult {
    pub attacker: String,
    pub target: String,
    pub damage: u32,
    pub combat_resolved: bool,
}

/// Result of absorbing incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefendResult {
    pub damage_taken: u32,
    pub damage_blocked: u32,
    pub still_alive: bool,
}

/// Combat-facing stats snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatStats {
    pub attack: u32,
    pub block: u32,
    pub health: Option<u32>,
}

/// Result of casting from a private mana pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellCast {
    pub caster: String,
    pub spell: String,
    pub targets: Vec<String>,
    pub mana_used: u32,
}

/// Result of channeling mana into a private pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManaChannel {
    pub channeled: u32,
    pub total_mana: u32,
}

/// Rating and record snapshot for a competitive card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankInfo {
    pub rating: i32,
    pub record: String,
}

/// Combat contract: attack declaration and damage absorption.
pub trait Combatant {
    fn attack_target(&self, target: &Card) -> AttackResult;
    fn defend(&mut self, incoming_damage: u32) -> DefendResult;
    fn combat_stats(&self) -> CombatStats;
}

/// Magic contract: spellcasting from a pool independent of turn mana.
pub trait Spellcaster {
    fn cast_spell(&mut self, spell: &str, targets: &[String]) -> SpellCast;
    fn channel_mana(&mut self, amount: u32) -> ManaChannel;
    fn mana_pool(&self) -> u32;
}

/// Ranking contract: rating adjustments and win/loss accounting.
pub trait Rankable {
    fn rating(&self) -> i32;
    fn adjust_rating(&mut self, delta: i32);
    fn record_win(&mut self);
    fn record_loss(&mut self);
    fn rank_info(&self) -> RankInfo;
}

/// Fixed cost deducted from an elite's pool per cast.
pub(crate) const SPELL_CAST_COST: u32 = 4;

/// Split incoming damage into (blocked, taken) given a block power.
fn split_damage(block: u32, incoming: u32) -> (u32, u32) {
    let blocked = block.min(incoming);
    (blocked, incoming - blocked)
}

fn declare_attack(attacker: &str, damage: u32, target: &Card) -> AttackResult {
    // Targets without health (spells, artifacts, tournament entries)
    // resolve immediately.
    let combat_resolved = target.health().map_or(true, |health| health <= damage);
    AttackResult {
        attacker: attacker.to_string(),
        target: target.name().to_string(),
        damage,
        combat_resolved,
    }
}

impl Combatant for CreatureCard {
    fn attack_target(&self, target: &Card) -> AttackResult {
        declare_attack(&self.name, self.attack, target)
    }

    fn defend(&mut self, incoming_damage: u32) -> DefendResult {
        let (blocked, taken) = split_damage(0, incoming_damage);
        self.health = self.health.saturating_sub(taken);
        DefendResult {
            damage_taken: taken,
            damage_blocked: blocked,
            still_alive: self.health > 0,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.attack,
            block: 0,
            health: Some(self.health),
        }
    }
}

impl Combatant for EliteCard {
    fn attack_target(&self, target: &Card) -> AttackResult {
        declare_attack(&self.name, ELITE_ATTACK, target)
    }

    fn defend(&mut self, incoming_damage: u32) -> DefendResult {
        let (blocked, taken) = split_damage(ELITE_BLOCK, incoming_damage);
        self.health = self.health.saturating_sub(taken);
        DefendResult {
            damage_taken: taken,
            damage_blocked: blocked,
            still_alive: self.health > 0,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: ELITE_ATTACK,
            block: ELITE_BLOCK,
            health: Some(self.health),
        }
    }
}

impl Spellcaster for EliteCard {
    fn cast_spell(&mut self, spell: &str, targets: &[String]) -> SpellCast {
        // Pool floors at zero; the cast itself always resolves.
        self.mana_pool = self.mana_pool.saturating_sub(SPELL_CAST_COST);
        SpellCast {
            caster: self.name.clone(),
            spell: spell.to_string(),
            targets: targets.to_vec(),
            mana_used: SPELL_CAST_COST,
        }
    }

    fn channel_mana(&mut self, amount: u32) -> ManaChannel {
        self.mana_pool += amount;
        ManaChannel {
            channeled: amount,
            total_mana: self.mana_pool,
        }
    }

    fn mana_pool(&self) -> u32 {
        self.mana_pool
    }
}

impl Combatant for TournamentCard {
    fn attack_target(&self, target: &Card) -> AttackResult {
        declare_attack(&self.name, TOURNAMENT_ATTACK, target)
    }

    // Tournament entries track no health; they block one point and stay up.
    fn defend(&mut self, incoming_damage: u32) -> DefendResult {
        let (blocked, taken) = split_damage(TOURNAMENT_BLOCK, incoming_damage);
        DefendResult {
            damage_taken: taken,
            damage_blocked: blocked,
            still_alive: true,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: TOURNAMENT_ATTACK,
            block: TOURNAMENT_BLOCK,
            health: None,
        }
    }
}

impl Rankable for TournamentCard {
    fn rating(&self) -> i32 {
        self.rating
    }

    fn adjust_rating(&mut self, delta: i32) {
        self.rating += delta;
    }

    fn record_win(&mut self) {
        self.wins += 1;
    }

    fn record_loss(&mut self) {
        self.losses += 1;
    }

    fn rank_info(&self) -> RankInfo {
        RankInfo {
            rating: self.rating,
            record: format!("{}-{}", self.wins, self.losses),
        }
    }
}
