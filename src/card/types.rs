use crate::card::capabilities::{Capability, Combatant, Rankable, Spellcaster};
use crate::game::zones::TurnContext;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised when card construction invariants are violated.
///
/// Costs are unsigned, so a negative cost is unrepresentable; the remaining
/// invariants are checked once here and never re-validated later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid card '{0}': attack must be greater than zero")]
    InvalidAttack(String),
    #[error("invalid card '{0}': health must be greater than zero")]
    InvalidHealth(String),
    #[error("invalid card '{0}': durability must be greater than zero")]
    InvalidDurability(String),
}

/// Card rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Card categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
}

/// Effect tag carried by spell cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellEffect {
    Damage,
    Heal,
    Other(String),
}

impl fmt::Display for SpellEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellEffect::Damage => write!(f, "damage"),
            SpellEffect::Heal => write!(f, "heal"),
            SpellEffect::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Result of playing a card. `mana_used` is the card's cost; the shared
/// mana only changes when the card was actually playable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayResult {
    pub card_played: String,
    pub mana_used: u32,
    pub effect: String,
}

/// Shallow snapshot of a card's attributes for the presentation layer.
/// Always a copy, never a live reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardInfo {
    pub name: String,
    pub cost: u32,
    pub rarity: Rarity,
    pub card_type: CardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_pool: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
}

impl CardInfo {
    fn base(name: &str, cost: u32, rarity: Rarity, card_type: CardType) -> Self {
        CardInfo {
            name: name.to_string(),
            cost,
            rarity,
            card_type,
            attack: None,
            health: None,
            effect_type: None,
            durability: None,
            effect: None,
            mana_pool: None,
            card_id: None,
            rating: None,
            wins: None,
            losses: None,
        }
    }
}

/// Basic creature with combat stats. Health is the only mutable field and
/// only decreases through `defend`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatureCard {
    pub(crate) name: String,
    pub(crate) cost: u32,
    pub(crate) rarity: Rarity,
    pub(crate) attack: u32,
    pub(crate) health: u32,
}

impl CreatureCard {
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        attack: u32,
        health: u32,
    ) -> Result<Self, CardError> {
        let name = name.into();
        if attack == 0 {
            return Err(CardError::InvalidAttack(name));
        }
        if health == 0 {
            return Err(CardError::InvalidHealth(name));
        }
        Ok(CreatureCard {
            name,
            cost,
            rarity,
            attack,
            health,
        })
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn health(&self) -> u32 {
        self.health
    }
}

/// Spell card carrying an effect tag
#[derive(Debug, Clone, Serialize)]
pub struct SpellCard {
    pub(crate) name: String,
    pub(crate) cost: u32,
    pub(crate) rarity: Rarity,
    pub(crate) effect: SpellEffect,
}

impl SpellCard {
    pub fn new(name: impl Into<String>, cost: u32, rarity: Rarity, effect: SpellEffect) -> Self {
        SpellCard {
            name: name.into(),
            cost,
            rarity,
            effect,
        }
    }

    pub fn effect(&self) -> &SpellEffect {
        &self.effect
    }
}

/// Permanent artifact. Durability is validated at construction but no
/// operation currently decrements it.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactCard {
    pub(crate) name: String,
    pub(crate) cost: u32,
    pub(crate) rarity: Rarity,
    pub(crate) durability: u32,
    pub(crate) effect: String,
}

impl ArtifactCard {
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        durability: u32,
        effect: impl Into<String>,
    ) -> Result<Self, CardError> {
        let name = name.into();
        if durability == 0 {
            return Err(CardError::InvalidDurability(name));
        }
        Ok(ArtifactCard {
            name,
            cost,
            rarity,
            durability,
            effect: effect.into(),
        })
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn effect(&self) -> &str {
        &self.effect
    }
}

pub(crate) const ELITE_ATTACK: u32 = 5;
pub(crate) const ELITE_BLOCK: u32 = 3;
pub(crate) const ELITE_HEALTH: u32 = 10;
pub(crate) const ELITE_MANA_POOL: u32 = 4;

/// Elite creature combining combat with an independent spellcasting mana
/// pool. The pool is separate from the shared turn mana.
#[derive(Debug, Clone, Serialize)]
pub struct EliteCard {
    pub(crate) name: String,
    pub(crate) cost: u32,
    pub(crate) rarity: Rarity,
    pub(crate) health: u32,
    pub(crate) mana_pool: u32,
}

impl EliteCard {
    pub fn new(name: impl Into<String>, cost: u32, rarity: Rarity) -> Self {
        EliteCard {
            name: name.into(),
            cost,
            rarity,
            health: ELITE_HEALTH,
            mana_pool: ELITE_MANA_POOL,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }
}

pub(crate) const TOURNAMENT_ATTACK: u32 = 5;
pub(crate) const TOURNAMENT_BLOCK: u32 = 1;

/// Competitive entry: a creature-typed card with a rating and a win/loss
/// record, registered with the tournament platform by `card_id`.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentCard {
    pub(crate) card_id: String,
    pub(crate) name: String,
    pub(crate) cost: u32,
    pub(crate) rarity: Rarity,
    pub(crate) rating: i32,
    pub(crate) wins: u32,
    pub(crate) losses: u32,
}

impl TournamentCard {
    pub fn new(
        card_id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        rating: i32,
    ) -> Self {
        TournamentCard {
            card_id: card_id.into(),
            name: name.into(),
            cost,
            rarity,
            rating,
            wins: 0,
            losses: 0,
        }
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }
}

/// Unified card enum
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Card {
    Creature(CreatureCard),
    Spell(SpellCard),
    Artifact(ArtifactCard),
    Elite(EliteCard),
    Tournament(TournamentCard),
}

impl Card {
    pub fn name(&self) -> &str {
        match self {
            Card::Creature(c) => &c.name,
            Card::Spell(c) => &c.name,
            Card::Artifact(c) => &c.name,
            Card::Elite(c) => &c.name,
            Card::Tournament(c) => &c.name,
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            Card::Creature(c) => c.cost,
            Card::Spell(c) => c.cost,
            Card::Artifact(c) => c.cost,
            Card::Elite(c) => c.cost,
            Card::Tournament(c) => c.cost,
        }
    }

    pub fn rarity(&self) -> Rarity {
        match self {
            Card::Creature(c) => c.rarity,
            Card::Spell(c) => c.rarity,
            Card::Artifact(c) => c.rarity,
            Card::Elite(c) => c.rarity,
            Card::Tournament(c) => c.rarity,
        }
    }

    /// Elite and tournament cards are creature-typed.
    pub fn card_type(&self) -> CardType {
        match self {
            Card::Creature(_) | Card::Elite(_) | Card::Tournament(_) => CardType::Creature,
            Card::Spell(_) => CardType::Spell,
            Card::Artifact(_) => CardType::Artifact,
        }
    }

    /// Attack value for variants that fight; `None` otherwise.
    pub fn attack(&self) -> Option<u32> {
        match self {
            Card::Creature(c) => Some(c.attack),
            Card::Elite(_) => Some(ELITE_ATTACK),
            Card::Tournament(_) => Some(TOURNAMENT_ATTACK),
            Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    /// Remaining health for variants that track it; `None` otherwise.
    pub fn health(&self) -> Option<u32> {
        match self {
            Card::Creature(c) => Some(c.health),
            Card::Elite(c) => Some(c.health),
            Card::Spell(_) | Card::Artifact(_) | Card::Tournament(_) => None,
        }
    }

    /// The statically known capability set of this variant.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Card::Creature(_) => &[Capability::Combat],
            Card::Spell(_) | Card::Artifact(_) => &[],
            Card::Elite(_) => &[Capability::Combat, Capability::Magic],
            Card::Tournament(_) => &[Capability::Combat, Capability::Ranking],
        }
    }

    /// Combat capability, if this variant fights.
    pub fn as_combatant(&mut self) -> Option<&mut dyn Combatant> {
        match self {
            Card::Creature(c) => Some(c),
            Card::Elite(c) => Some(c),
            Card::Tournament(c) => Some(c),
            Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    /// Magic capability, if this variant casts from its own pool.
    pub fn as_spellcaster(&mut self) -> Option<&mut dyn Spellcaster> {
        match self {
            Card::Elite(c) => Some(c),
            _ => None,
        }
    }

    /// Ranking capability, if this variant competes.
    pub fn as_rankable(&mut self) -> Option<&mut dyn Rankable> {
        match self {
            Card::Tournament(c) => Some(c),
            _ => None,
        }
    }

    /// Whether the card could be played with the given mana. Pure.
    pub fn is_playable(&self, available_mana: u32) -> bool {
        available_mana >= self.cost()
    }

    /// Play the card against the shared turn context. With insufficient
    /// mana the effect is "None" and the context is untouched; otherwise
    /// exactly `cost` is deducted, once. Never fails for a valid card.
    pub fn play(&self, ctx: &mut TurnContext) -> PlayResult {
        let cost = self.cost();
        let mut result = PlayResult {
            card_played: self.name().to_string(),
            mana_used: cost,
            effect: "None".to_string(),
        };
        if !self.is_playable(ctx.mana) {
            return result;
        }
        ctx.mana -= cost;
        result.effect = match self {
            Card::Creature(_) => "Creature summoned to battlefield".to_string(),
            Card::Spell(c) => match &c.effect {
                SpellEffect::Damage => "Deal 3 damage to target".to_string(),
                SpellEffect::Heal => "Heal 3 health".to_string(),
                SpellEffect::Other(tag) => format!("Spell effect: {}", tag),
            },
            Card::Artifact(c) => format!("Permanent: {}", c.effect),
            Card::Elite(_) => "Elite creature enters battlefield".to_string(),
            Card::Tournament(_) => "Tournament card played".to_string(),
        };
        result
    }

    /// Snapshot of all attributes.
    pub fn card_info(&self) -> CardInfo {
        let mut info = CardInfo::base(self.name(), self.cost(), self.rarity(), self.card_type());
        match self {
            Card::Creature(c) => {
                info.attack = Some(c.attack);
                info.health = Some(c.health);
            }
            Card::Spell(c) => {
                info.effect_type = Some(c.effect.to_string());
            }
            Card::Artifact(c) => {
                info.durability = Some(c.durability);
                info.effect = Some(c.effect.clone());
            }
            Card::Elite(c) => {
                info.attack = Some(ELITE_ATTACK);
                info.health = Some(c.health);
                info.mana_pool = Some(c.mana_pool);
            }
            Card::Tournament(c) => {
                info.attack = Some(TOURNAMENT_ATTACK);
                info.card_id = Some(c.card_id.clone());
                info.rating = Some(c.rating);
                info.wins = Some(c.wins);
                info.losses = Some(c.losses);
            }
        }
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::zones::{Battlefield, Hand, TurnContext};

    fn dragon() -> Card {
        Card::Creature(
            CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5).expect("valid creature"),
        )
    }

    fn context_with_mana(mana: u32) -> TurnContext {
        TurnContext::new(Hand::new(), Battlefield::new(), mana)
    }

    #[test]
    fn test_creature_rejects_zero_attack() {
        let result = CreatureCard::new("Broken", 1, Rarity::Common, 0, 2);
        assert_eq!(result.unwrap_err(), CardError::InvalidAttack("Broken".to_string()));
    }

    #[test]
    fn test_creature_rejects_zero_health() {
        let result = CreatureCard::new("Broken", 1, Rarity::Common, 2, 0);
        assert_eq!(result.unwrap_err(), CardError::InvalidHealth("Broken".to_string()));
    }

    #[test]
    fn test_artifact_rejects_zero_durability() {
        let result = ArtifactCard::new("Broken Ring", 2, Rarity::Rare, 0, "+1 mana per turn");
        assert_eq!(
            result.unwrap_err(),
            CardError::InvalidDurability("Broken Ring".to_string())
        );
    }

    #[test]
    fn test_is_playable_matches_cost_threshold() {
        let card = dragon();
        for mana in 0..10 {
            assert_eq!(card.is_playable(mana), mana >= 5);
        }
    }

    #[test]
    fn test_play_with_sufficient_mana_deducts_cost_once() {
        let card = dragon();
        let mut ctx = context_with_mana(6);
        let result = card.play(&mut ctx);
        assert_eq!(ctx.mana, 1);
        assert_eq!(result.effect, "Creature summoned to battlefield");
        assert_eq!(result.mana_used, 5);
        assert_eq!(result.card_played, "Fire Dragon");
    }

    #[test]
    fn test_play_with_insufficient_mana_leaves_context_unchanged() {
        let card = dragon();
        let mut ctx = context_with_mana(3);
        let result = card.play(&mut ctx);
        assert_eq!(ctx.mana, 3);
        assert_eq!(result.effect, "None");
    }

    #[test]
    fn test_spell_effect_strings() {
        let mut ctx = context_with_mana(20);
        let bolt = Card::Spell(SpellCard::new("Lightning Bolt", 3, Rarity::Rare, SpellEffect::Damage));
        assert_eq!(bolt.play(&mut ctx).effect, "Deal 3 damage to target");

        let mend = Card::Spell(SpellCard::new("Mending", 2, Rarity::Common, SpellEffect::Heal));
        assert_eq!(mend.play(&mut ctx).effect, "Heal 3 health");

        let weird = Card::Spell(SpellCard::new(
            "Mind Twist",
            4,
            Rarity::Epic,
            SpellEffect::Other("confusion".to_string()),
        ));
        assert_eq!(weird.play(&mut ctx).effect, "Spell effect: confusion");
    }

    #[test]
    fn test_artifact_play_effect() {
        let ring = Card::Artifact(
            ArtifactCard::new("Mana Ring", 2, Rarity::Rare, 10, "+1 mana per turn")
                .expect("valid artifact"),
        );
        let mut ctx = context_with_mana(5);
        assert_eq!(ring.play(&mut ctx).effect, "Permanent: +1 mana per turn");
        assert_eq!(ctx.mana, 3);
    }

    #[test]
    fn test_elite_play_effect_and_type() {
        let elite = Card::Elite(EliteCard::new("Arcane Warrior", 4, Rarity::Epic));
        assert_eq!(elite.card_type(), CardType::Creature);
        let mut ctx = context_with_mana(4);
        assert_eq!(elite.play(&mut ctx).effect, "Elite creature enters battlefield");
        assert_eq!(ctx.mana, 0);
    }

    #[test]
    fn test_tournament_play_is_mana_gated() {
        let entry = Card::Tournament(TournamentCard::new(
            "dragon_001",
            "Fire Dragon",
            5,
            Rarity::Legendary,
            1200,
        ));
        let mut ctx = context_with_mana(4);
        assert_eq!(entry.play(&mut ctx).effect, "None");
        assert_eq!(ctx.mana, 4);

        ctx.mana = 5;
        assert_eq!(entry.play(&mut ctx).effect, "Tournament card played");
        assert_eq!(ctx.mana, 0);
    }

    #[test]
    fn test_card_info_is_a_snapshot() {
        let card = dragon();
        let info = card.card_info();
        assert_eq!(info.name, "Fire Dragon");
        assert_eq!(info.cost, 5);
        assert_eq!(info.rarity, Rarity::Legendary);
        assert_eq!(info.card_type, CardType::Creature);
        assert_eq!(info.attack, Some(7));
        assert_eq!(info.health, Some(5));
        assert_eq!(info.card_id, None);
    }

    #[test]
    fn test_capability_sets() {
        let mut creature = dragon();
        assert_eq!(creature.capabilities(), &[Capability::Combat]);
        assert!(creature.as_combatant().is_some());
        assert!(creature.as_spellcaster().is_none());
        assert!(creature.as_rankable().is_none());

        let mut spell =
            Card::Spell(SpellCard::new("Lightning Bolt", 3, Rarity::Rare, SpellEffect::Damage));
        assert!(spell.capabilities().is_empty());
        assert!(spell.as_combatant().is_none());

        let mut elite = Card::Elite(EliteCard::new("Arcane Warrior", 4, Rarity::Epic));
        assert_eq!(elite.capabilities(), &[Capability::Combat, Capability::Magic]);
        assert!(elite.as_spellcaster().is_some());

        let mut entry = Card::Tournament(TournamentCard::new(
            "w1",
            "Ice Wizard",
            4,
            Rarity::Epic,
            1150,
        ));
        assert_eq!(entry.capabilities(), &[Capability::Combat, Capability::Ranking]);
        assert!(entry.as_rankable().is_some());
    }
}
