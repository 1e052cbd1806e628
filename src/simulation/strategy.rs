use crate::card::CardType;
use crate::game::zones::TurnContext;
use serde::Serialize;

/// Damage credited for burning a spell, on top of any creature attack.
const SPELL_DAMAGE_BONUS: u32 = 6;

/// The opposing side every attack is reported against.
const ENEMY_TARGET: &str = "Enemy Player";

/// Summary of one executed turn. Implementations must report exactly what
/// they did to the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResult {
    pub cards_played: Vec<String>,
    pub mana_used: u32,
    pub targets_attacked: Vec<String>,
    pub damage_dealt: u32,
}

/// Turn-decision policy. The context is an exclusive mutable borrow for the
/// duration of one call; implementations may move cards between hand and
/// battlefield in place.
pub trait GameStrategy: Send + Sync {
    fn name(&self) -> &str;
    fn execute_turn(&self, ctx: &mut TurnContext) -> TurnResult;
}

/// Plays the cheapest creature in hand onto the battlefield and burns the
/// first spell for bonus damage, every single turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveStrategy;

impl GameStrategy for AggressiveStrategy {
    fn name(&self) -> &str {
        "AggressiveStrategy"
    }

    fn execute_turn(&self, ctx: &mut TurnContext) -> TurnResult {
        let mut result = TurnResult {
            cards_played: Vec::new(),
            mana_used: 0,
            targets_attacked: vec![ENEMY_TARGET.to_string()],
            damage_dealt: 0,
        };

        // Cheapest creature wins; on equal cost the first encountered stays.
        let mut cheapest: Option<(usize, u32)> = None;
        for (index, card) in ctx.hand.cards().iter().enumerate() {
            if card.card_type() != CardType::Creature {
                continue;
            }
            let replace = match cheapest {
                None => true,
                Some((_, best_cost)) => card.cost() < best_cost,
            };
            if replace {
                cheapest = Some((index, card.cost()));
            }
        }
        if let Some((index, _)) = cheapest {
            if let Some(creature) = ctx.hand.remove_card(index) {
                result.cards_played.push(creature.name().to_string());
                result.mana_used += creature.cost();
                result.damage_dealt += creature.attack().unwrap_or(0);
                ctx.battlefield.add_card(creature);
            }
        }

        // First spell is consumed, not moved to the battlefield.
        let spell_index = ctx
            .hand
            .cards()
            .iter()
            .position(|card| card.card_type() == CardType::Spell);
        if let Some(index) = spell_index {
            if let Some(spell) = ctx.hand.remove_card(index) {
                result.cards_played.push(spell.name().to_string());
                result.mana_used += spell.cost();
                result.damage_dealt += SPELL_DAMAGE_BONUS;
            }
        }

        result
    }
}
