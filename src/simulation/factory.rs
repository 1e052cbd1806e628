use crate::card::{ArtifactCard, Card, CardError, CreatureCard, Rarity, SpellCard, SpellEffect};
use crate::game::zones::{Battlefield, Hand};
use std::collections::HashMap;

/// Starting zones produced by a factory: a hand and an empty battlefield.
#[derive(Debug, Clone)]
pub struct ThemedDeck {
    pub hand: Hand,
    pub battlefield: Battlefield,
}

/// Card-creation policy. Identifiers resolve against an internal registry;
/// unrecognized identifiers fall back to a documented default card rather
/// than failing.
pub trait CardFactory: Send + Sync {
    fn create_creature(&self, identifier: &str) -> Result<Card, CardError>;
    fn create_spell(&self, identifier: &str) -> Result<Card, CardError>;
    fn create_artifact(&self, identifier: &str) -> Result<Card, CardError>;

    /// Snapshot of the registry (category -> known identifiers). Always a
    /// copy so callers cannot mutate the live registry.
    fn supported_types(&self) -> HashMap<String, Vec<String>>;

    /// The first `size` cards of the fixed sample set as a hand, plus an
    /// empty battlefield.
    fn create_themed_deck(&self, size: usize) -> Result<ThemedDeck, CardError>;
}

/// Fantasy-themed factory.
///
/// Defaults for unrecognized identifiers: creatures fall back to Fire
/// Dragon (5, Legendary, 7/5), spells to Lightning Bolt (3, Rare, damage),
/// artifacts to Mana Ring (2, Rare, durability 10).
pub struct FantasyCardFactory {
    registry: HashMap<String, Vec<String>>,
}

impl FantasyCardFactory {
    pub fn new() -> Self {
        let mut registry = HashMap::new();
        registry.insert(
            "creatures".to_string(),
            vec!["dragon".to_string(), "goblin".to_string()],
        );
        registry.insert("spells".to_string(), vec!["fireball".to_string()]);
        registry.insert("artifacts".to_string(), vec!["mana_ring".to_string()]);
        FantasyCardFactory { registry }
    }
}

impl Default for FantasyCardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFactory for FantasyCardFactory {
    fn create_creature(&self, identifier: &str) -> Result<Card, CardError> {
        let creature = match identifier {
            "goblin" | "Goblin Warrior" => {
                CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 2, 2)?
            }
            _ => CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5)?,
        };
        Ok(Card::Creature(creature))
    }

    fn create_spell(&self, _identifier: &str) -> Result<Card, CardError> {
        Ok(Card::Spell(SpellCard::new(
            "Lightning Bolt",
            3,
            Rarity::Rare,
            SpellEffect::Damage,
        )))
    }

    fn create_artifact(&self, _identifier: &str) -> Result<Card, CardError> {
        Ok(Card::Artifact(ArtifactCard::new(
            "Mana Ring",
            2,
            Rarity::Rare,
            10,
            "+1 mana per turn",
        )?))
    }

    fn supported_types(&self) -> HashMap<String, Vec<String>> {
        self.registry.clone()
    }

    fn create_themed_deck(&self, size: usize) -> Result<ThemedDeck, CardError> {
        let sample = [
            self.create_creature("dragon")?,
            self.create_creature("goblin")?,
            self.create_spell("fireball")?,
        ];

        let mut hand = Hand::new();
        for card in sample.into_iter().take(size) {
            hand.add_card(card);
        }
        Ok(ThemedDeck {
            hand,
            battlefield: Battlefield::new(),
        })
    }
}
