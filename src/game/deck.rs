use crate::card::{Card, CardType};
use crate::rng::SimRng;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// Aggregate deck statistics. `avg_cost` is rounded to one decimal and is
/// 0.0 for an empty deck. Elite and tournament cards count as creatures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckStats {
    pub total_cards: usize,
    pub creatures: usize,
    pub spells: usize,
    pub artifacts: usize,
    pub avg_cost: f64,
}

/// Ordered stack of cards. The most recently added card is drawn first
/// unless the deck has been shuffled. Duplicate names are permitted.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card matching `name`. Returns whether one was found.
    pub fn remove_card(&mut self, name: &str) -> bool {
        if let Some(index) = self.cards.iter().position(|c| c.name() == name) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Uniform random permutation using the injected source.
    pub fn shuffle(&mut self, rng: &mut SimRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the most recently added remaining card.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn stats(&self) -> DeckStats {
        let total = self.cards.len();
        let count_type = |wanted: CardType| {
            self.cards
                .iter()
                .filter(|c| c.card_type() == wanted)
                .count()
        };
        let avg_cost = if total == 0 {
            0.0
        } else {
            let sum: u32 = self.cards.iter().map(|c| c.cost()).sum();
            (sum as f64 / total as f64 * 10.0).round() / 10.0
        };

        DeckStats {
            total_cards: total,
            creatures: count_type(CardType::Creature),
            spells: count_type(CardType::Spell),
            artifacts: count_type(CardType::Artifact),
            avg_cost,
        }
    }
}
