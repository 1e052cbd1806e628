use crate::card::Card;

/// Cards available to be played this turn.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Cards currently in active play.
#[derive(Debug, Clone, Default)]
pub struct Battlefield {
    cards: Vec<Card>,
}

impl Battlefield {
    pub fn new() -> Self {
        Battlefield { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Mutable state for one turn: the hand, the battlefield, and the shared
/// mana slot. Exactly one strategy call owns this borrow per turn;
/// re-entrant turn execution on the same context is not supported.
#[derive(Debug, Clone)]
pub struct TurnContext {
    pub hand: Hand,
    pub battlefield: Battlefield,
    pub mana: u32,
}

impl TurnContext {
    pub fn new(hand: Hand, battlefield: Battlefield, mana: u32) -> Self {
        TurnContext {
            hand,
            battlefield,
            mana,
        }
    }
}
