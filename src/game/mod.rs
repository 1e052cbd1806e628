pub mod deck;
pub mod zones;

pub use deck::{Deck, DeckError, DeckStats};
pub use zones::{Battlefield, Hand, TurnContext};
