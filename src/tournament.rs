use crate::card::{Rankable, TournamentCard};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Fixed rating adjustment applied to both sides of a match.
const RATING_STEP: i32 = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("card not found: {0}")]
    CardNotFound(String),
}

/// Outcome of a resolved match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub winner: String,
    pub loser: String,
    pub winner_rating: i32,
    pub loser_rating: i32,
}

/// Platform-wide aggregate report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentReport {
    pub total_cards: usize,
    pub matches_played: u32,
    pub avg_rating: i32,
    pub platform_status: String,
}

/// Registry of competitive cards plus match bookkeeping.
///
/// Entries are keyed by `card_id`; registration order is preserved so
/// leaderboard ties resolve to the earlier registration.
#[derive(Default)]
pub struct TournamentPlatform {
    entries: Vec<TournamentCard>,
    index: HashMap<String, usize>,
    matches_played: u32,
}

impl TournamentPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card under its `card_id`. Re-registering an id replaces
    /// the entry in place, keeping its original slot.
    pub fn register_card(&mut self, card: TournamentCard) -> String {
        let id = card.card_id().to_string();
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot] = card,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push(card);
            }
        }
        id
    }

    pub fn card(&self, card_id: &str) -> Option<&TournamentCard> {
        self.index.get(card_id).map(|&slot| &self.entries[slot])
    }

    pub fn card_count(&self) -> usize {
        self.entries.len()
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    fn lookup(&self, card_id: &str) -> Result<usize, TournamentError> {
        self.index
            .get(card_id)
            .copied()
            .ok_or_else(|| TournamentError::CardNotFound(card_id.to_string()))
    }

    /// Resolve a match between two registered cards. The higher-rated card
    /// wins; an exact tie goes to the first argument. Both records and
    /// ratings are adjusted by the fixed step.
    pub fn create_match(
        &mut self,
        first_id: &str,
        second_id: &str,
    ) -> Result<MatchResult, TournamentError> {
        let first = self.lookup(first_id)?;
        let second = self.lookup(second_id)?;
        self.matches_played += 1;

        let (winner_slot, loser_slot) =
            if self.entries[first].rating() >= self.entries[second].rating() {
                (first, second)
            } else {
                (second, first)
            };

        {
            let winner = &mut self.entries[winner_slot];
            winner.record_win();
            winner.adjust_rating(RATING_STEP);
        }
        {
            let loser = &mut self.entries[loser_slot];
            loser.record_loss();
            loser.adjust_rating(-RATING_STEP);
        }

        Ok(MatchResult {
            winner: self.entries[winner_slot].card_id().to_string(),
            loser: self.entries[loser_slot].card_id().to_string(),
            winner_rating: self.entries[winner_slot].rating(),
            loser_rating: self.entries[loser_slot].rating(),
        })
    }

    /// Cards ordered by rating, highest first. The sort is stable, so equal
    /// ratings keep registration order.
    pub fn leaderboard(&self) -> Vec<&TournamentCard> {
        let mut ordered: Vec<&TournamentCard> = self.entries.iter().collect();
        ordered.sort_by(|a, b| b.rating().cmp(&a.rating()));
        ordered
    }

    /// Aggregate report; `avg_rating` is the floor of the mean rating, 0
    /// with no cards registered.
    pub fn report(&self) -> TournamentReport {
        let avg_rating = if self.entries.is_empty() {
            0
        } else {
            let sum: i64 = self.entries.iter().map(|c| i64::from(c.rating())).sum();
            sum.div_euclid(self.entries.len() as i64) as i32
        };

        TournamentReport {
            total_cards: self.entries.len(),
            matches_played: self.matches_played,
            avg_rating,
            platform_status: "active".to_string(),
        }
    }
}
