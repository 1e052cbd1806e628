use crate::game::deck::Deck;
use crate::game::zones::{Battlefield, Hand, TurnContext};
use crate::rng::SimRng;
use crate::simulation::engine::{EngineError, DEFAULT_STARTING_MANA, STARTING_HAND_SIZE};
use crate::simulation::factory::CardFactory;
use crate::simulation::strategy::GameStrategy;
use rayon::prelude::*;
use serde::Serialize;

/// Category order used when expanding a factory registry into a deck. Fixed
/// so a seed always sees the same pre-shuffle order.
const REGISTRY_CATEGORIES: [&str; 3] = ["creatures", "spells", "artifacts"];

/// Outcome of one seeded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub turns_played: u32,
    pub cards_played: usize,
    pub total_damage: u64,
    pub mana_spent: u64,
}

/// Parameters for a batch of games.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub games: usize,
    pub turns_per_game: u32,
    pub base_seed: u64,
}

/// Aggregate over a batch of seeded games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub games: usize,
    pub turns_per_game: u32,
    pub base_seed: u64,
    pub total_damage: u64,
    pub avg_damage: f64,
    pub min_damage: u64,
    pub max_damage: u64,
    pub avg_cards_played: f64,
}

/// Run one game: expand the factory registry into a deck, shuffle it with
/// the seed, deal a starting hand, then run strategy turns with a redraw
/// after each turn while the deck lasts.
pub fn run_game(
    factory: &dyn CardFactory,
    strategy: &dyn GameStrategy,
    seed: u64,
    turns: u32,
) -> Result<GameSummary, EngineError> {
    let registry = factory.supported_types();
    let mut deck = Deck::new();
    for category in REGISTRY_CATEGORIES {
        for identifier in registry.get(category).into_iter().flatten() {
            let card = match category {
                "creatures" => factory.create_creature(identifier)?,
                "spells" => factory.create_spell(identifier)?,
                _ => factory.create_artifact(identifier)?,
            };
            deck.add_card(card);
        }
    }

    let mut rng = SimRng::seeded(seed);
    deck.shuffle(&mut rng);

    let mut ctx = TurnContext::new(Hand::new(), Battlefield::new(), DEFAULT_STARTING_MANA);
    while ctx.hand.size() < STARTING_HAND_SIZE && !deck.is_empty() {
        ctx.hand.add_card(deck.draw_card()?);
    }

    let mut summary = GameSummary {
        seed,
        turns_played: 0,
        cards_played: 0,
        total_damage: 0,
        mana_spent: 0,
    };
    for _ in 0..turns {
        if ctx.hand.is_empty() && deck.is_empty() {
            break;
        }
        let result = strategy.execute_turn(&mut ctx);
        summary.turns_played += 1;
        summary.cards_played += result.cards_played.len();
        summary.total_damage += u64::from(result.damage_dealt);
        summary.mana_spent += u64::from(result.mana_used);

        if !deck.is_empty() {
            ctx.hand.add_card(deck.draw_card()?);
        }
    }
    Ok(summary)
}

/// Aggregate per-game summaries into a batch summary.
pub fn summarize(config: &BatchConfig, summaries: &[GameSummary]) -> BatchSummary {
    let total_damage: u64 = summaries.iter().map(|s| s.total_damage).sum();
    let total_cards: usize = summaries.iter().map(|s| s.cards_played).sum();
    let games = summaries.len();
    let (avg_damage, avg_cards_played) = if games == 0 {
        (0.0, 0.0)
    } else {
        (
            total_damage as f64 / games as f64,
            total_cards as f64 / games as f64,
        )
    };

    BatchSummary {
        games,
        turns_per_game: config.turns_per_game,
        base_seed: config.base_seed,
        total_damage,
        avg_damage,
        min_damage: summaries.iter().map(|s| s.total_damage).min().unwrap_or(0),
        max_damage: summaries.iter().map(|s| s.total_damage).max().unwrap_or(0),
        avg_cards_played,
    }
}

/// Run `config.games` games in parallel over sequential seeds derived from
/// the base seed. Deterministic for a given base seed.
pub fn run_batch(
    factory: &dyn CardFactory,
    strategy: &dyn GameStrategy,
    config: &BatchConfig,
) -> Result<BatchSummary, EngineError> {
    let summaries: Result<Vec<GameSummary>, EngineError> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            run_game(
                factory,
                strategy,
                config.base_seed.wrapping_add(i as u64),
                config.turns_per_game,
            )
        })
        .collect();
    Ok(summarize(config, &summaries?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::factory::FantasyCardFactory;
    use crate::simulation::strategy::AggressiveStrategy;

    #[test]
    fn test_same_seed_same_game() {
        let factory = FantasyCardFactory::new();
        let first = run_game(&factory, &AggressiveStrategy, 12345, 1).expect("game");
        let second = run_game(&factory, &AggressiveStrategy, 12345, 1).expect("game");
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeds_change_the_opening_hand() {
        let factory = FantasyCardFactory::new();
        let mut damages = std::collections::HashSet::new();
        for seed in 0..20 {
            let summary = run_game(&factory, &AggressiveStrategy, seed, 1).expect("game");
            damages.insert(summary.total_damage);
        }
        assert!(damages.len() > 1, "different seeds should vary the opening hand");
    }

    #[test]
    fn test_full_deck_converges_to_fixed_totals() {
        // With enough turns every creature and spell gets played no matter
        // the shuffle: goblin 2 + dragon 7 + bolt 6 = 15 damage.
        let factory = FantasyCardFactory::new();
        for seed in 0..10 {
            let summary = run_game(&factory, &AggressiveStrategy, seed, 6).expect("game");
            assert_eq!(summary.total_damage, 15);
            assert_eq!(summary.cards_played, 3);
        }
    }

    #[test]
    fn test_batch_matches_individual_games() {
        let factory = FantasyCardFactory::new();
        let config = BatchConfig {
            games: 8,
            turns_per_game: 1,
            base_seed: 99,
        };
        let batch = run_batch(&factory, &AggressiveStrategy, &config).expect("batch");

        let singles: Vec<GameSummary> = (0..8)
            .map(|i| run_game(&factory, &AggressiveStrategy, 99 + i, 1).expect("game"))
            .collect();
        assert_eq!(batch, summarize(&config, &singles));
        assert_eq!(batch.games, 8);
    }

    #[test]
    fn test_empty_batch_summary() {
        let config = BatchConfig {
            games: 0,
            turns_per_game: 1,
            base_seed: 0,
        };
        let summary = summarize(&config, &[]);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.avg_damage, 0.0);
        assert_eq!(summary.min_damage, 0);
    }
}
