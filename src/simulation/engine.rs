use crate::card::CardError;
use crate::game::deck::DeckError;
use crate::game::zones::TurnContext;
use crate::simulation::factory::CardFactory;
use crate::simulation::strategy::{GameStrategy, TurnResult};
use serde::Serialize;
use thiserror::Error;

/// Shared mana available to a freshly configured engine.
pub const DEFAULT_STARTING_MANA: u32 = 10;

/// Cards dealt into the starting hand at configuration time.
pub const STARTING_HAND_SIZE: usize = 3;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine not configured: call configure_engine first")]
    NotConfigured,
    #[error("card error: {0}")]
    Card(#[from] CardError),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}

/// Accumulated engine counters. Pure read; see `GameEngine::status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStatus {
    pub turns_simulated: u32,
    pub strategy_used: String,
    pub cards_created: usize,
    pub total_damage: u64,
}

struct Session {
    strategy: Box<dyn GameStrategy>,
    context: TurnContext,
}

/// Orchestrates a factory and a strategy across a turn loop.
///
/// Starts unconfigured; `configure_engine` is the only transition into the
/// configured state, after which `simulate_turn` delegates each turn to the
/// stored strategy.
#[derive(Default)]
pub struct GameEngine {
    session: Option<Session>,
    turns_simulated: u32,
    cards_created: usize,
    total_damage: u64,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.session.is_some()
    }

    /// Build the starting hand and battlefield through the factory and
    /// store the strategy for subsequent turns.
    pub fn configure_engine(
        &mut self,
        factory: &dyn CardFactory,
        strategy: Box<dyn GameStrategy>,
    ) -> Result<(), EngineError> {
        let themed = factory.create_themed_deck(STARTING_HAND_SIZE)?;
        self.cards_created = themed.hand.size();
        self.session = Some(Session {
            strategy,
            context: TurnContext::new(themed.hand, themed.battlefield, DEFAULT_STARTING_MANA),
        });
        Ok(())
    }

    /// Run one turn through the configured strategy and return its result
    /// unchanged. Fails with `NotConfigured` before `configure_engine`.
    pub fn simulate_turn(&mut self) -> Result<TurnResult, EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NotConfigured)?;
        self.turns_simulated += 1;
        let result = session.strategy.execute_turn(&mut session.context);
        self.total_damage += u64::from(result.damage_dealt);
        Ok(result)
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            turns_simulated: self.turns_simulated,
            strategy_used: self
                .session
                .as_ref()
                .map(|s| s.strategy.name().to_string())
                .unwrap_or_else(|| "None".to_string()),
            cards_created: self.cards_created,
            total_damage: self.total_damage,
        }
    }

    /// Read access to the live turn context, for inspection only.
    pub fn context(&self) -> Option<&TurnContext> {
        self.session.as_ref().map(|s| &s.context)
    }
}
