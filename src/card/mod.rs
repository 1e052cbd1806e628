pub mod capabilities;
pub mod types;

pub use capabilities::{
    AttackResult, Capability, CombatStats, Combatant, DefendResult, ManaChannel, RankInfo,
    Rankable, SpellCast, Spellcaster,
};
pub use types::{
    ArtifactCard, Card, CardError, CardInfo, CardType, CreatureCard, EliteCard, PlayResult,
    Rarity, SpellCard, SpellEffect, TournamentCard,
};
