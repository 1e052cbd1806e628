use chrono::Local;
use clap::{Parser, Subcommand};
use datadeck::card::{Rarity, TournamentCard};
use datadeck::game::deck::Deck;
use datadeck::game::zones::{Battlefield, Hand, TurnContext};
use datadeck::rng::SimRng;
use datadeck::simulation::batch::{self, BatchConfig};
use datadeck::simulation::engine::GameEngine;
use datadeck::simulation::factory::{CardFactory, FantasyCardFactory};
use datadeck::simulation::strategy::AggressiveStrategy;
use datadeck::tournament::TournamentPlatform;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "datadeck")]
#[command(about = "Turn-based card game simulator with tournament matchmaking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the engine and simulate a few turns (default)
    Demo {
        /// Number of turns to simulate
        #[arg(short, long, default_value = "3")]
        turns: u32,
    },

    /// Build the sample deck, shuffle it, and play every card
    Deck {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a batch of seeded games in parallel
    Batch {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// Turns per game
        #[arg(short, long, default_value = "5")]
        turns: u32,

        /// Base seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Register sample cards and run tournament matches
    Tournament {
        /// Number of matches to play
        #[arg(short, long, default_value = "10")]
        matches: usize,

        /// Seed for the pairing order
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { turns }) => run_demo(turns),
        Some(Commands::Deck { seed }) => run_deck(seed.or(cli.seed)),
        Some(Commands::Batch { games, turns, seed }) => {
            run_batch(games, turns, seed.or(cli.seed))
        }
        Some(Commands::Tournament { matches, seed }) => {
            run_tournament(matches, seed.or(cli.seed))
        }
        None => run_demo(3),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| SimRng::from_entropy().seed())
}

fn run_demo(turns: u32) {
    println!("=== DataDeck Game Engine ===\n");

    let factory = FantasyCardFactory::new();
    let mut engine = GameEngine::new();
    if let Err(e) = engine.configure_engine(&factory, Box::new(AggressiveStrategy)) {
        eprintln!("✗ Failed to configure engine: {}", e);
        std::process::exit(1);
    }
    println!("Supported types: {}\n", to_json(&factory.supported_types()));

    for turn in 1..=turns {
        match engine.simulate_turn() {
            Ok(result) => println!("Turn {}: {}", turn, to_json(&result)),
            Err(e) => {
                eprintln!("✗ Turn {} failed: {}", turn, e);
                std::process::exit(1);
            }
        }
    }

    println!("\nEngine status: {}", to_json(&engine.status()));
}

fn run_deck(seed: Option<u64>) {
    println!("=== DataDeck Deck Builder ===\n");

    let factory = FantasyCardFactory::new();
    let mut deck = Deck::new();
    for result in [
        factory.create_creature("dragon"),
        factory.create_creature("goblin"),
        factory.create_spell("fireball"),
        factory.create_artifact("mana_ring"),
    ] {
        match result {
            Ok(card) => deck.add_card(card),
            Err(e) => {
                eprintln!("✗ Failed to build deck: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("Deck stats: {}\n", to_json(&deck.stats()));

    let seed = resolve_seed(seed);
    println!("Shuffling with seed {}\n", seed);
    deck.shuffle(&mut SimRng::seeded(seed));

    let mut ctx = TurnContext::new(Hand::new(), Battlefield::new(), 10);
    while let Ok(card) = deck.draw_card() {
        println!("Drew: {}", card.name());
        println!("Play result: {}\n", to_json(&card.play(&mut ctx)));
    }
    println!("Remaining mana: {}", ctx.mana);
}

fn run_batch(games: usize, turns: u32, seed: Option<u64>) {
    println!("=== DataDeck Batch Simulator ===\n");
    println!("Games: {}", games);
    println!("Turns per game: {}", turns);

    let base_seed = resolve_seed(seed);
    println!("Base seed: {}\n", base_seed);

    let factory = FantasyCardFactory::new();
    let strategy = AggressiveStrategy;
    let config = BatchConfig {
        games,
        turns_per_game: turns,
        base_seed,
    };

    let progress = ProgressBar::new(games as u64);
    let start = std::time::Instant::now();
    let summaries: Result<Vec<_>, _> = (0..games)
        .into_par_iter()
        .map(|i| {
            let summary = batch::run_game(
                &factory,
                &strategy,
                base_seed.wrapping_add(i as u64),
                turns,
            );
            progress.inc(1);
            summary
        })
        .collect();
    progress.finish_and_clear();

    match summaries {
        Ok(list) => {
            let elapsed = start.elapsed();
            println!("Batch summary: {}", to_json(&batch::summarize(&config, &list)));
            println!(
                "\n{} games in {:.2?}, completed at {}",
                games,
                elapsed,
                Local::now().format("%Y-%m-%d %H:%M:%S")
            );
        }
        Err(e) => {
            eprintln!("✗ Batch failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_tournament(matches: usize, seed: Option<u64>) {
    println!("=== DataDeck Tournament Platform ===\n");

    let mut platform = TournamentPlatform::new();
    let roster = [
        ("dragon_001", "Fire Dragon", 5, Rarity::Legendary, 1200),
        ("wizard_001", "Ice Wizard", 4, Rarity::Epic, 1150),
        ("knight_001", "Storm Knight", 4, Rarity::Rare, 1180),
        ("golem_001", "Stone Golem", 6, Rarity::Common, 1100),
    ];
    let ids: Vec<&str> = roster.iter().map(|entry| entry.0).collect();
    for (id, name, cost, rarity, rating) in roster {
        platform.register_card(TournamentCard::new(id, name, cost, rarity, rating));
    }

    let seed = resolve_seed(seed);
    println!("Pairing seed: {}\n", seed);
    let mut rng = SimRng::seeded(seed);

    for round in 1..=matches {
        let first = rng.pick_index(ids.len());
        let offset = 1 + rng.pick_index(ids.len() - 1);
        let second = (first + offset) % ids.len();

        match platform.create_match(ids[first], ids[second]) {
            Ok(result) => println!(
                "Match {}: {} defeats {} ({} / {})",
                round, result.winner, result.loser, result.winner_rating, result.loser_rating
            ),
            Err(e) => {
                eprintln!("✗ Match {} failed: {}", round, e);
                std::process::exit(1);
            }
        }
    }

    println!("\nLeaderboard:");
    for (rank, card) in platform.leaderboard().iter().enumerate() {
        println!(
            "{}. {} - Rating: {} ({}-{})",
            rank + 1,
            card.name(),
            card.rating(),
            card.wins(),
            card.losses()
        );
    }

    println!("\nPlatform report: {}", to_json(&platform.report()));
}
