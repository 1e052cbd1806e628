use criterion::{black_box, criterion_group, criterion_main, Criterion};
use datadeck::card::{Rarity, TournamentCard};
use datadeck::game::deck::Deck;
use datadeck::rng::SimRng;
use datadeck::simulation::batch::run_game;
use datadeck::simulation::factory::{CardFactory, FantasyCardFactory};
use datadeck::simulation::strategy::AggressiveStrategy;
use datadeck::tournament::TournamentPlatform;

fn benchmark_single_game(c: &mut Criterion) {
    let factory = FantasyCardFactory::new();
    let strategy = AggressiveStrategy;

    c.bench_function("single_game_seed_12345", |b| {
        b.iter(|| {
            run_game(
                black_box(&factory),
                black_box(&strategy),
                black_box(12345),
                black_box(5),
            )
        })
    });
}

fn benchmark_100_games(c: &mut Criterion) {
    let factory = FantasyCardFactory::new();
    let strategy = AggressiveStrategy;

    c.bench_function("100_games", |b| {
        b.iter(|| {
            for seed in 0..100 {
                let _ = run_game(&factory, &strategy, black_box(seed), black_box(5));
            }
        })
    });
}

fn benchmark_deck_shuffle(c: &mut Criterion) {
    let factory = FantasyCardFactory::new();
    let mut deck = Deck::new();
    for _ in 0..10 {
        deck.add_card(factory.create_creature("dragon").expect("card"));
        deck.add_card(factory.create_creature("goblin").expect("card"));
        deck.add_card(factory.create_spell("fireball").expect("card"));
        deck.add_card(factory.create_artifact("mana_ring").expect("card"));
    }
    let mut rng = SimRng::seeded(42);

    c.bench_function("shuffle_40_cards", |b| {
        b.iter(|| deck.shuffle(black_box(&mut rng)))
    });
}

fn benchmark_tournament_matches(c: &mut Criterion) {
    c.bench_function("100_tournament_matches", |b| {
        b.iter(|| {
            let mut platform = TournamentPlatform::new();
            platform.register_card(TournamentCard::new(
                "dragon_001",
                "Fire Dragon",
                5,
                Rarity::Legendary,
                1200,
            ));
            platform.register_card(TournamentCard::new(
                "wizard_001",
                "Ice Wizard",
                4,
                Rarity::Epic,
                1150,
            ));
            for _ in 0..100 {
                let _ = platform.create_match(black_box("dragon_001"), black_box("wizard_001"));
            }
            platform.report()
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_game,
    benchmark_100_games,
    benchmark_deck_shuffle,
    benchmark_tournament_matches
);
criterion_main!(benches);
