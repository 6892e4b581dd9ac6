use criterion::{black_box, criterion_group, criterion_main, Criterion};

use set_game::cards::deck;
use set_game::rules::{find_sets, has_set};
use set_game::SetGame;

fn bench_set_search(c: &mut Criterion) {
    let full_deck = deck::generate();
    c.bench_function("find_sets_full_deck", |b| {
        b.iter(|| find_sets(black_box(&full_deck)))
    });

    let mut game = SetGame::new(42);
    game.add_three_more_cards();
    let table = game.visible_cards();
    c.bench_function("has_set_table_15", |b| b.iter(|| has_set(black_box(&table))));
}

fn bench_choose(c: &mut Criterion) {
    c.bench_function("choose_round", |b| {
        b.iter(|| {
            let mut game = SetGame::new(7);
            let table = game.visible_cards();
            for card in table.iter().take(4) {
                black_box(game.choose(card.id));
            }
        })
    });
}

criterion_group!(benches, bench_set_search, bench_choose);
criterion_main!(benches);
