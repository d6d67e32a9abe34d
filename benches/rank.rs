use criterion::{black_box, criterion_group, criterion_main, Criterion};
use news_rank::{rank, NewsArticle};

const WORDS: &[&str] = &[
    "market", "rates", "election", "storm", "chip", "energy", "football", "vaccine",
    "climate", "budget", "startup", "court", "housing", "oil", "satellite", "trade",
];

/// Deterministic synthetic page of articles
fn articles(n: usize, words_per_doc: usize) -> Vec<NewsArticle> {
    let mut state = 0x2545_f491_u32;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        WORDS[state as usize % WORDS.len()]
    };
    (0..n)
        .map(|i| {
            let body: Vec<&str> = (0..words_per_doc).map(|_| next()).collect();
            NewsArticle::with_title(format!("Article {} {}", i, next()))
                .description(format!("{} {}", next(), next()))
                .content(body.join(" "))
        })
        .collect()
}

fn rank_benchmark(c: &mut Criterion) {
    let page = articles(30, 200);
    c.bench_function("rank_30_articles", |b| {
        b.iter(|| rank(black_box(&page), black_box("climate energy budget")))
    });

    let large = articles(300, 400);
    c.bench_function("rank_300_articles", |b| {
        b.iter(|| rank(black_box(&large), black_box("oil trade")))
    });
}

criterion_group!(benches, rank_benchmark);
criterion_main!(benches);
