use news_rank::{rank_scored, search, NewsArticle, SearchMode};

fn main() {
    let articles = vec![
        NewsArticle::with_title("Central bank holds rates")
            .description("Policy makers keep interest rates unchanged")
            .content("Inflation is slowing, the bank said."),
        NewsArticle::with_title("Storm hits the coast")
            .description("Thousands without power"),
        NewsArticle::with_title("Chip maker beats forecasts")
            .content("Strong demand lifted profits while interest costs fell."),
    ];

    let hits = rank_scored(&articles, "interest rates");
    println!("Semantic results:");
    for (article, score) in hits.iter() {
        println!("  {:.4}  {}", score, article.title);
    }

    let filtered = search(&articles, "storm", SearchMode::Text);
    println!("Text results: {}", filtered.len());
    for article in filtered {
        println!("  {}", article.title);
    }
}
