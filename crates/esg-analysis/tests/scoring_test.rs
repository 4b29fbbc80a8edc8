//! Score formula, source weighting and determinism.

use esg_analysis::keywords::KeywordCatalog;
use esg_analysis::scoring::{round_to, source_weight, EsgScoreEngine};
use esg_analysis::sentiment::{VaderSentiment, SentimentScorer};
use esg_analysis::text::clean;
use esg_core::config::MatchMode;

fn catalog() -> KeywordCatalog {
    KeywordCatalog::from_yaml("E: [emission, 탄소]\nS: [safety, 안전]\nG: [board, 이사회]\n").unwrap()
}

#[test]
fn test_single_environmental_hit_scores_point_six() {
    let catalog = KeywordCatalog::from_yaml("E: [emission]\nS: []\nG: []\n").unwrap();
    let sentiment = VaderSentiment::new();
    let engine = EsgScoreEngine::new(&catalog, &sentiment);
    let text = clean("Emission report.");
    assert_eq!(sentiment.compound(&text), 0.0);
    assert_eq!(engine.esg_score(&text, ""), 0.6);
}

#[test]
fn test_regulatory_source_multiplies_by_1_30() {
    let catalog = catalog();
    let sentiment = VaderSentiment::new();
    let engine = EsgScoreEngine::new(&catalog, &sentiment);
    let text = clean("탄소 안전 이사회 공시");
    let plain = engine.esg_score(&text, "");
    let regulated = engine.esg_score(&text, "금융감독원 DART 공시");
    assert!((regulated - round_to(plain * 1.30, 3)).abs() < 1e-9);
    assert_eq!(source_weight("SEC filing"), 1.30);
    assert_eq!(source_weight("Bloomberg"), 1.15);
    assert_eq!(source_weight("blog"), 1.0);
}

#[test]
fn test_regulatory_marker_wins_over_wire() {
    assert_eq!(source_weight("Reuters via SEC"), 1.30);
}

#[test]
fn test_same_input_same_score() {
    let catalog = catalog();
    let sentiment = VaderSentiment::new();
    let engine = EsgScoreEngine::new(&catalog, &sentiment);
    let text = clean("Strong safety record but board faces fraud lawsuit");
    let first = engine.score(&text, "Reuters");
    for _ in 0..10 {
        assert_eq!(engine.score(&text, "Reuters"), first);
    }
    let other = EsgScoreEngine::new(&catalog, &sentiment);
    assert_eq!(other.score(&text, "Reuters"), first);
}

#[test]
fn test_presence_counts_each_term_once() {
    let catalog = catalog();
    let sentiment = VaderSentiment::new();
    let text = clean("탄소 탄소 탄소 emission");
    let presence = EsgScoreEngine::new(&catalog, &sentiment).score(&text, "");
    let occurrence = EsgScoreEngine::new(&catalog, &sentiment)
        .with_match_mode(MatchMode::Occurrence)
        .score(&text, "");
    assert_eq!(presence.hits.env, 2);
    assert_eq!(occurrence.hits.env, 4);
    assert_eq!(presence.score, 1.2);
    assert_eq!(occurrence.score, 2.4);
}

#[test]
fn test_sentiment_moves_score() {
    let catalog = catalog();
    let sentiment = VaderSentiment::new();
    let engine = EsgScoreEngine::new(&catalog, &sentiment);
    let good = engine.score(&clean("Excellent board."), "");
    let bad = engine.score(&clean("Terrible board."), "");
    // excellent 2.7, terrible -2.1 on the VADER scale
    assert_eq!(good.sentiment, 0.5719);
    assert_eq!(bad.sentiment, -0.4767);
    assert_eq!(good.score, round_to(0.4 + 3.0 * 0.5719, 3));
    assert_eq!(bad.score, round_to(0.4 - 3.0 * 0.4767, 3));
}
