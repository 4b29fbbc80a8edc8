use esg_analysis::keywords::KeywordCatalog;
use esg_analysis::scoring::EsgScoreEngine;
use esg_analysis::sentiment::VaderSentiment;
use esg_core::config::MatchMode;
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "탄소", "배출", "안전", "노동", "이사회", "emission", "safety", "board", "good", "fraud",
    "not", "very", "but", "report", "기업", "발표",
];

fn catalog() -> KeywordCatalog {
    KeywordCatalog::from_yaml("E: [탄소, 배출, emission]\nS: [안전, 노동, safety]\nG: [이사회, board]\n").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..30).prop_map(|words| words.join(" "))
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "DART", "Reuters", "blog", "SEC filing"]).prop_map(String::from)
}

proptest! {
    #[test]
    fn score_is_deterministic(text in text_strategy(), source in source_strategy()) {
        let catalog = catalog();
        let sentiment = VaderSentiment::new();
        let a = EsgScoreEngine::new(&catalog, &sentiment).score(&text, &source);
        let b = EsgScoreEngine::new(&catalog, &sentiment).score(&text, &source);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn presence_never_exceeds_occurrence(text in text_strategy()) {
        let catalog = catalog();
        let presence = catalog.hits(&text, MatchMode::Presence);
        let occurrence = catalog.hits(&text, MatchMode::Occurrence);
        prop_assert!(presence.env <= occurrence.env);
        prop_assert!(presence.soc <= occurrence.soc);
        prop_assert!(presence.gov <= occurrence.gov);
    }

    #[test]
    fn presence_is_bounded_by_catalog_size(text in text_strategy()) {
        let catalog = catalog();
        let hits = catalog.hits(&text, MatchMode::Presence);
        prop_assert!(hits.env <= 3);
        prop_assert!(hits.soc <= 3);
        prop_assert!(hits.gov <= 2);
    }

    #[test]
    fn score_has_at_most_three_decimals(text in text_strategy(), source in source_strategy()) {
        let catalog = catalog();
        let sentiment = VaderSentiment::new();
        let score = EsgScoreEngine::new(&catalog, &sentiment).esg_score(&text, &source);
        let scaled = score * 1000.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}
