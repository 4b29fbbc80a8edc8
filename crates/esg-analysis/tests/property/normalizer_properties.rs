use esg_analysis::text::{clean, TextNormalizer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn clean_is_idempotent(s in ".{0,200}") {
        let once = clean(&s);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn mixed_script_clean_is_idempotent(s in "[a-zA-Z0-9가-힣 .,!?:/\\-_\t\n]{0,120}") {
        let once = clean(&s);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn output_has_only_allowed_characters(s in ".{0,200}") {
        let out = clean(&s);
        prop_assert!(out.chars().all(|c| c == ' '
            || c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || ('가'..='힣').contains(&c)));
    }

    #[test]
    fn output_is_trimmed_and_single_spaced(s in ".{0,200}") {
        let out = clean(&s);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn normalizer_matches_free_function(s in ".{0,100}") {
        prop_assert_eq!(TextNormalizer::new().clean(&s), clean(&s));
    }
}
