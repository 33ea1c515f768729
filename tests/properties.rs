//! Property tests for soundness, completeness, idempotence and order
//! insensitivity, checked against randomly generated documents and pattern
//! sets.

use proptest::collection::vec as pvec;
use proptest::prelude::*;

/// A small alphabet keeps pattern/document overlap (and therefore match
/// density) high enough that these properties are actually exercised, rather
/// than degenerating to "nothing ever matches."
fn symbol() -> impl Strategy<Value = char> {
    prop_oneof![Just('a'), Just('b'), Just('c')]
}

fn word() -> impl Strategy<Value = String> {
    pvec(symbol(), 1..6).prop_map(|chars| chars.into_iter().collect())
}

fn document_and_patterns() -> impl Strategy<Value = (String, Vec<String>)> {
    (pvec(word(), 1..40), pvec(word(), 1..8)).prop_map(|(doc_words, patterns)| {
        (doc_words.join(" "), patterns)
    })
}

proptest! {
    #[test]
    fn sbom_agrees_with_naive((document, patterns) in document_and_patterns()) {
        let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
        let naive = sbom::search_naive(&document, refs.iter().copied()).unwrap();
        let oracle = sbom::search_sbom(&document, refs.iter().copied()).unwrap();
        prop_assert_eq!(naive, oracle);
    }

    #[test]
    fn idempotent((document, patterns) in document_and_patterns()) {
        let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
        let first = sbom::search_sbom(&document, refs.iter().copied()).unwrap();
        let second = sbom::search_sbom(&document, refs.iter().copied()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn order_insensitive((document, mut patterns) in document_and_patterns()) {
        let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
        let forward = sbom::search_sbom(&document, refs.iter().copied()).unwrap();

        patterns.reverse();
        let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
        let backward = sbom::search_sbom(&document, refs.iter().copied()).unwrap();

        prop_assert_eq!(forward, backward);
    }
}
