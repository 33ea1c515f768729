//! Integration tests covering three query-set categories against one
//! document: complete (every pattern present), overlapping (some present,
//! some absent), and disjoint (none present) — checked against both the
//! naive reference and the SBOM engine.

const DOCUMENT: &str = "\
This sample paragraph exists to confirm the behaviour of a conjunctive \
multi-pattern text search engine built around a factor oracle construction. \
It describes an online text search technique known as \
Set-Backwards-Oracle-Matching.";

const COMPLETE_SUBSET_QUERIES: &[&[&str]] = &[
    &["sample paragraph", "confirm the behaviour", "text search"],
    &[
        "paragraph",
        "Set-Backwards-Oracle-Matching",
        "multi-pattern",
    ],
    &["text"],
];

const OVERLAPPING_SET_QUERIES: &[&[&str]] = &[
    &["sample paragraph", "unrelated paragraph"],
    &["paragraph", "diagram of results"],
    &["factor oracle construction", "diagram of results"],
];

const DISJOINT_SET_QUERIES: &[&[&str]] = &[
    &["completely absent phrase"],
    &["textual nonsense", "unrelated paragraph"],
    &["disjoint", "queries"],
];

#[test]
fn complete_queries_are_true() {
    for patterns in COMPLETE_SUBSET_QUERIES {
        assert_eq!(
            sbom::search_sbom(DOCUMENT, patterns.iter().copied()).unwrap(),
            true,
            "patterns: {patterns:?}"
        );
        assert_eq!(
            sbom::search_naive(DOCUMENT, patterns.iter().copied()).unwrap(),
            true,
            "patterns: {patterns:?}"
        );
    }
}

#[test]
fn overlapping_queries_are_false() {
    for patterns in OVERLAPPING_SET_QUERIES {
        assert_eq!(
            sbom::search_sbom(DOCUMENT, patterns.iter().copied()).unwrap(),
            false,
            "patterns: {patterns:?}"
        );
        assert_eq!(
            sbom::search_naive(DOCUMENT, patterns.iter().copied()).unwrap(),
            false,
            "patterns: {patterns:?}"
        );
    }
}

#[test]
fn disjoint_queries_are_false() {
    for patterns in DISJOINT_SET_QUERIES {
        assert_eq!(
            sbom::search_sbom(DOCUMENT, patterns.iter().copied()).unwrap(),
            false,
            "patterns: {patterns:?}"
        );
        assert_eq!(
            sbom::search_naive(DOCUMENT, patterns.iter().copied()).unwrap(),
            false,
            "patterns: {patterns:?}"
        );
    }
}
