/// Errors surfaced at the public boundary of this crate.
///
/// These are the only two ways a caller can misuse [`crate::Oracle::new`],
/// [`crate::search_sbom`] or [`crate::search_naive`]. Anything else that goes
/// wrong is an internal invariant violation and panics with a diagnostic
/// instead of being threaded through `Result`.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SbomError {
    /// The pattern set contained no patterns at all.
    #[error("pattern set is empty; at least one pattern is required")]
    EmptyPatternSet,

    /// Some pattern in the set had zero length.
    #[error("pattern at index {index} is empty")]
    EmptyPattern {
        /// Position of the offending pattern in the caller's iteration order.
        index: usize,
    },
}
