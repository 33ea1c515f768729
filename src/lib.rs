//! Set Backwards Oracle Matching (SBOM): does a document contain every
//! pattern in a set as a substring?
//!
//! This crate answers one question — conjunctive substring membership — by
//! building a shared automaton over the *reversed* prefixes of a pattern set
//! (the "factor oracle" of Navarro & Raffinot) and sliding a window backwards
//! across the document, skipping ahead in blocks larger than one byte
//! whenever the oracle dies. It does not report match positions, counts, or
//! which patterns matched; see [`search_naive`] and [`search_sbom`].
//!
//! # Alphabet
//!
//! Symbols are bytes. Both construction and search operate on `&[u8]`
//! (`&str` inputs are converted via [`str::as_bytes`] at the public entry);
//! this makes matching UTF-8-byte-exact rather than code-point aware, which
//! is intentional — this crate does not do Unicode normalisation or case
//! folding.
use std::collections::HashSet;

mod error;
mod oracle;
mod search;
mod state_id;
mod trie;

pub use error::SbomError;
pub use oracle::Oracle;
pub use state_id::StateID;

#[cfg(feature = "dot-export")]
pub use oracle::dot::to_dot;

/// Reference implementation: returns true iff every pattern in `patterns`
/// occurs as a substring of `document`, via one direct scan per pattern.
///
/// This is the testing oracle for [`search_sbom`], not a faster alternative
/// to it.
pub fn search_naive<'p, I>(document: &str, patterns: I) -> Result<bool, SbomError>
where
    I: IntoIterator<Item = &'p str>,
{
    let patterns = prepare_patterns(patterns)?;
    Ok(search::naive(document.as_bytes(), &patterns))
}

/// Builds the oracle from `patterns` and runs the window search driver
/// against `document` once.
///
/// Equivalent to `Oracle::new(patterns)?.search(document)`, for callers who
/// only need a single search and don't want to hold onto the built
/// automaton. Use [`Oracle`] directly to amortise construction across many
/// documents.
pub fn search_sbom<'p, I>(document: &str, patterns: I) -> Result<bool, SbomError>
where
    I: IntoIterator<Item = &'p str>,
{
    let oracle: Oracle<'p, usize> = Oracle::new(patterns)?;
    Ok(oracle.search(document))
}

/// Validates and deduplicates a raw pattern iterator into the `&[u8]` slice
/// every builder downstream expects: non-empty, every pattern non-empty,
/// exact-byte duplicates coalesced in first-seen order.
pub(crate) fn prepare_patterns<'p, I>(patterns: I) -> Result<Vec<&'p [u8]>, SbomError>
where
    I: IntoIterator<Item = &'p str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for (index, pattern) in patterns.into_iter().enumerate() {
        let bytes = pattern.as_bytes();
        if bytes.is_empty() {
            return Err(SbomError::EmptyPattern { index });
        }
        if seen.insert(bytes) {
            out.push(bytes);
        }
    }

    if out.is_empty() {
        return Err(SbomError::EmptyPatternSet);
    }

    Ok(out)
}
