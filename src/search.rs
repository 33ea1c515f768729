use crate::oracle::Oracle;
use crate::state_id::StateID;

/// The window search driver.
///
/// Runs the oracle backwards across a sliding window of size `window_len`
/// over `document`, confirming candidate patterns by direct comparison at the
/// window's current offset. Pure function of its inputs; no I/O, no shared
/// state, O(1) memory beyond `document` and the shrinking confirmation set.
pub(crate) fn run<'p, S: StateID>(oracle: &Oracle<'p, S>, document: &[u8]) -> bool {
    let window_len = oracle.window_len();
    let pattern_count = oracle.pattern_count();

    let mut confirmed = vec![false; pattern_count];
    let mut unconfirmed = pattern_count;
    let mut cursor = 0usize;

    while unconfirmed > 0 && cursor + window_len <= document.len() {
        let window = &document[cursor..cursor + window_len];

        let mut state = oracle.root_id();
        let mut advance = window_len;
        let mut candidate_state = None;

        for k in (0..window_len).rev() {
            match oracle.transition(state, window[k]) {
                Some(next) => {
                    state = next;
                    advance -= 1;
                    if !oracle.terms(state).is_empty() {
                        candidate_state = Some(state);
                        break;
                    }
                }
                None => break,
            }
        }

        cursor += advance;

        if let Some(state) = candidate_state {
            for &(pattern_id, pattern_len) in oracle.terms(state) {
                if confirmed[pattern_id] {
                    continue;
                }
                let candidate = &document[cursor..];
                if candidate.len() >= pattern_len
                    && &candidate[..pattern_len] == oracle.pattern_bytes(pattern_id)
                {
                    confirmed[pattern_id] = true;
                    unconfirmed -= 1;
                }
            }
        }

        // Advance-zero guard: a terminal state can be reached without the
        // cursor having moved (window_len == 1 and the single symbol
        // examined is immediately a match). Without this, the outer loop
        // would re-examine the same window forever.
        if advance == 0 {
            cursor += 1;
        }
    }

    unconfirmed == 0
}

/// Reference implementation: one direct substring scan per pattern.
/// Serves as the testing oracle for [`crate::search_sbom`].
pub(crate) fn naive(document: &[u8], patterns: &[&[u8]]) -> bool {
    patterns.iter().all(|p| contains(document, p))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
