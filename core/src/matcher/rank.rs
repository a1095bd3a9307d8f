//! Ranking of candidate collections

use super::fuzzy::{FuzzyMatcher, MatchScore};

/// A candidate that matched, referenced by its index in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch {
    /// Index of the candidate in the slice passed to the ranker
    pub index: usize,

    /// Match details
    pub score: MatchScore,
}

/// Rank string-like candidates against `query`.
///
/// `limit == 0` means unlimited.
pub fn rank<S: AsRef<str>>(
    matcher: &FuzzyMatcher,
    candidates: &[S],
    query: &str,
    limit: usize,
) -> Vec<RankedMatch> {
    rank_by(candidates, query, limit, |candidate, query| {
        matcher.score(candidate.as_ref(), query)
    })
}

/// Rank arbitrary candidates with a caller-supplied scorer.
///
/// An empty query yields nothing. Non-matches are dropped, the rest sorted by
/// descending score; the sort is stable so equal scores keep input order.
pub fn rank_by<T, F>(candidates: &[T], query: &str, limit: usize, scorer: F) -> Vec<RankedMatch>
where
    F: Fn(&T, &str) -> MatchScore,
{
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<RankedMatch> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let score = scorer(candidate, query);
            score.is_match().then_some(RankedMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.score.cmp(&a.score.score));

    if limit > 0 {
        matches.truncate(limit);
    }

    matches
}
