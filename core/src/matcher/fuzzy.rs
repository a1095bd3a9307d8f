//! Fuzzy matching algorithm for launcher search

use super::scan::{ScanMode, Scanner};
use serde::Serialize;

/// Base score for every matched query character
pub const MATCH_SCORE: i64 = 10;

/// Growth of the consecutive-match bonus per adjacent match
pub const CONSECUTIVE_STEP: i64 = 5;

/// Bonus for a match at the start of the text or after a non-alphanumeric character
pub const WORD_BOUNDARY_BONUS: i64 = 15;

/// Bonus when the candidate character has the same case as the query character
pub const EXACT_CASE_BONUS: i64 = 5;

/// Match score with detailed information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    /// Overall score; zero means the candidate did not match
    pub score: i64,

    /// Matched character positions in the target string
    pub matched_positions: Vec<usize>,
}

impl MatchScore {
    /// A failed match: zero score, no positions
    pub fn none() -> Self {
        Self::default()
    }

    /// A synthetic score for items included without running the matcher
    pub fn fixed(score: i64) -> Self {
        Self {
            score,
            matched_positions: Vec::new(),
        }
    }

    /// Whether every query character was matched
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Greedy subsequence matcher
///
/// Query characters are located left to right, each at the first
/// case-insensitive occurrence after the previous one. There is no
/// backtracking, so an early match can rule out a better alignment later in
/// the text; the result is always deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher {
    mode: ScanMode,
}

impl FuzzyMatcher {
    /// Create a new fuzzy matcher
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    /// Score `text` against `query`
    pub fn score(&self, text: &str, query: &str) -> MatchScore {
        if query.is_empty() || text.is_empty() {
            return MatchScore::none();
        }

        let text_chars: Vec<char> = text.chars().collect();
        let query_chars: Vec<char> = query.chars().collect();
        let folded: Vec<char> = text_chars.iter().map(|&c| fold(c)).collect();
        let scanner = Scanner::new(&folded, self.mode, query_chars.len());

        let mut matched_positions = Vec::with_capacity(query_chars.len());
        let mut score = 0;
        let mut cursor = 0;
        let mut streak = 0;

        for &query_char in &query_chars {
            let Some(found) = scanner.find(fold(query_char), cursor) else {
                return MatchScore::none();
            };

            let mut char_score = MATCH_SCORE;

            if matched_positions.last().is_some_and(|&prev| prev + 1 == found) {
                streak += CONSECUTIVE_STEP;
                char_score += streak;
            } else {
                streak = 0;
            }

            if found == 0 || !folded[found - 1].is_alphanumeric() {
                char_score += WORD_BOUNDARY_BONUS;
            }

            if text_chars[found] == query_char {
                char_score += EXACT_CASE_BONUS;
            }

            score += char_score;
            matched_positions.push(found);
            cursor = found + 1;
        }

        MatchScore {
            score,
            matched_positions,
        }
    }

    /// Match a query against a target string, `None` when it does not match
    pub fn match_string(&self, query: &str, target: &str) -> Option<MatchScore> {
        let result = self.score(target, query);
        result.is_match().then_some(result)
    }
}

/// Single-character case fold; keeps a one-to-one mapping with the input so
/// positions in folded text are positions in the original.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(text: &str, query: &str) -> MatchScore {
        FuzzyMatcher::default().score(text, query)
    }

    /// Reference acceptance check: case-insensitive subsequence
    fn is_subsequence(text: &str, query: &str) -> bool {
        let mut text = text.chars().map(fold);
        query.chars().map(fold).all(|q| text.any(|t| t == q))
    }

    #[test]
    fn test_prefix_match_scoring() {
        // m: 10 + 15 (start) + 5 (case) = 30
        // a: 10 + 5 (streak) + 5 (case) = 20
        // i: 10 + 10 (streak) + 5 (case) = 25
        let result = score("main.rs", "mai");
        assert_eq!(result.score, 75);
        assert_eq!(result.matched_positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_word_boundary_and_gap() {
        // m: 30, r after '.': 10 + 15 + 5 = 30, no streak across the gap
        let result = score("main.rs", "mr");
        assert_eq!(result.score, 60);
        assert_eq!(result.matched_positions, vec![0, 5]);
    }

    #[test]
    fn test_case_bonus_only_for_exact_case() {
        let lower = score("Firefox", "f");
        let upper = score("Firefox", "F");
        assert_eq!(upper.score - lower.score, EXACT_CASE_BONUS);
        assert_eq!(lower.matched_positions, vec![0]);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        // a(0): 30, b(1): 10+5+5 = 20, c(3) after '-': 10+15+5 = 30, d(4): 10+5+5 = 20
        let result = score("ab-cd", "abcd");
        assert_eq!(result.matched_positions, vec![0, 1, 3, 4]);
        assert_eq!(result.score, 30 + 20 + 30 + 20);
    }

    #[test]
    fn test_no_partial_credit() {
        let result = score("main.rs", "mz");
        assert_eq!(result, MatchScore::none());
        assert!(FuzzyMatcher::default().match_string("mz", "main.rs").is_none());
    }

    #[test]
    fn test_out_of_order_rejected() {
        assert!(!score("abc", "cba").is_match());
        assert!(score("abc", "ac").is_match());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!score("", "a").is_match());
        assert!(!score("abc", "").is_match());
    }

    #[test]
    fn test_greedy_leftmost_alignment() {
        // The first 'b' is taken even though "bc" later would be contiguous
        let result = score("ab_xbc", "bc");
        assert_eq!(result.matched_positions, vec![1, 5]);
    }

    #[test]
    fn test_unicode_positions_are_char_indices() {
        let result = score("Café Münster", "fm");
        assert_eq!(result.matched_positions, vec![2, 5]);
    }

    #[test]
    fn test_threshold_inputs_agree() {
        let scalar = FuzzyMatcher::new(ScanMode::Scalar);
        let auto = FuzzyMatcher::new(ScanMode::Auto);
        for len in 60..70 {
            let text = format!("{}Report_Final.PDF", "x".repeat(len));
            for query in ["rfp", "report", "final.pdf", "xxr"] {
                assert_eq!(scalar.score(&text, query), auto.score(&text, query));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_accepts_iff_subsequence(text in "[a-dA-D_. ]{0,40}", query in "[a-dA-D]{1,5}") {
            let result = score(&text, &query);
            prop_assert_eq!(result.is_match(), is_subsequence(&text, &query));
            if !result.is_match() {
                prop_assert!(result.matched_positions.is_empty());
            } else {
                prop_assert_eq!(result.matched_positions.len(), query.chars().count());
            }
        }

        #[test]
        fn prop_scalar_and_block_scan_agree(text in "[a-cA-C/_ é]{0,140}", query in "[a-cA-C_é]{1,6}") {
            let scalar = FuzzyMatcher::new(ScanMode::Scalar).score(&text, &query);
            let block = FuzzyMatcher::new(ScanMode::Accelerated).score(&text, &query);
            let auto = FuzzyMatcher::new(ScanMode::Auto).score(&text, &query);
            prop_assert_eq!(&scalar, &block);
            prop_assert_eq!(&scalar, &auto);
        }

        #[test]
        fn prop_long_ascii_texts_agree(text in "[a-z0-9._-]{60,70}", query in "[a-zA-Z.]{3,6}") {
            let scalar = FuzzyMatcher::new(ScanMode::Scalar).score(&text, &query);
            let auto = FuzzyMatcher::new(ScanMode::Auto).score(&text, &query);
            prop_assert_eq!(scalar, auto);
        }
    }
}
