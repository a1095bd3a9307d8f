//! Fuzzy matching and ranking
//!
//! - [`FuzzyMatcher`] scores one candidate against one query
//! - [`rank`]/[`rank_by`] apply it across a collection

pub mod fuzzy;
pub mod rank;
pub mod scan;

pub use fuzzy::{FuzzyMatcher, MatchScore};
pub use rank::{rank, rank_by, RankedMatch};
pub use scan::ScanMode;
