// Matching engine — keyword extraction, boost rules, per-item scoring,
// and batch ranking.

pub mod keywords;
pub mod ranker;
pub mod rules;
pub mod scorer;
