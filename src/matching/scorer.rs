// Match scoring: one unlinked item against the whole requirement catalog.
//
// Two layers per requirement:
//   1. Keyword overlap — min(95, 40 + 15 * shared) when anything is shared.
//   2. Boost rules — a firing rule lifts the score to its fixed value and
//      takes over the reasoning, but only if that is a strict increase.
//
// The best requirement wins, first in catalog order on ties. If nothing
// reaches CONFIDENCE_THRESHOLD we still return *something*: a random
// requirement with a random low score, drawn from the caller's RNG so tests
// can pin it.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use super::keywords::{extract_keywords, shared_keywords};
use super::rules::BOOST_RULES;
use crate::catalog::models::{Requirement, UnlinkedItem};

/// Below this best score the fallback branch is taken.
pub const CONFIDENCE_THRESHOLD: u8 = 30;

/// Scores assigned by the fallback branch.
pub const FALLBACK_SCORES: RangeInclusive<u8> = 20..=44;

pub const FALLBACK_REASONING: &str =
    "Low confidence match. Consider creating a new requirement or reviewing manually.";

const BASE_SCORE: u32 = 40;
const PER_KEYWORD: u32 = 15;
const MAX_KEYWORD_SCORE: u32 = 95;

/// Score and explanation for one (item, requirement) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub score: u8,
    pub reasoning: String,
}

/// The winning requirement for an item.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub requirement: Requirement,
    pub score: u8,
    pub reasoning: String,
    /// True when the fallback branch picked the requirement
    pub low_confidence: bool,
}

/// Keyword-overlap score for `n` shared keywords.
pub fn keyword_score(shared: usize) -> u8 {
    if shared == 0 {
        return 0;
    }
    let raw = BASE_SCORE.saturating_add(PER_KEYWORD.saturating_mul(shared as u32));
    raw.min(MAX_KEYWORD_SCORE) as u8
}

fn keyword_reasoning(shared: &[String]) -> String {
    let quoted: Vec<String> = shared.iter().take(3).map(|k| format!("\"{k}\"")).collect();
    format!(
        "Matched based on {} shared keywords: {}",
        shared.len(),
        quoted.join(", ")
    )
}

/// Score one requirement given the item's lowercased text and keywords.
pub fn score_pair(item_text: &str, item_keywords: &[String], requirement: &Requirement) -> PairScore {
    let req_text = requirement.search_text();
    let req_keywords = extract_keywords(&req_text);
    let shared = shared_keywords(item_keywords, &req_keywords);

    let mut score = keyword_score(shared.len());
    let mut reasoning = if shared.is_empty() {
        String::new()
    } else {
        keyword_reasoning(&shared)
    };

    for rule in BOOST_RULES {
        if rule.score > score && rule.matches(item_text, &req_text) {
            score = rule.score;
            reasoning = rule.reasoning.to_string();
        }
    }

    PairScore { score, reasoning }
}

/// Find the best requirement for `item`. Returns `None` only when the
/// catalog is empty.
pub fn score_item<R: Rng>(
    item: &UnlinkedItem,
    catalog: &[Requirement],
    rng: &mut R,
) -> Option<MatchResult> {
    if catalog.is_empty() {
        return None;
    }

    let item_text = item.search_text();
    let item_keywords = extract_keywords(&item_text);

    let mut best: Option<(usize, PairScore)> = None;
    for (idx, requirement) in catalog.iter().enumerate() {
        let pair = score_pair(&item_text, &item_keywords, requirement);
        let best_score = best.as_ref().map_or(0, |(_, b)| b.score);
        if pair.score > best_score {
            best = Some((idx, pair));
        }
    }

    match best {
        Some((idx, pair)) if pair.score >= CONFIDENCE_THRESHOLD => {
            debug!(
                item = %item.id,
                requirement = %catalog[idx].req_id,
                score = pair.score,
                "Confident match"
            );
            Some(MatchResult {
                requirement: catalog[idx].clone(),
                score: pair.score,
                reasoning: pair.reasoning,
                low_confidence: false,
            })
        }
        _ => {
            let idx = rng.random_range(0..catalog.len());
            let score = rng.random_range(FALLBACK_SCORES);
            debug!(
                item = %item.id,
                requirement = %catalog[idx].req_id,
                score,
                "No confident match, using fallback"
            );
            Some(MatchResult {
                requirement: catalog[idx].clone(),
                score,
                reasoning: FALLBACK_REASONING.to_string(),
                low_confidence: true,
            })
        }
    }
}
