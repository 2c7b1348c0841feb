// Recommendation ranking across a batch of items.

use crate::catalog::models::{AiRecommendation, UnlinkedItem};

use super::scorer::MatchResult;

/// Turn an item's best match into the record the UI consumes.
pub fn to_recommendation(item: &UnlinkedItem, result: MatchResult) -> AiRecommendation {
    AiRecommendation {
        item_id: item.id.clone(),
        recommended_req_id: result.requirement.id,
        req_title: result.requirement.title,
        req_number: result.requirement.req_id,
        score: result.score,
        reasoning: result.reasoning,
        low_confidence: result.low_confidence,
    }
}

/// Sort by descending score. `sort_by` is stable, so equal scores keep the
/// order the items were resolved in.
pub fn rank(recommendations: &mut [AiRecommendation]) {
    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
}
