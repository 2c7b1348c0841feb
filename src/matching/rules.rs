// Domain boost rules.
//
// Each rule pairs a set of item-side terms with a set of requirement-side
// terms. Matching is a raw substring test on the lowercased texts, not a
// keyword lookup, so "ui" also hits inside longer words. When both sides
// hit, the rule proposes a fixed score and explanation.

/// A hard-coded heuristic that overrides keyword overlap when specific
/// term pairs co-occur.
#[derive(Debug, Clone, Copy)]
pub struct BoostRule {
    /// At least one must appear in the item text
    pub item_terms: &'static [&'static str],
    /// At least one must appear in the requirement text
    pub requirement_terms: &'static [&'static str],
    pub score: u8,
    pub reasoning: &'static str,
}

impl BoostRule {
    /// Whether the rule fires for this (item, requirement) text pair.
    pub fn matches(&self, item_text: &str, requirement_text: &str) -> bool {
        self.item_terms.iter().any(|t| item_text.contains(t))
            && self.requirement_terms.iter().any(|t| requirement_text.contains(t))
    }
}

/// Rules in evaluation order.
pub const BOOST_RULES: &[BoostRule] = &[
    BoostRule {
        item_terms: &["payment", "gateway"],
        requirement_terms: &["order", "sales"],
        score: 88,
        reasoning: "Payment/gateway terms match with Sales Order workflows.",
    },
    BoostRule {
        item_terms: &["dark mode", "ui", "color"],
        requirement_terms: &["dashboard", "status"],
        score: 92,
        reasoning: "UI/UX terms correlate with Dashboard functionality.",
    },
    BoostRule {
        item_terms: &["login", "auth"],
        requirement_terms: &["onboarding", "employee"],
        score: 75,
        reasoning: "Authentication patterns detected in onboarding context.",
    },
    BoostRule {
        item_terms: &["invoice", "pdf"],
        requirement_terms: &["invoice"],
        score: 98,
        reasoning: "Direct keyword match with Invoice Generation requirement.",
    },
    BoostRule {
        item_terms: &["database", "index", "performance"],
        requirement_terms: &["production", "planning"],
        score: 65,
        reasoning: "Technical optimization task related to production planning.",
    },
    BoostRule {
        item_terms: &["security", "audit"],
        requirement_terms: &["close", "financial"],
        score: 72,
        reasoning: "Security/audit requirements match financial period processes.",
    },
];
