// New-requirement drafts for items nothing matched well.
//
// The draft is derived purely from the item's own text: a cleaned-up title
// shaped by the item type, a templated description, a keyword-inferred
// requirement type, and the item's priority.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::catalog::models::{ItemType, NewRequirementSuggestion, RequirementType, UnlinkedItem};

pub const DESCRIPTION_PREFIX: &str = "This requirement covers the functionality related to: ";

static QA_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:test|verify|check|ensure)\s+").expect("valid prefix pattern"));

static QA_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:test|testing)$").expect("valid suffix pattern"));

/// Substring groups tried in order; first hit decides the type.
const TYPE_HINTS: &[(&[&str], RequirementType)] = &[
    (&["api", "integration", "database"], RequirementType::Technical),
    (&["user", "ui", "screen", "form"], RequirementType::Functional),
    (&["business", "workflow", "process"], RequirementType::Business),
];

/// Strip QA verbs, then shape the title by item type.
pub fn suggested_title(item: &UnlinkedItem) -> String {
    let stripped = QA_PREFIX.replace(&item.title, "");
    let stripped = QA_SUFFIX.replace(&stripped, "");

    match item.item_type {
        ItemType::TestCase => format!("{stripped} Requirement"),
        ItemType::Issue => format!("Fix: {stripped}"),
        ItemType::SignOff => format!("{stripped} Process"),
        ItemType::Task | ItemType::Meeting => stripped.into_owned(),
    }
}

pub fn infer_type(text: &str) -> RequirementType {
    TYPE_HINTS
        .iter()
        .find(|(terms, _)| terms.iter().any(|t| text.contains(t)))
        .map_or(RequirementType::Functional, |(_, ty)| *ty)
}

/// Build the draft requirement for one item.
pub fn suggest_requirement(item: &UnlinkedItem) -> NewRequirementSuggestion {
    let body = match item.description.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => item.title.as_str(),
    };

    NewRequirementSuggestion {
        source_item_id: item.id.clone(),
        suggested_title: suggested_title(item),
        suggested_description: format!("{DESCRIPTION_PREFIX}{body}"),
        suggested_type: infer_type(&item.search_text()),
        suggested_priority: item.priority,
        reasoning: format!(
            "No existing requirement covers this {}: \"{}\". Suggested as a new requirement.",
            item.item_type, item.title
        ),
    }
}
