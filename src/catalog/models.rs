// Data models — the records that flow between the catalog, the matcher,
// and the UI layer.
//
// Field names serialize in camelCase because that is the JSON contract the
// navigation/UI layer consumes. Nothing here knows about scoring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of work item that can be left unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Task,
    TestCase,
    Issue,
    SignOff,
    Meeting,
}

impl ItemType {
    /// Human-readable label, as shown in reasoning text and terminal tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Task => "Task",
            ItemType::TestCase => "Test Case",
            ItemType::Issue => "Issue",
            ItemType::SignOff => "Sign-off",
            ItemType::Meeting => "Meeting",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inferred category for a synthesized requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    Functional,
    Technical,
    Business,
}

impl RequirementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementType::Functional => "Functional",
            RequirementType::Technical => "Technical",
            RequirementType::Business => "Business",
        }
    }
}

impl std::fmt::Display for RequirementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A work item that has not been traced to any requirement yet.
///
/// `assignee`, `due_date` and `created_on` are metadata for display only;
/// the matcher reads `title`, `description` and `item_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlinkedItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub priority: Priority,
    /// Free-form; meaning depends on the item type ("Open", "Failed", "Pending"...)
    pub status: String,
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_on: NaiveDate,
}

impl UnlinkedItem {
    /// Lowercased title + description, the text every matcher reads.
    pub fn search_text(&self) -> String {
        combined_lowercase(&self.title, self.description.as_deref())
    }
}

/// An existing requirement in the traceability matrix. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: String,
    /// Display number, e.g. "REQ-004"
    pub req_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Requirement {
    pub fn search_text(&self) -> String {
        combined_lowercase(&self.title, Some(&self.description))
    }
}

/// Best-match recommendation for one unlinked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    pub item_id: String,
    pub recommended_req_id: String,
    pub req_title: String,
    pub req_number: String,
    /// Confidence, 0-100
    pub score: u8,
    pub reasoning: String,
    /// Set when no requirement cleared the confidence threshold and the
    /// match is a random pick. Never sent to the UI.
    #[serde(skip)]
    pub low_confidence: bool,
}

/// Draft requirement synthesized from an item nothing matched well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequirementSuggestion {
    pub source_item_id: String,
    pub suggested_title: String,
    pub suggested_description: String,
    pub suggested_type: RequirementType,
    pub suggested_priority: Priority,
    pub reasoning: String,
}

/// Request to trace an item to an existing requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLink {
    pub item_id: String,
    pub req_id: String,
}

impl ItemLink {
    pub fn new(item_id: impl Into<String>, req_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            req_id: req_id.into(),
        }
    }
}

fn combined_lowercase(title: &str, description: Option<&str>) -> String {
    match description {
        Some(d) if !d.is_empty() => format!("{title} {d}").to_lowercase(),
        _ => title.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_with_ui_field_names() {
        let item = UnlinkedItem {
            id: "orphan-tc-001".to_string(),
            title: "Check totals".to_string(),
            description: None,
            item_type: ItemType::TestCase,
            priority: Priority::High,
            status: "Failed".to_string(),
            assignee: "Priya Nair".to_string(),
            due_date: None,
            created_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "TestCase");
        assert_eq!(json["createdOn"], "2024-03-01");
        assert!(json.get("description").is_none());
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn test_search_text_skips_missing_description() {
        let req = Requirement {
            id: "r1".to_string(),
            req_id: "REQ-001".to_string(),
            title: "Invoice Generation".to_string(),
            description: String::new(),
        };
        assert_eq!(req.search_text(), "invoice generation");
    }
}
