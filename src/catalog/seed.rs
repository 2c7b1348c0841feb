// Built-in demo data: an ERP-style requirement catalog and the work items
// that were never traced to it.
//
// Used when no fixture file is configured. Ids are stable because the UI
// and the tests refer to them by literal.

use chrono::NaiveDate;

use super::models::{ItemType, Priority, Requirement, UnlinkedItem};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn requirement(id: &str, req_id: &str, title: &str, description: &str) -> Requirement {
    Requirement {
        id: id.to_string(),
        req_id: req_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    item_type: ItemType,
    title: &str,
    description: Option<&str>,
    priority: Priority,
    status: &str,
    assignee: &str,
    due_date: Option<NaiveDate>,
    created_on: NaiveDate,
) -> UnlinkedItem {
    UnlinkedItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        item_type,
        priority,
        status: status.to_string(),
        assignee: assignee.to_string(),
        due_date,
        created_on,
    }
}

/// The demo requirement catalog, in display order.
pub fn requirements() -> Vec<Requirement> {
    vec![
        requirement(
            "req-001",
            "REQ-001",
            "Sales Order Creation",
            "Sales representatives can create, edit and submit sales orders with customer, line items and pricing.",
        ),
        requirement(
            "req-002",
            "REQ-002",
            "Operations Dashboard",
            "Management dashboard shows live status of open orders, shipments and stock levels.",
        ),
        requirement(
            "req-003",
            "REQ-003",
            "Employee Onboarding",
            "HR can onboard a new employee including system accounts, equipment and document collection.",
        ),
        requirement(
            "req-004",
            "REQ-004",
            "Invoice Generation",
            "Generate customer invoices from confirmed deliveries with tax breakdown and payment terms.",
        ),
        requirement(
            "req-005",
            "REQ-005",
            "Production Planning",
            "Planners build weekly production schedules from demand forecasts and machine capacity.",
        ),
        requirement(
            "req-006",
            "REQ-006",
            "Financial Period Close",
            "Finance closes the accounting period after reconciliation, accruals and approvals.",
        ),
        requirement(
            "req-007",
            "REQ-007",
            "Warehouse Stock Transfer",
            "Warehouse staff move stock between locations with scanning and transfer confirmation.",
        ),
        requirement(
            "req-008",
            "REQ-008",
            "Supplier Master Data",
            "Procurement maintains supplier records, bank details and contact persons.",
        ),
    ]
}

/// Work items not yet traced to any requirement.
pub fn unlinked_items() -> Vec<UnlinkedItem> {
    vec![
        item(
            "orphan-task-001",
            ItemType::Task,
            "Integrate payment gateway for online checkout",
            Some("Connect the storefront checkout to the card payment gateway and handle declines."),
            Priority::High,
            "In Progress",
            "Marcus Webb",
            Some(date(2024, 4, 12)),
            date(2024, 3, 2),
        ),
        item(
            "orphan-task-002",
            ItemType::Task,
            "Add dark mode theme toggle",
            Some("Let users switch the color scheme of the web client."),
            Priority::Low,
            "Open",
            "Lena Ortiz",
            None,
            date(2024, 3, 5),
        ),
        item(
            "orphan-tc-001",
            ItemType::TestCase,
            "Test Invoice PDF Generation with Special Characters",
            Some("Invoices with accented customer names must render correctly in the exported PDF."),
            Priority::High,
            "Failed",
            "Priya Nair",
            Some(date(2024, 4, 1)),
            date(2024, 3, 8),
        ),
        item(
            "orphan-tc-002",
            ItemType::TestCase,
            "Verify login with single sign-on",
            Some("New starters authenticate with their corporate identity on first day."),
            Priority::Medium,
            "Not Run",
            "Priya Nair",
            None,
            date(2024, 3, 9),
        ),
        item(
            "orphan-issue-001",
            ItemType::Issue,
            "Login page misalignment on iPhone SE",
            Some("Submit button overlaps the password field on small viewports."),
            Priority::Medium,
            "Open",
            "Dev Patel",
            None,
            date(2024, 3, 11),
        ),
        item(
            "orphan-issue-002",
            ItemType::Issue,
            "Slow database queries on schedule report",
            Some("Report takes 40 seconds to load; missing index on capacity table hurts performance."),
            Priority::High,
            "Open",
            "Dev Patel",
            Some(date(2024, 4, 20)),
            date(2024, 3, 14),
        ),
        item(
            "orphan-so-001",
            ItemType::SignOff,
            "Security audit sign-off for Q1",
            Some("External auditor signs off access controls before the quarter is closed."),
            Priority::High,
            "Pending",
            "Grace Kim",
            Some(date(2024, 3, 31)),
            date(2024, 3, 15),
        ),
        item(
            "orphan-mtg-001",
            ItemType::Meeting,
            "Quarterly roadmap review",
            None,
            Priority::Low,
            "Scheduled",
            "Grace Kim",
            Some(date(2024, 4, 3)),
            date(2024, 3, 18),
        ),
        item(
            "orphan-task-003",
            ItemType::Task,
            "Translate help articles into Spanish",
            Some("Localize knowledge base entries for the Madrid office."),
            Priority::Medium,
            "Open",
            "Lena Ortiz",
            None,
            date(2024, 3, 20),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let items = unlinked_items();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());

        let reqs = requirements();
        let req_ids: HashSet<&str> = reqs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(req_ids.len(), reqs.len());
    }

    #[test]
    fn test_seed_contains_known_orphan() {
        assert!(unlinked_items().iter().any(|i| i.id == "orphan-tc-001"));
    }
}
