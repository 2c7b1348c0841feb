// Colored terminal output for the gap-analysis commands.
//
// main.rs delegates all table formatting here. JSON output bypasses this
// module entirely.

use colored::Colorize;

use crate::catalog::models::{
    AiRecommendation, NewRequirementSuggestion, Priority, Requirement, UnlinkedItem,
};
use crate::service::TriageReport;

/// Display the unlinked items table.
pub fn display_unlinked_items(items: &[UnlinkedItem]) {
    if items.is_empty() {
        println!("No unlinked items. Every work item is traced to a requirement.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Unlinked Items ({}) ===", items.len()).bold()
    );
    println!();
    println!(
        "  {:<18} {:<10} {:<8} {:<12} {}",
        "Id".dimmed(),
        "Type".dimmed(),
        "Priority".dimmed(),
        "Status".dimmed(),
        "Title".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for item in items {
        println!(
            "  {:<18} {:<10} {:<8} {:<12} {}",
            item.id,
            item.item_type.as_str(),
            colorize_priority(item.priority),
            super::truncate_chars(&item.status, 12),
            super::truncate_chars(&item.title, 60),
        );
    }
    println!();
}

pub fn display_requirements(requirements: &[Requirement]) {
    if requirements.is_empty() {
        println!("Requirement catalog is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Requirements ({}) ===", requirements.len()).bold()
    );
    println!();
    for req in requirements {
        println!("  {:<9} {}", req.req_id.bold(), req.title);
        if !req.description.is_empty() {
            println!("            {}", super::truncate_chars(&req.description, 100).dimmed());
        }
    }
    println!();
}

/// Display ranked recommendations, highest confidence first.
pub fn display_recommendations(recommendations: &[AiRecommendation]) {
    if recommendations.is_empty() {
        println!("No recommendations. None of the requested items are unlinked.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Recommendations ({} items) ===", recommendations.len()).bold()
    );
    println!();
    println!(
        "  {:>5}  {:<18} {:<9} {}",
        "Score".dimmed(),
        "Item".dimmed(),
        "Req".dimmed(),
        "Requirement".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for rec in recommendations {
        println!(
            "  {:>5}  {:<18} {:<9} {}",
            colorize_score(rec.score),
            rec.item_id,
            rec.req_number,
            rec.req_title,
        );
        println!("         {}", rec.reasoning.dimmed());
    }
    println!();
}

pub fn display_suggestions(suggestions: &[NewRequirementSuggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions. None of the requested items are unlinked.");
        return;
    }

    println!(
        "\n{}",
        format!("=== New Requirement Drafts ({}) ===", suggestions.len()).bold()
    );
    println!();
    for s in suggestions {
        println!(
            "  {} [{} / {}]",
            s.suggested_title.bold(),
            s.suggested_type,
            colorize_priority(s.suggested_priority),
        );
        println!("    from: {}", s.source_item_id);
        println!("    {}", super::truncate_chars(&s.suggested_description, 120));
        println!("    {}", s.reasoning.dimmed());
    }
    println!();
}

pub fn display_removed(action: &str, removed: &[String], remaining: usize) {
    if removed.is_empty() {
        println!("Nothing {action}: the requested items are no longer unlinked.");
    } else {
        println!("{} {} item(s):", action.bold(), removed.len());
        for id in removed {
            println!("  {} {}", "-".green(), id);
        }
    }
    println!("{remaining} unlinked item(s) remaining.");
}

pub fn display_triage(report: &TriageReport, threshold: u8) {
    println!(
        "\n{}",
        format!("=== Triage (link at score >= {threshold}) ===").bold()
    );

    println!("\n  Linked to existing requirements: {}", report.linked.len());
    for rec in &report.linked {
        println!(
            "    {:<18} -> {:<9} ({})",
            rec.item_id,
            rec.req_number,
            colorize_score(rec.score)
        );
    }

    println!("\n  Converted to new requirements: {}", report.created.len());
    for s in &report.created {
        println!("    {:<18} -> {}", s.source_item_id, s.suggested_title);
    }
    println!();
}

fn colorize_score(score: u8) -> colored::ColoredString {
    let text = score.to_string();
    match score {
        80..=100 => text.green().bold(),
        50..=79 => text.yellow(),
        _ => text.red(),
    }
}

fn colorize_priority(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => priority.as_str().red().bold(),
        Priority::Medium => priority.as_str().yellow(),
        Priority::Low => priority.as_str().green(),
    }
}
