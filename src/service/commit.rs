// Commit hook — where a real deployment writes links and new requirements
// through to its durable requirement store.
//
// The service calls the hook with only the entries whose items are still
// unlinked, before removing them. An error from the hook leaves the store
// unchanged, so a failed write-through can simply be retried.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::catalog::models::{ItemLink, NewRequirementSuggestion};

#[async_trait]
pub trait CommitHook: Send + Sync {
    /// Persist item → requirement links.
    async fn on_link(&self, links: &[ItemLink]) -> Result<()>;

    /// Persist requirements created from suggestions.
    async fn on_create(&self, suggestions: &[NewRequirementSuggestion]) -> Result<()>;
}

/// Default hook: the unlinked store is the only state.
pub struct NoopCommit;

#[async_trait]
impl CommitHook for NoopCommit {
    async fn on_link(&self, _links: &[ItemLink]) -> Result<()> {
        Ok(())
    }

    async fn on_create(&self, _suggestions: &[NewRequirementSuggestion]) -> Result<()> {
        Ok(())
    }
}

/// Emits one structured log record per committed link or requirement.
pub struct LogCommit;

#[async_trait]
impl CommitHook for LogCommit {
    async fn on_link(&self, links: &[ItemLink]) -> Result<()> {
        for link in links {
            info!(item = %link.item_id, requirement = %link.req_id, "Linked work item");
        }
        Ok(())
    }

    async fn on_create(&self, suggestions: &[NewRequirementSuggestion]) -> Result<()> {
        for s in suggestions {
            info!(
                item = %s.source_item_id,
                title = %s.suggested_title,
                kind = %s.suggested_type,
                priority = %s.suggested_priority,
                "Created requirement from work item"
            );
        }
        Ok(())
    }
}
