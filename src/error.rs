// Errors the gap-analysis service reports to its callers.
//
// Application-edge code (config, CLI, fixture loading) stays on anyhow; this
// enum covers the failures a caller of the service may want to match on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GapError {
    /// The id was never part of the store. Only raised under
    /// `UnknownIdPolicy::Reject`; ids that were already linked or converted
    /// are always skipped quietly.
    #[error("unknown work item '{0}'")]
    UnknownItem(String),

    /// The requirement catalog provider failed.
    #[error("requirement catalog unavailable: {0:#}")]
    CatalogUnavailable(anyhow::Error),

    /// Recommendations were requested but the catalog has no requirements.
    #[error("requirement catalog is empty; nothing to match against")]
    EmptyCatalog,

    /// The commit hook rejected a link or create; the store was not changed.
    #[error("commit hook failed: {0:#}")]
    Commit(anyhow::Error),
}

pub type GapResult<T> = std::result::Result<T, GapError>;
