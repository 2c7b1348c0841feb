// Requirement catalog trait — where the matcher gets its targets from.
//
// Implementors: StaticCatalog (in-memory), JsonFileCatalog (fixture file).
// Async so a real requirement store behind a network or database call fits
// the same interface without touching the matcher.

use anyhow::Result;
use async_trait::async_trait;

use super::models::Requirement;

#[async_trait]
pub trait RequirementCatalog: Send + Sync {
    /// Return the ordered requirement set. Order matters: scoring ties go to
    /// the first requirement.
    async fn requirements(&self) -> Result<Vec<Requirement>>;
}

/// Fixed, in-memory catalog.
pub struct StaticCatalog {
    requirements: Vec<Requirement>,
}

impl StaticCatalog {
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self { requirements }
    }
}

#[async_trait]
impl RequirementCatalog for StaticCatalog {
    async fn requirements(&self) -> Result<Vec<Requirement>> {
        Ok(self.requirements.clone())
    }
}
