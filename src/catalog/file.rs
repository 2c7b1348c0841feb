// JSON fixture loading.
//
// A fixture file replaces the built-in seed. It holds both halves of the
// demo data set:
//
//   { "requirements": [...], "unlinkedItems": [...] }
//
// JsonFileCatalog re-reads the file on every call so edits show up without
// restarting a long-lived service.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::models::{Requirement, UnlinkedItem};
use super::traits::RequirementCatalog;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub unlinked_items: Vec<UnlinkedItem>,
}

/// Read and parse a fixture file.
pub fn load_fixture(path: &Path) -> Result<Fixture> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse fixture file {}", path.display()))?;
    Ok(fixture)
}

/// Catalog backed by the `requirements` array of a fixture file.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RequirementCatalog for JsonFileCatalog {
    async fn requirements(&self) -> Result<Vec<Requirement>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read fixture file {}", self.path.display()))?;
        let fixture: Fixture = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse fixture file {}", self.path.display()))?;
        Ok(fixture.requirements)
    }
}
