// GapAnalysisService — the facade the UI layer talks to.
//
// Owns the unlinked-item store and pulls requirements from an injected
// catalog. Every operation first waits out its simulated latency, then does
// its work. Mutating operations hold the store lock for the whole
// filter → commit → remove sequence, so concurrent link/create calls
// serialize instead of overwriting each other's removals.

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::commit::{CommitHook, NoopCommit};
use super::latency::{LatencyProfile, Operation};
use super::store::{UnknownIdPolicy, UnlinkedStore};
use crate::catalog::models::{
    AiRecommendation, ItemLink, NewRequirementSuggestion, Requirement, UnlinkedItem,
};
use crate::catalog::traits::RequirementCatalog;
use crate::error::{GapError, GapResult};
use crate::matching::{ranker, scorer};
use crate::suggest;

/// Outcome of a full triage pass.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    /// Recommendations that were confident enough to link directly
    pub linked: Vec<AiRecommendation>,
    /// Drafts created for everything else
    pub created: Vec<NewRequirementSuggestion>,
}

pub struct GapAnalysisService {
    catalog: Arc<dyn RequirementCatalog>,
    store: Mutex<UnlinkedStore>,
    rng: Mutex<StdRng>,
    latency: LatencyProfile,
    policy: UnknownIdPolicy,
    commit: Arc<dyn CommitHook>,
}

/// Builder for [`GapAnalysisService`]. Defaults: demo latency, OS-seeded
/// RNG, filter unknown ids, no-op commit hook.
pub struct GapAnalysisServiceBuilder {
    catalog: Arc<dyn RequirementCatalog>,
    items: Vec<UnlinkedItem>,
    latency: LatencyProfile,
    rng: Option<StdRng>,
    policy: UnknownIdPolicy,
    commit: Arc<dyn CommitHook>,
}

impl GapAnalysisServiceBuilder {
    pub fn latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Seed the fallback RNG for reproducible low-confidence picks.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    pub fn unknown_ids(mut self, policy: UnknownIdPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn commit_hook(mut self, hook: Arc<dyn CommitHook>) -> Self {
        self.commit = hook;
        self
    }

    pub fn build(self) -> GapAnalysisService {
        info!(items = self.items.len(), "Gap analysis service ready");
        GapAnalysisService {
            catalog: self.catalog,
            store: Mutex::new(UnlinkedStore::new(self.items)),
            rng: Mutex::new(self.rng.unwrap_or_else(StdRng::from_os_rng)),
            latency: self.latency,
            policy: self.policy,
            commit: self.commit,
        }
    }
}

impl GapAnalysisService {
    pub fn builder(
        catalog: Arc<dyn RequirementCatalog>,
        items: Vec<UnlinkedItem>,
    ) -> GapAnalysisServiceBuilder {
        GapAnalysisServiceBuilder {
            catalog,
            items,
            latency: LatencyProfile::default(),
            rng: None,
            policy: UnknownIdPolicy::default(),
            commit: Arc::new(NoopCommit),
        }
    }

    /// Store version; increases each time a call removes items.
    pub async fn version(&self) -> u64 {
        self.store.lock().await.version()
    }

    /// How many items are still unlinked. Not paced, unlike
    /// `get_unlinked_items`.
    pub async fn unlinked_count(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Passthrough to the catalog provider.
    pub async fn requirements(&self) -> GapResult<Vec<Requirement>> {
        self.catalog
            .requirements()
            .await
            .map_err(GapError::CatalogUnavailable)
    }

    /// Snapshot of the items still waiting to be traced.
    pub async fn get_unlinked_items(&self) -> Vec<UnlinkedItem> {
        self.latency.pause(Operation::ListItems).await;
        self.store.lock().await.snapshot()
    }

    /// Best requirement per resolved item, highest confidence first.
    pub async fn get_recommendations<S: AsRef<str> + Sync>(
        &self,
        item_ids: &[S],
    ) -> GapResult<Vec<AiRecommendation>> {
        self.latency.pause(Operation::Recommend).await;

        let items = self.store.lock().await.resolve(item_ids, self.policy)?;
        if items.len() < item_ids.len() {
            debug!(
                requested = item_ids.len(),
                resolved = items.len(),
                "Some requested items are not unlinked"
            );
        }
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let catalog = self.requirements().await?;
        if catalog.is_empty() {
            return Err(GapError::EmptyCatalog);
        }

        let mut recommendations = Vec::with_capacity(items.len());
        let mut fallbacks = 0usize;
        {
            let mut rng = self.rng.lock().await;
            for item in &items {
                if let Some(result) = scorer::score_item(item, &catalog, &mut *rng) {
                    if result.low_confidence {
                        fallbacks += 1;
                    }
                    recommendations.push(ranker::to_recommendation(item, result));
                }
            }
        }
        ranker::rank(&mut recommendations);

        if fallbacks > 0 {
            warn!(
                fallbacks,
                "Items without a confident match received low-confidence picks"
            );
        }
        info!(
            items = items.len(),
            requirements = catalog.len(),
            top_score = recommendations.first().map(|r| r.score),
            "Generated recommendations"
        );
        Ok(recommendations)
    }

    /// One draft requirement per resolved item, in resolution order.
    pub async fn suggest_new_requirements<S: AsRef<str> + Sync>(
        &self,
        item_ids: &[S],
    ) -> GapResult<Vec<NewRequirementSuggestion>> {
        self.latency.pause(Operation::Suggest).await;

        let items = self.store.lock().await.resolve(item_ids, self.policy)?;
        let suggestions: Vec<NewRequirementSuggestion> =
            items.iter().map(suggest::suggest_requirement).collect();

        info!(count = suggestions.len(), "Generated requirement suggestions");
        Ok(suggestions)
    }

    /// Convert the suggestions' source items into requirements. Returns the
    /// ids removed from the store; already-converted items are skipped, so
    /// repeating the call is a no-op.
    pub async fn create_requirements(
        &self,
        suggestions: &[NewRequirementSuggestion],
    ) -> GapResult<Vec<String>> {
        self.latency.pause(Operation::Create).await;

        let mut store = self.store.lock().await;
        let requested: Vec<&str> = suggestions
            .iter()
            .map(|s| s.source_item_id.as_str())
            .collect();
        store.check_known(&requested, self.policy)?;

        let mut seen = HashSet::new();
        let pending: Vec<NewRequirementSuggestion> = suggestions
            .iter()
            .filter(|s| store.contains(&s.source_item_id) && seen.insert(s.source_item_id.as_str()))
            .cloned()
            .collect();
        if pending.is_empty() {
            debug!("No unlinked items left to convert");
            return Ok(Vec::new());
        }

        self.commit
            .on_create(&pending)
            .await
            .map_err(GapError::Commit)?;

        let ids: Vec<&str> = pending.iter().map(|s| s.source_item_id.as_str()).collect();
        let removed = store.remove(&ids);
        info!(
            created = removed.len(),
            remaining = store.len(),
            "Created requirements from unlinked items"
        );
        Ok(removed)
    }

    /// Trace items to existing requirements. Returns the ids removed from
    /// the store.
    pub async fn link_items(&self, links: &[ItemLink]) -> GapResult<Vec<String>> {
        self.latency.pause(Operation::Link).await;

        let mut store = self.store.lock().await;
        let requested: Vec<&str> = links.iter().map(|l| l.item_id.as_str()).collect();
        store.check_known(&requested, self.policy)?;

        let mut seen = HashSet::new();
        let pending: Vec<ItemLink> = links
            .iter()
            .filter(|l| store.contains(&l.item_id) && seen.insert(l.item_id.as_str()))
            .cloned()
            .collect();
        if pending.is_empty() {
            debug!("No unlinked items left to link");
            return Ok(Vec::new());
        }

        self.commit.on_link(&pending).await.map_err(GapError::Commit)?;

        let ids: Vec<&str> = pending.iter().map(|l| l.item_id.as_str()).collect();
        let removed = store.remove(&ids);
        info!(
            linked = removed.len(),
            remaining = store.len(),
            "Linked unlinked items"
        );
        Ok(removed)
    }

    /// Recommend every unlinked item, link those scoring at least
    /// `link_threshold`, and turn the rest into new requirements. Fallback
    /// picks are never linked, whatever the threshold.
    pub async fn triage(&self, link_threshold: u8) -> GapResult<TriageReport> {
        let ids: Vec<String> = self
            .get_unlinked_items()
            .await
            .into_iter()
            .map(|i| i.id)
            .collect();
        if ids.is_empty() {
            return Ok(TriageReport::default());
        }

        let recommendations = self.get_recommendations(&ids).await?;
        let (confident, weak): (Vec<AiRecommendation>, Vec<AiRecommendation>) = recommendations
            .into_iter()
            .partition(|r| !r.low_confidence && r.score >= link_threshold);

        let links: Vec<ItemLink> = confident
            .iter()
            .map(|r| ItemLink::new(&r.item_id, &r.recommended_req_id))
            .collect();
        let linked_ids: HashSet<String> = self.link_items(&links).await?.into_iter().collect();

        let weak_ids: Vec<&str> = weak.iter().map(|r| r.item_id.as_str()).collect();
        let suggestions = self.suggest_new_requirements(&weak_ids).await?;
        let created_ids: HashSet<String> = self
            .create_requirements(&suggestions)
            .await?
            .into_iter()
            .collect();

        let report = TriageReport {
            linked: confident
                .into_iter()
                .filter(|r| linked_ids.contains(&r.item_id))
                .collect(),
            created: suggestions
                .into_iter()
                .filter(|s| created_ids.contains(&s.source_item_id))
                .collect(),
        };
        info!(
            linked = report.linked.len(),
            created = report.created.len(),
            threshold = link_threshold,
            "Triage complete"
        );
        Ok(report)
    }
}
