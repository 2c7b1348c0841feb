// Gap-analysis orchestration — the service facade, its store, the latency
// model and the persistence extension point.

pub mod commit;
pub mod gap_analysis;
pub mod latency;
pub mod store;

pub use gap_analysis::{GapAnalysisService, GapAnalysisServiceBuilder, TriageReport};
