// Simulated processing latency.
//
// The demo UI paces itself on fixed per-operation delays. They are UX
// constants, not backoffs: tests run with `LatencyProfile::none()` and lose
// nothing.

use tokio::time::Duration;

/// The five service operations that pause before doing their work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListItems,
    Recommend,
    Suggest,
    Create,
    Link,
}

/// Per-operation delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list_items: Duration,
    pub recommend: Duration,
    pub suggest: Duration,
    pub create: Duration,
    pub link: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::demo()
    }
}

impl LatencyProfile {
    /// Delays the demo UI was tuned with.
    pub fn demo() -> Self {
        Self {
            list_items: Duration::from_millis(400),
            recommend: Duration::from_millis(1500),
            suggest: Duration::from_millis(1000),
            create: Duration::from_millis(1200),
            link: Duration::from_millis(800),
        }
    }

    pub fn none() -> Self {
        Self {
            list_items: Duration::ZERO,
            recommend: Duration::ZERO,
            suggest: Duration::ZERO,
            create: Duration::ZERO,
            link: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        match op {
            Operation::ListItems => self.list_items,
            Operation::Recommend => self.recommend,
            Operation::Suggest => self.suggest,
            Operation::Create => self.create,
            Operation::Link => self.link,
        }
    }

    /// Sleep for the operation's delay. Returns immediately for zero.
    pub async fn pause(&self, op: Operation) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
