//! Startup sync trigger.
//!
//! Runs the sync job at most once per process. The flag lives in a
//! `SyncTrigger` created by the composition root and passed to every entry
//! point that may fire it; the first caller to flip the flag runs the job.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::SyncResult;
use crate::ports::SyncJob;

/// What a call to [`SyncTrigger::fire`] did.
#[derive(Debug)]
pub enum TriggerOutcome {
    /// Startup sync is disabled for this runtime.
    Disabled,
    /// The job already ran (or is running) in this process.
    AlreadyRun,
    /// The job ran and succeeded.
    Completed(SyncResult),
    /// The job ran and failed. The trigger stays spent.
    Failed(String),
}

/// Process-scoped at-most-once guard for the startup sync.
#[derive(Debug, Default)]
pub struct SyncTrigger {
    fired: AtomicBool,
}

impl SyncTrigger {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Whether the trigger has already fired.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Run `job` if `enabled` and the trigger has not fired yet.
    ///
    /// Failures are logged and reported, never propagated.
    pub async fn fire(&self, enabled: bool, job: &dyn SyncJob) -> TriggerOutcome {
        if !enabled {
            tracing::debug!(target: "hub.sync", "Startup sync disabled");
            return TriggerOutcome::Disabled;
        }

        if self
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(target: "hub.sync", "Startup sync already ran in this process");
            return TriggerOutcome::AlreadyRun;
        }

        tracing::info!(target: "hub.sync", "==== Startup sync: starting ====");
        match job.perform_sync().await {
            Ok(result) => {
                tracing::info!(
                    target: "hub.sync",
                    total = result.total(),
                    errors = result.errors.len(),
                    "==== Startup sync: completed ===="
                );
                TriggerOutcome::Completed(result)
            }
            Err(e) => {
                tracing::error!(target: "hub.sync", error = %e, "==== Startup sync: failed ====");
                TriggerOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::sync::MockSyncJob;
    use crate::ports::{StoreError, SyncError};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_job_runs_at_most_once() {
        let mut job = MockSyncJob::new();
        job.expect_perform_sync()
            .times(1)
            .returning(|| Ok(SyncResult::started_now()));
        let trigger = SyncTrigger::new();

        assert!(matches!(trigger.fire(true, &job).await, TriggerOutcome::Completed(_)));
        for _ in 0..3 {
            assert!(matches!(trigger.fire(true, &job).await, TriggerOutcome::AlreadyRun));
        }
        assert!(trigger.has_fired());
    }

    #[tokio::test]
    async fn test_failure_does_not_reset_flag() {
        let mut job = MockSyncJob::new();
        job.expect_perform_sync()
            .times(1)
            .returning(|| Err(SyncError::Store(StoreError::Connection("down".into()))));
        let trigger = SyncTrigger::new();

        assert!(matches!(trigger.fire(true, &job).await, TriggerOutcome::Failed(_)));
        assert!(matches!(trigger.fire(true, &job).await, TriggerOutcome::AlreadyRun));
    }

    #[tokio::test]
    async fn test_disabled_does_not_spend_trigger() {
        let mut job = MockSyncJob::new();
        job.expect_perform_sync()
            .times(1)
            .returning(|| Ok(SyncResult::started_now()));
        let trigger = SyncTrigger::new();

        assert!(matches!(trigger.fire(false, &job).await, TriggerOutcome::Disabled));
        assert!(!trigger.has_fired());
        assert!(matches!(trigger.fire(true, &job).await, TriggerOutcome::Completed(_)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_concurrent_fires_run_once() {
        let mut job = MockSyncJob::new();
        job.expect_perform_sync()
            .times(1)
            .returning(|| Ok(SyncResult::started_now()));
        let job = Arc::new(job);
        let trigger = Arc::new(SyncTrigger::new());

        let (a, b) = tokio::join!(
            trigger.fire(true, job.as_ref()),
            trigger.fire(true, job.as_ref())
        );
        let completed = [a, b]
            .iter()
            .filter(|o| matches!(o, TriggerOutcome::Completed(_)))
            .count();
        assert_eq!(completed, 1);
    }
}
