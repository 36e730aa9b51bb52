//! Single-run ownership.
//!
//! A [`RunController`] holds at most one in-flight run. Starting a new run
//! cancels the previous one and waits for it to reach its terminal state
//! first, so steps from two runs never interleave.

use std::sync::Arc;

use algoviz_traversal::StepSequence;
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cancel::CancelHandle;
use crate::engine::StepEngine;
use crate::observer::StepObserver;
use crate::report::{RunId, RunReport};

struct ActiveRun {
    run_id: RunId,
    cancel: CancelHandle,
    task: JoinHandle<RunReport>,
}

impl ActiveRun {
    /// Cancel and wait for the terminal report.
    ///
    /// The run stays in its slot until this resolves, so a caller that gives
    /// up waiting leaves it tracked rather than detached.
    async fn stop(&mut self) -> Option<RunReport> {
        self.cancel.cancel();
        match (&mut self.task).await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(run_id = %self.run_id, error = %e, "Run task failed");
                None
            }
        }
    }
}

/// Handle to a started run.
#[derive(Debug)]
pub struct RunTicket {
    run_id: RunId,
    rx: oneshot::Receiver<RunReport>,
}

impl RunTicket {
    #[must_use]
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Wait for the run's terminal report.
    ///
    /// `None` only if the run task was lost (panicked or aborted).
    pub async fn finished(self) -> Option<RunReport> {
        self.rx.await.ok()
    }
}

/// Owns at most one in-flight run.
pub struct RunController {
    engine: Arc<StepEngine>,
    active: Mutex<Option<ActiveRun>>,
}

impl RunController {
    #[must_use]
    pub fn new(engine: StepEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            active: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    /// Start delivering `steps` to `observer`.
    ///
    /// Any in-flight run is cancelled and awaited before the new one is
    /// spawned.
    pub async fn start(&self, steps: StepSequence, observer: Arc<dyn StepObserver>) -> RunTicket {
        let mut active = self.active.lock().await;

        if let Some(prior) = active.as_mut() {
            let prior_id = prior.run_id;
            let report = prior.stop().await;
            *active = None;
            debug!(
                run_id = %prior_id,
                outcome = ?report.map(|r| r.outcome),
                "Superseded previous run"
            );
        }

        let run_id = RunId::new();
        let cancel = CancelHandle::new();
        let signal = cancel.signal();
        let (tx, rx) = oneshot::channel();
        let engine = Arc::clone(&self.engine);

        info!(run_id = %run_id, steps = steps.len(), "Spawning run");
        let task = tokio::spawn(async move {
            let report = engine
                .run_with_id(run_id, steps, observer.as_ref(), signal)
                .await;
            // The ticket may have been dropped.
            let _ = tx.send(report.clone());
            report
        });

        *active = Some(ActiveRun {
            run_id,
            cancel,
            task,
        });

        RunTicket { run_id, rx }
    }

    /// Cancel the in-flight run, if any, and wait for its terminal report.
    pub async fn cancel(&self) -> Option<RunReport> {
        let mut active = self.active.lock().await;
        let report = match active.as_mut() {
            Some(run) => run.stop().await,
            None => None,
        };
        *active = None;
        report
    }

    /// Whether a run is currently delivering steps.
    pub async fn is_running(&self) -> bool {
        self.active
            .lock()
            .await
            .as_ref()
            .is_some_and(|run| !run.task.is_finished())
    }

    /// Id of the most recently started run, finished or not.
    pub async fn current_run(&self) -> Option<RunId> {
        self.active.lock().await.as_ref().map(|run| run.run_id)
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        if let Some(run) = self.active.get_mut().take() {
            run.cancel.cancel();
        }
    }
}
