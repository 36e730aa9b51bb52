//! Step delivery engine.

use std::time::{Duration, Instant};

use algoviz_core::{TraceLevel, VisualizerConfig};
use algoviz_traversal::StepSequence;
use chrono::Utc;
use tracing::{debug, info};

use crate::cancel::CancelSignal;
use crate::observer::StepObserver;
use crate::report::{RunId, RunOutcome, RunReport};

/// Configuration for the step engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Pause between two consecutive deliveries.
    pub step_delay: Duration,
    /// Detail level passed to the traversal algorithms.
    pub trace_level: TraceLevel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from(&VisualizerConfig::default())
    }
}

impl From<&VisualizerConfig> for EngineConfig {
    fn from(config: &VisualizerConfig) -> Self {
        Self {
            step_delay: config.step_delay,
            trace_level: config.trace_level,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub const fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    #[must_use]
    pub const fn with_trace_level(mut self, trace_level: TraceLevel) -> Self {
        self.trace_level = trace_level;
        self
    }
}

/// Delivers a step sequence to an observer, one step at a time.
///
/// The engine is responsible for:
/// - Delivering steps strictly in order, awaiting each acknowledgement
/// - Pacing deliveries by the configured delay (none after the last step)
/// - Stopping as soon as the cancel signal is raised
#[derive(Debug, Clone, Default)]
pub struct StepEngine {
    config: EngineConfig,
}

impl StepEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `steps` to completion or cancellation under a fresh run id.
    pub async fn run(
        &self,
        steps: StepSequence,
        observer: &dyn StepObserver,
        signal: CancelSignal,
    ) -> RunReport {
        self.run_with_id(RunId::new(), steps, observer, signal)
            .await
    }

    /// Run `steps` under a caller-chosen run id.
    pub async fn run_with_id(
        &self,
        run_id: RunId,
        steps: StepSequence,
        observer: &dyn StepObserver,
        mut signal: CancelSignal,
    ) -> RunReport {
        let started_at = Utc::now();
        let clock = Instant::now();
        let algorithm = steps.pseudocode().name;
        let total = steps.len();
        let delay = self.config.step_delay;

        info!(run_id = %run_id, algorithm, total, "Starting run");
        observer.on_start(run_id, total).await;

        let mut outcome = RunOutcome::Completed;
        let mut delivered = 0usize;
        let mut pending = steps.into_iter().peekable();

        while let Some(step) = pending.next() {
            if signal.is_cancelled() {
                outcome = RunOutcome::Cancelled;
                break;
            }

            debug!(run_id = %run_id, index = delivered, step = %step, "Delivering step");
            observer.on_step(&step).await;
            delivered = delivered.saturating_add(1);

            if pending.peek().is_some() && !delay.is_zero() {
                tokio::select! {
                    () = tokio::time::sleep(delay) => {}
                    () = signal.cancelled() => {
                        debug!(run_id = %run_id, "Pacing wait interrupted");
                    }
                }
            }
        }

        let report = RunReport {
            run_id,
            algorithm,
            outcome,
            delivered,
            total,
            started_at,
            duration: clock.elapsed(),
        };

        info!(
            run_id = %run_id,
            outcome = %report.outcome,
            delivered,
            total,
            duration_ms = report.duration.as_millis(),
            "Run finished"
        );
        observer.on_finish(&report).await;
        report
    }
}
