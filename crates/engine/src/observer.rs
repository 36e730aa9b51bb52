//! Step observers.
//!
//! The engine awaits [`StepObserver::on_step`] for every step; the returned
//! future completing is the acknowledgement that lets the run move on.

use std::sync::Arc;

use algoviz_traversal::{Highlight, Step};
use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc, watch};

use crate::report::{RunId, RunReport};

/// Receives the steps of a run, in order.
#[async_trait]
pub trait StepObserver: Send + Sync {
    /// Called once before the first step.
    async fn on_start(&self, run_id: RunId, total: usize) {
        let _ = (run_id, total);
    }

    /// Called for each delivered step. The run waits for this to return.
    async fn on_step(&self, step: &Step);

    /// Called once with the terminal report.
    async fn on_finish(&self, report: &RunReport) {
        let _ = report;
    }
}

#[async_trait]
impl<O: StepObserver + ?Sized> StepObserver for Arc<O> {
    async fn on_start(&self, run_id: RunId, total: usize) {
        (**self).on_start(run_id, total).await;
    }

    async fn on_step(&self, step: &Step) {
        (**self).on_step(step).await;
    }

    async fn on_finish(&self, report: &RunReport) {
        (**self).on_finish(report).await;
    }
}

/// An observer that runs a closure per step.
pub struct FnObserver<F>
where
    F: Fn(&Step) + Send + Sync,
{
    func: F,
}

impl<F> FnObserver<F>
where
    F: Fn(&Step) + Send + Sync,
{
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> StepObserver for FnObserver<F>
where
    F: Fn(&Step) + Send + Sync,
{
    async fn on_step(&self, step: &Step) {
        (self.func)(step);
    }
}

/// Forwards steps into a channel.
///
/// With a bounded channel a full buffer holds the run back until the
/// receiver catches up. A stalled run also stalls `RunController::start`
/// and `RunController::cancel`, which wait for it to stop, so the task that
/// drains the receiver must not be the one restarting or cancelling runs.
/// Use [`ChannelObserver::unbounded`] in that case. Once the receiver is
/// gone steps are dropped.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: StepSender,
}

#[derive(Debug, Clone)]
enum StepSender {
    Bounded(mpsc::Sender<Step>),
    Unbounded(mpsc::UnboundedSender<Step>),
}

impl ChannelObserver {
    #[must_use]
    pub const fn new(tx: mpsc::Sender<Step>) -> Self {
        Self {
            tx: StepSender::Bounded(tx),
        }
    }

    /// Create an observer together with the receiving end.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Step>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Create an observer whose deliveries never wait on the receiver.
    #[must_use]
    pub fn unbounded() -> (Self, mpsc::UnboundedReceiver<Step>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx: StepSender::Unbounded(tx),
            },
            rx,
        )
    }
}

#[async_trait]
impl StepObserver for ChannelObserver {
    async fn on_step(&self, step: &Step) {
        let sent = match &self.tx {
            StepSender::Bounded(tx) => tx.send(step.clone()).await.is_ok(),
            StepSender::Unbounded(tx) => tx.send(step.clone()).is_ok(),
        };
        if !sent {
            tracing::debug!(step = %step, "Step receiver dropped");
        }
    }
}

/// Collects every step and the final report.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    steps: Mutex<Vec<Step>>,
    report: Mutex<Option<RunReport>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps received so far.
    pub async fn steps(&self) -> Vec<Step> {
        self.steps.lock().await.clone()
    }

    /// The terminal report, once the run finished.
    pub async fn report(&self) -> Option<RunReport> {
        self.report.lock().await.clone()
    }
}

#[async_trait]
impl StepObserver for RecordingObserver {
    async fn on_start(&self, _run_id: RunId, _total: usize) {
        self.steps.lock().await.clear();
        *self.report.lock().await = None;
    }

    async fn on_step(&self, step: &Step) {
        self.steps.lock().await.push(step.clone());
    }

    async fn on_finish(&self, report: &RunReport) {
        *self.report.lock().await = Some(report.clone());
    }
}

/// Publishes live [`Highlight`] state and forwards to an inner observer.
pub struct HighlightObserver<O> {
    tx: watch::Sender<Highlight>,
    inner: O,
}

impl<O: StepObserver> HighlightObserver<O> {
    /// Wrap `inner`; the receiver sees the highlight after every step.
    #[must_use]
    pub fn new(inner: O) -> (Self, watch::Receiver<Highlight>) {
        let (tx, rx) = watch::channel(Highlight::default());
        (Self { tx, inner }, rx)
    }

    /// Another receiver for the same highlight state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Highlight> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl<O: StepObserver> StepObserver for HighlightObserver<O> {
    async fn on_start(&self, run_id: RunId, total: usize) {
        self.tx.send_replace(Highlight::default());
        self.inner.on_start(run_id, total).await;
    }

    async fn on_step(&self, step: &Step) {
        self.tx.send_modify(|highlight| highlight.apply(step));
        self.inner.on_step(step).await;
    }

    async fn on_finish(&self, report: &RunReport) {
        self.inner.on_finish(report).await;
    }
}

/// Ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

#[async_trait]
impl StepObserver for NullObserver {
    async fn on_step(&self, _step: &Step) {}
}
