//! Cooperative cancellation for runs.

use tokio::sync::watch;

/// Owner side of a cancellation flag.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Raise the flag. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// A new observer of this flag.
    #[must_use]
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a cancellation flag, checked by the engine.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// A signal that is never raised.
    #[must_use]
    pub fn never() -> Self {
        CancelHandle::new().signal()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the flag is raised.
    ///
    /// Stays pending forever if the handle is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        let raised = self.rx.wait_for(|flag| *flag).await.map(|_| ());
        if raised.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
