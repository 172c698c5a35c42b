use crate::errors::{NavError, Result};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Completion channel handed into every stack operation.
///
/// Settling consumes the promise, so it resolves or rejects at most once.
/// Dropping it unsettled surfaces as [`NavError::PromiseDropped`] on the
/// receiving side.
#[derive(Debug)]
pub struct Promise {
    sender: Option<oneshot::Sender<Result<String>>>,
}

/// Receiving half of a [`Promise`]
#[derive(Debug)]
pub struct PromiseReceiver {
    receiver: oneshot::Receiver<Result<String>>,
}

impl Promise {
    pub fn channel() -> (Promise, PromiseReceiver) {
        let (sender, receiver) = oneshot::channel();
        (
            Promise {
                sender: Some(sender),
            },
            PromiseReceiver { receiver },
        )
    }

    /// Promise for callers that do not care about the outcome
    pub fn noop() -> Promise {
        Promise { sender: None }
    }

    pub fn is_noop(&self) -> bool {
        self.sender.is_none()
    }

    pub fn resolve(self, id: impl Into<String>) {
        self.settle(Ok(id.into()));
    }

    /// Standardized rejection: the operation is not permitted in the current state
    pub fn reject(self) {
        self.settle(Err(NavError::Rejected));
    }

    pub fn reject_with(self, error: NavError) {
        self.settle(Err(error));
    }

    fn settle(mut self, outcome: Result<String>) {
        if let Some(sender) = self.sender.take() {
            // The caller may have stopped listening
            let _ = sender.send(outcome);
        }
    }
}

impl PromiseReceiver {
    /// Wait for the promise to settle
    pub async fn wait(self) -> Result<String> {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(NavError::PromiseDropped),
        }
    }

    /// Outcome if already settled, without waiting
    pub fn try_take(&mut self) -> Option<Result<String>> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(NavError::PromiseDropped)),
        }
    }
}
