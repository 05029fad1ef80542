use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crossbeam_channel::{Receiver, Sender, bounded};

/// Cooperative cancellation token shared between a caller and bridge producers.
///
/// Clones share state: cancelling any clone cancels them all. Firing is idempotent and
/// permanent.
///
/// Besides the flag, the token owns a channel that never carries a message; cancelling
/// drops its only sender, so [`signal`](Cancellation::signal) can be raced against a
/// blocking channel operation in a `select!`.
#[derive(Clone, Debug)]
pub struct Cancellation {
    inner: Arc<CancellationState>,
}

#[derive(Debug)]
struct CancellationState {
    flag: AtomicBool,
    trigger: Mutex<Option<Sender<()>>>,
    signal: Receiver<()>,
}

impl Cancellation {
    /// Create a token in the "not cancelled" state.
    pub fn new() -> Self {
        let (trigger, signal) = bounded(0);
        Self {
            inner: Arc::new(CancellationState {
                flag: AtomicBool::new(false),
                trigger: Mutex::new(Some(trigger)),
                signal,
            }),
        }
    }

    /// Whether the token has been fired.
    pub fn is_cancelled(&self) -> bool {
        self.inner.flag.load(Ordering::Acquire)
    }

    /// Fire the token.
    ///
    /// Returns `true` for the call that fired it and `false` if it was already cancelled.
    pub fn cancel(&self) -> bool {
        let first = self
            .inner
            .flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if first {
            let trigger = self
                .inner
                .trigger
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            drop(trigger);
            tracing::debug!("cancellation fired");
        }
        first
    }

    /// Receiver that disconnects once the token fires.
    ///
    /// It never yields a message: `recv` blocks until cancellation and then returns
    /// `Err(RecvError)`.
    pub fn signal(&self) -> &Receiver<()> {
        &self.inner.signal
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}
