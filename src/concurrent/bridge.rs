use std::{
    any::Any,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{Receiver, Sender, bounded, select_biased};

use crate::{Sequence, concurrent::Cancellation, error::BridgeError};

const DEFAULT_THREAD_NAME: &str = "lazyseq-producer";

/// Configuration for a concurrency bridge.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let (rx, producer) = Bridge::new()
///     .capacity(4)
///     .name("squares")
///     .spawn(range(0, 5, 1).map(|x| x * x), Cancellation::new())
///     .unwrap();
///
/// assert_eq!(from_channel(rx).collect::<Vec<_>>(), vec![0, 1, 4, 9, 16]);
/// assert_eq!(producer.join().unwrap(), ProducerExit::Exhausted { sent: 5 });
/// ```
#[derive(Debug, Clone)]
pub struct Bridge {
    capacity: usize,
    name: String,
}

impl Bridge {
    /// A bridge with one slot of slack and the default thread name.
    pub fn new() -> Self {
        Self {
            capacity: 1,
            name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }

    /// Number of elements the producer may run ahead of the consumer.
    ///
    /// `0` makes every hand-off a rendezvous.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Name of the producer thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Start a producer thread that pulls `seq` into a bounded queue.
    ///
    /// The producer stops once `seq` is exhausted, once `cancel` fires, or once the
    /// returned receiver is dropped; the queue is closed when it stops.
    pub fn spawn<S>(
        self,
        seq: S,
        cancel: Cancellation,
    ) -> Result<(Receiver<S::Item>, Producer), BridgeError>
    where
        S: Sequence + Send + 'static,
        S::Item: Send + 'static,
    {
        let (tx, rx) = bounded(self.capacity);
        tracing::debug!(capacity = self.capacity, thread = %self.name, "spawning producer");
        let handle = thread::Builder::new()
            .name(self.name)
            .spawn(move || produce(seq, tx, cancel))?;
        Ok((rx, Producer { handle }))
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a producer thread stopped, with the number of elements it handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerExit {
    /// The upstream sequence ran dry.
    Exhausted { sent: usize },
    /// The cancellation token fired.
    Cancelled { sent: usize },
    /// The receiving end was dropped.
    Disconnected { sent: usize },
}

impl ProducerExit {
    /// Elements successfully pushed into the queue.
    pub fn sent(&self) -> usize {
        match *self {
            ProducerExit::Exhausted { sent }
            | ProducerExit::Cancelled { sent }
            | ProducerExit::Disconnected { sent } => sent,
        }
    }
}

/// Handle to a running producer thread.
#[derive(Debug)]
pub struct Producer {
    handle: JoinHandle<ProducerExit>,
}

impl Producer {
    /// Whether the producer thread has stopped.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the producer thread to stop.
    ///
    /// Blocks until the upstream is exhausted, the token fires or the receiver is
    /// dropped, so only call this when one of those is guaranteed to happen. A panic in the
    /// upstream sequence is reported with its message.
    pub fn join(self) -> Result<ProducerExit, BridgeError> {
        self.handle
            .join()
            .map_err(|payload| BridgeError::ProducerPanicked(panic_message(&*payload)))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

enum Handoff {
    Sent,
    Cancelled,
    Disconnected,
}

fn produce<S>(mut seq: S, tx: Sender<S::Item>, cancel: Cancellation) -> ProducerExit
where
    S: Sequence,
{
    let mut sent = 0;
    let exit = loop {
        if cancel.is_cancelled() {
            break ProducerExit::Cancelled { sent };
        }
        let Some(item) = seq.pull() else {
            break ProducerExit::Exhausted { sent };
        };
        // cancellation wins when both operations are ready
        let handoff = select_biased! {
            recv(cancel.signal()) -> _ => Handoff::Cancelled,
            send(tx, item) -> res => match res {
                Ok(()) => Handoff::Sent,
                Err(_) => Handoff::Disconnected,
            },
        };
        match handoff {
            Handoff::Sent => {
                sent += 1;
                tracing::trace!(sent, "handed off element");
            }
            Handoff::Cancelled => break ProducerExit::Cancelled { sent },
            Handoff::Disconnected => break ProducerExit::Disconnected { sent },
        }
    };
    tracing::debug!(?exit, "producer stopped");
    exit
}

/// Start a producer thread pulling `seq` into a queue with `capacity` slots.
///
/// Returns the receiving end together with the producer handle. Pass a token that you
/// cancel when you stop consuming early; otherwise the producer only stops once `seq` is
/// exhausted or the receiver is dropped.
///
/// # Panics
///
/// Panics if the thread cannot be spawned, like [`std::thread::spawn`]. Use
/// [`Bridge::spawn`] to handle that case.
pub fn to_channel<S>(
    seq: S,
    cancel: Cancellation,
    capacity: usize,
) -> (Receiver<S::Item>, Producer)
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    match Bridge::new().capacity(capacity).spawn(seq, cancel) {
        Ok(bridged) => bridged,
        Err(err) => panic!("failed to start bridge: {err:?}"),
    }
}

/// Sequence backed by the receiving end of a bounded queue.
///
/// `pull` blocks until an element arrives or every sender is gone.
pub struct ChannelSequence<T> {
    rx: Receiver<T>,
    closed: bool,
    producer: Option<Producer>,
}

/// Wrap a receiver as a sequence.
pub fn from_channel<T>(rx: Receiver<T>) -> ChannelSequence<T> {
    ChannelSequence {
        rx,
        closed: false,
        producer: None,
    }
}

/// Run `seq` on its own thread, one element ahead of the consumer.
///
/// Shorthand for [`to_channel`] with a capacity of 1 followed by [`from_channel`]. The
/// pipeline before this call then runs concurrently with the pipeline after it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let cancel = Cancellation::new();
/// let upper = go(from_vec(vec!["a", "b"]), cancel.clone()).map(|s| s.to_uppercase());
/// assert_eq!(upper.collect::<Vec<_>>(), vec!["A", "B"]);
/// ```
///
/// # Panics
///
/// Panics if the thread cannot be spawned.
pub fn go<S>(seq: S, cancel: Cancellation) -> ChannelSequence<S::Item>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    let (rx, producer) = to_channel(seq, cancel, 1);
    ChannelSequence {
        rx,
        closed: false,
        producer: Some(producer),
    }
}

impl<T> ChannelSequence<T> {
    /// Detach the producer handle, if this sequence was created by [`go`].
    pub fn take_producer(&mut self) -> Option<Producer> {
        self.producer.take()
    }

    /// Give back the receiver.
    pub fn into_receiver(self) -> Receiver<T> {
        self.rx
    }
}

impl<T> Sequence for ChannelSequence<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.closed {
            return None;
        }
        match self.rx.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                self.closed = true;
                None
            }
        }
    }
}
