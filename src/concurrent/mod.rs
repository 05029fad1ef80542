//! Run sequence stages on separate threads
//!
//! A bridge moves a sequence onto a producer thread that pushes its elements into a
//! bounded queue; the consuming side reads them back as a sequence. Producers stop on
//! exhaustion, on cancellation, or when the consumer goes away.

mod bridge;
mod cancel;

// Re-export concurrent operations
pub use bridge::{Bridge, ChannelSequence, Producer, ProducerExit, from_channel, go, to_channel};
pub use cancel::Cancellation;
