//! # Async Tasks
//!
//! Background timers that report back over the event channel.

pub mod ticker;
