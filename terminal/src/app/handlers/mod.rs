//! # Event Handlers
//!
//! User action handlers, organized by domain. Each takes the shared state and
//! holds its lock only for the duration of the mutation.

pub mod markets;
pub mod navigation;
pub mod settings;
