//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod header;
pub mod live_indicator;
pub mod nav_bar;
pub mod notifications;
pub mod sparkline;
pub mod stat_card;
