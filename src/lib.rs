//! Grid-matching core for a suite of casual puzzle games.
//!
//! This crate owns the shared logic behind a bubble-shooter, a click-to-blast
//! block matcher, and a drag-placement block game: grid storage, topology-aware
//! connected-region search, match resolution with per-variant scoring,
//! gravity/compaction, and terminal-state detection. Rendering, input mapping,
//! and audio live in external collaborators that consume snapshots and turn
//! outcomes; the core never calls back into them.

pub mod core;
pub mod types;
