//! Stat System
//!
//! # Architecture
//!
//! ```text
//! [ Base Stats (StatBlock) ]   stored, SSOT
//!      +
//! [ Equipment Deltas ]         read from slots on every call
//!      ↓
//! [ Effective Stats ]          computed, never stored
//!      ↓
//! [ Resource Meters ]          current (stored) clamped to effective maximum
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Base stats, level, and current resources only
//! 2. **No caching**: effective stats are recomputed on demand
//! 3. **Deterministic**: Pure functions, no I/O or randomness

pub mod aggregate;
pub mod block;
pub mod delta;
pub mod resources;

pub use aggregate::effective_stats;
pub use block::{StatBlock, StatBounds, StatKind};
pub use delta::StatDelta;
pub use resources::{ResourceMeter, Vitals};
