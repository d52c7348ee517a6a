//! Combat math.
//!
//! Pure functions used by the action resolver. All combat logic is
//! deterministic and side-effect free.

pub mod damage;

pub use damage::{apply_guard, calculate_damage};
