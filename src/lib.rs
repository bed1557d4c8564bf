//! This is the API for the numeric tower.
//!
//! Classify two boxed values, `combine` their strategies to find the one
//! that governs the pair, then compare under that strategy:
//!
//! ```
//! use numerics::{equal, equiv, int, float};
//!
//! assert!(equiv(&int!(3), &float!(3.0)).unwrap());
//! assert!(!equal(&int!(3), &float!(3.0)).unwrap());
//! ```

pub mod tower;
pub mod values;

pub use tower::{category, equal, equiv, ops, Category, Ops};
pub use values::{Type, Value};
