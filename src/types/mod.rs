//! Data types shared across the crate

mod entry;

pub use entry::{Entry, ScoredEntry};
