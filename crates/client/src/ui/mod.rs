//! Presentation-side helpers with no rendering of their own.

pub mod boundary;

pub use boundary::{BoundaryOutcome, ErrorBoundary, Fallback, FALLBACK_MESSAGE};
