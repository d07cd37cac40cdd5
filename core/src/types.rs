//! Shared primitive types used across the planner.

/// An opaque label for one time bucket ("09:00", "hour-3", ...).
/// Carried through to output unchanged; never parsed.
pub type IntervalLabel = String;

/// A whole number of staffed agents.
pub type Headcount = u32;
