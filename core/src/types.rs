//! Shared primitive types used across every generator.

/// The sole mutable input of a generation request.
pub type Seed = i32;

/// Numeric identifier of a profiling float, e.g. 2902300.
pub type PlatformId = i32;

/// Day index inside a forecast series. Day 0 is the first training day.
pub type DayIndex = usize;
