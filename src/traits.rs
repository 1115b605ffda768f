//! Seams between the planner and its collaborators.

use crate::error::DispatchError;

/// Provides travel durations in whole hours between named locations.
///
/// Implementations must fail with [`DispatchError::UndefinedRoute`] for
/// unknown pairs rather than fall back to a default duration.
pub trait DurationLookup {
    /// Loaded travel time from a mine to a destination plant.
    fn haul_hours(&self, mine: &str, destination: &str) -> Result<u32, DispatchError>;

    /// Empty travel time from a truck's current location to a mine.
    /// Same-location pairs are expected to resolve to zero.
    fn reposition_hours(&self, location: &str, mine: &str) -> Result<u32, DispatchError>;
}
