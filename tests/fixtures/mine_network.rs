//! Two mines, two plants, two yards.

use std::cell::RefCell;

use haul_dispatch::error::DispatchError;
use haul_dispatch::routes::{RouteTable, RouteTables};
use haul_dispatch::traits::DurationLookup;

pub const MINE_A: &str = "Mine-A";
pub const MINE_B: &str = "Mine-B";
pub const PLANT_1: &str = "Plant-1";
pub const PLANT_2: &str = "Plant-2";
pub const YARD_EAST: &str = "Yard-East";
pub const YARD_WEST: &str = "Yard-West";

pub fn haul_table() -> RouteTable {
    [
        (MINE_A, PLANT_1, 3),
        (MINE_A, PLANT_2, 5),
        (MINE_B, PLANT_1, 4),
        (MINE_B, PLANT_2, 2),
    ]
    .into_iter()
    .collect()
}

pub fn reposition_table() -> RouteTable {
    [
        (YARD_EAST, MINE_A, 1),
        (YARD_EAST, MINE_B, 2),
        (YARD_WEST, MINE_A, 2),
        (YARD_WEST, MINE_B, 1),
        (MINE_A, MINE_A, 0),
        (MINE_B, MINE_B, 0),
        (MINE_A, MINE_B, 2),
        (MINE_B, MINE_A, 2),
    ]
    .into_iter()
    .collect()
}

pub fn network() -> RouteTables {
    RouteTables::new(haul_table(), reposition_table())
}

/// Wraps a lookup and records every pair it was asked for.
pub struct RecordingLookup<L> {
    inner: L,
    pub calls: RefCell<Vec<(&'static str, String, String)>>,
}

impl<L> RecordingLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn count(&self, kind: &str) -> usize {
        self.calls.borrow().iter().filter(|(k, _, _)| *k == kind).count()
    }
}

impl<L: DurationLookup> DurationLookup for RecordingLookup<L> {
    fn haul_hours(&self, mine: &str, destination: &str) -> Result<u32, DispatchError> {
        self.calls
            .borrow_mut()
            .push(("haul", mine.to_string(), destination.to_string()));
        self.inner.haul_hours(mine, destination)
    }

    fn reposition_hours(&self, location: &str, mine: &str) -> Result<u32, DispatchError> {
        self.calls
            .borrow_mut()
            .push(("reposition", location.to_string(), mine.to_string()));
        self.inner.reposition_hours(location, mine)
    }
}

/// Every pair takes the same time.
pub struct UniformLookup(pub u32);

impl DurationLookup for UniformLookup {
    fn haul_hours(&self, _mine: &str, _destination: &str) -> Result<u32, DispatchError> {
        Ok(self.0)
    }

    fn reposition_hours(&self, location: &str, mine: &str) -> Result<u32, DispatchError> {
        Ok(if location == mine { 0 } else { self.0 })
    }
}
