//! Input and output records for dispatch planning.
//!
//! Orders and trucks are immutable once handed to the planner; the planner
//! keeps its own per-run copies of anything that changes.

use serde::{Deserialize, Serialize};

/// Demand to move `tons` from `mine` to `destination` by `deadline_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub mine: String,
    pub destination: String,
    pub tons: u32,
    /// May be exceeded; lateness is penalized, not forbidden.
    pub deadline_hour: i64,
    /// 1 (low) to 5 (high).
    pub priority: u8,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        mine: impl Into<String>,
        destination: impl Into<String>,
        tons: u32,
        deadline_hour: i64,
        priority: u8,
    ) -> Self {
        Self {
            id: id.into(),
            mine: mine.into(),
            destination: destination.into(),
            tons,
            deadline_hour,
            priority,
        }
    }
}

/// A truck as supplied by the caller: where and when it first becomes free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    pub location: String,
    pub capacity_tons: u32,
    pub available_hour: i64,
}

impl Truck {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        capacity_tons: u32,
        available_hour: i64,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            capacity_tons,
            available_hour,
        }
    }
}

/// One committed trip: `assigned_tons` of an order carried by a truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub order_id: String,
    pub truck_id: String,
    pub assigned_tons: u32,
    pub pickup_hour: i64,
    pub eta_hour: i64,
    /// Rounded to one decimal place. Diagnostic only.
    pub delivery_score: f64,
}
