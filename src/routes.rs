//! Static duration tables keyed by exact (origin, destination) pairs.
//!
//! Tables are built once (inline, from a JSON file, or from a route service)
//! and only read during planning.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, RouteKind};
use crate::traits::DurationLookup;

/// Compound map key for a directed pair of locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Serialized form of a single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub hours: u32,
}

/// Directed pair → whole hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RouteEntry>", into = "Vec<RouteEntry>")]
pub struct RouteTable {
    hours: HashMap<RouteKey, u32>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, origin: impl Into<String>, destination: impl Into<String>, hours: u32) {
        self.hours.insert(RouteKey::new(origin, destination), hours);
    }

    pub fn get(&self, origin: &str, destination: &str) -> Option<u32> {
        self.hours.get(&RouteKey::new(origin, destination)).copied()
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    fn lookup(&self, kind: RouteKind, origin: &str, destination: &str) -> Result<u32, DispatchError> {
        self.get(origin, destination)
            .ok_or_else(|| DispatchError::undefined_route(kind, origin, destination))
    }
}

impl<O, D> FromIterator<(O, D, u32)> for RouteTable
where
    O: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (O, D, u32)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (origin, destination, hours) in iter {
            table.insert(origin, destination, hours);
        }
        table
    }
}

impl From<Vec<RouteEntry>> for RouteTable {
    fn from(entries: Vec<RouteEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.from, entry.to, entry.hours))
            .collect()
    }
}

impl From<RouteTable> for Vec<RouteEntry> {
    fn from(table: RouteTable) -> Self {
        let mut entries: Vec<RouteEntry> = table
            .hours
            .into_iter()
            .map(|(key, hours)| RouteEntry {
                from: key.origin,
                to: key.destination,
                hours,
            })
            .collect();
        // HashMap order is arbitrary; keep files diffable.
        entries.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        entries
    }
}

/// The haul and repositioning tables consulted by the planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTables {
    pub haul: RouteTable,
    pub reposition: RouteTable,
}

impl RouteTables {
    pub fn new(haul: RouteTable, reposition: RouteTable) -> Self {
        Self { haul, reposition }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DispatchError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DispatchError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String, DispatchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl DurationLookup for RouteTables {
    fn haul_hours(&self, mine: &str, destination: &str) -> Result<u32, DispatchError> {
        self.haul.lookup(RouteKind::Haul, mine, destination)
    }

    fn reposition_hours(&self, location: &str, mine: &str) -> Result<u32, DispatchError> {
        self.reposition.lookup(RouteKind::Reposition, location, mine)
    }
}
