//! Planning inputs bundled for files and the demo run.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::model::{Order, Truck};
use crate::routes::{RouteTable, RouteTables};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub orders: Vec<Order>,
    pub trucks: Vec<Truck>,
    pub routes: RouteTables,
}

impl Scenario {
    /// Parse and validate a scenario document.
    pub fn from_json_str(json: &str) -> Result<Self, DispatchError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DispatchError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject inputs the planner is not defined for. Route coverage is not
    /// checked here; missing pairs surface during planning.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let mut order_ids = HashSet::new();
        for order in &self.orders {
            if !order_ids.insert(order.id.as_str()) {
                return Err(invalid(format!("duplicate order id {}", order.id)));
            }
            if !(1..=5).contains(&order.priority) {
                return Err(invalid(format!(
                    "order {} has priority {}, expected 1-5",
                    order.id, order.priority
                )));
            }
            if order.tons == 0 {
                return Err(invalid(format!("order {} has no tons", order.id)));
            }
        }

        let mut truck_ids = HashSet::new();
        for truck in &self.trucks {
            if !truck_ids.insert(truck.id.as_str()) {
                return Err(invalid(format!("duplicate truck id {}", truck.id)));
            }
            if truck.capacity_tons == 0 {
                return Err(invalid(format!("truck {} has no capacity", truck.id)));
            }
        }

        Ok(())
    }
}

fn invalid(reason: String) -> DispatchError {
    DispatchError::InvalidScenario(reason)
}

/// Two mines, two plants, three trucks.
pub fn demo() -> Scenario {
    let orders = vec![
        Order::new("O-101", "Mine-A", "Plant-1", 60, 10, 5),
        Order::new("O-102", "Mine-B", "Plant-2", 45, 9, 4),
        Order::new("O-103", "Mine-A", "Plant-2", 30, 12, 3),
    ];

    let trucks = vec![
        Truck::new("T-01", "Yard-East", 30, 0),
        Truck::new("T-02", "Yard-West", 25, 0),
        Truck::new("T-03", "Mine-A", 20, 1),
    ];

    let haul: RouteTable = [
        ("Mine-A", "Plant-1", 3),
        ("Mine-A", "Plant-2", 5),
        ("Mine-B", "Plant-1", 4),
        ("Mine-B", "Plant-2", 2),
    ]
    .into_iter()
    .collect();

    let reposition: RouteTable = [
        ("Yard-East", "Mine-A", 1),
        ("Yard-East", "Mine-B", 2),
        ("Yard-West", "Mine-A", 2),
        ("Yard-West", "Mine-B", 1),
        ("Mine-A", "Mine-A", 0),
        ("Mine-B", "Mine-B", 0),
        ("Mine-A", "Mine-B", 2),
        ("Mine-B", "Mine-A", 2),
    ]
    .into_iter()
    .collect();

    Scenario {
        orders,
        trucks,
        routes: RouteTables::new(haul, reposition),
    }
}
