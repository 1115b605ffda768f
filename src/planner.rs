//! Greedy dispatch planner.
//!
//! Orders are visited once, highest priority and earliest deadline first. For
//! each order the planner repeatedly picks the best-scoring truck across the
//! whole fleet, commits a trip, and moves that truck to the end of the trip
//! until the order is covered or no truck qualifies. Commitments are never
//! revisited.

use std::cmp::Reverse;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::DispatchError;
use crate::model::{Dispatch, Order, Truck};
use crate::scoring::{ScoreWeights, delivery_score, round_score};
use crate::traits::DurationLookup;

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub weights: ScoreWeights,
    /// Latest allowed ETA. Trips that would arrive later are not candidates.
    /// `None` plans without a horizon.
    pub horizon_hour: Option<i64>,
}

/// Where a truck ends up after its most recent trip.
#[derive(Debug, Clone, Copy)]
struct TruckState<'a> {
    location: &'a str,
    available_hour: i64,
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    truck: &'a Truck,
    pickup_hour: i64,
    eta_hour: i64,
    score: f64,
    assign_tons: u32,
}

/// Plan `orders` onto `trucks`.
///
/// Truck order is significant: it is the iteration order of the candidate
/// search and therefore decides ties. Any undefined route aborts the whole run
/// and no dispatches are returned.
pub fn plan<L>(
    orders: &[Order],
    trucks: &[Truck],
    lookup: &L,
    options: &PlanOptions,
) -> Result<Vec<Dispatch>, DispatchError>
where
    L: DurationLookup,
{
    let _span = tracing::info_span!("plan", orders = orders.len(), trucks = trucks.len()).entered();

    let mut remaining: HashMap<&str, u32> = orders.iter().map(|order| (order.id.as_str(), order.tons)).collect();
    let mut states: HashMap<&str, TruckState<'_>> = trucks
        .iter()
        .map(|truck| {
            (
                truck.id.as_str(),
                TruckState {
                    location: truck.location.as_str(),
                    available_hour: truck.available_hour,
                },
            )
        })
        .collect();

    // Stable: input order breaks remaining ties.
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by_key(|order| (Reverse(order.priority), order.deadline_hour));

    let mut dispatches = Vec::new();

    for order in sorted {
        while let Some(left) = remaining.get(order.id.as_str()).copied().filter(|tons| *tons > 0) {
            let best = select_truck(order, left, trucks, &states, lookup, options).inspect_err(|err| {
                tracing::error!(order_id = %order.id, error = %err, "planning aborted");
            })?;

            let Some(best) = best else {
                break;
            };

            remaining.insert(order.id.as_str(), left - best.assign_tons);
            states.insert(
                best.truck.id.as_str(),
                TruckState {
                    location: order.mine.as_str(),
                    available_hour: best.eta_hour,
                },
            );

            tracing::debug!(
                order_id = %order.id,
                truck_id = %best.truck.id,
                tons = best.assign_tons,
                pickup_hour = best.pickup_hour,
                eta_hour = best.eta_hour,
                score = best.score,
                "dispatch committed"
            );

            dispatches.push(Dispatch {
                order_id: order.id.clone(),
                truck_id: best.truck.id.clone(),
                assigned_tons: best.assign_tons,
                pickup_hour: best.pickup_hour,
                eta_hour: best.eta_hour,
                delivery_score: round_score(best.score),
            });
        }
    }

    for order in orders {
        if let Some(left) = remaining.get(order.id.as_str()).copied().filter(|tons| *tons > 0) {
            tracing::warn!(order_id = %order.id, remaining_tons = left, "order not fully dispatched");
        }
    }

    tracing::info!(dispatches = dispatches.len(), "plan complete");

    Ok(dispatches)
}

/// Best truck for the next trip of `order`, or `None` if no truck qualifies.
fn select_truck<'a, L>(
    order: &Order,
    remaining_tons: u32,
    trucks: &'a [Truck],
    states: &HashMap<&str, TruckState<'_>>,
    lookup: &L,
    options: &PlanOptions,
) -> Result<Option<Candidate<'a>>, DispatchError>
where
    L: DurationLookup,
{
    let mut best: Option<Candidate<'a>> = None;

    for truck in trucks {
        let Some(state) = states.get(truck.id.as_str()) else {
            continue;
        };

        let pickup_hour = state.available_hour + i64::from(lookup.reposition_hours(state.location, &order.mine)?);
        let eta_hour = pickup_hour + i64::from(lookup.haul_hours(&order.mine, &order.destination)?);

        // An empty truck would never reduce the order.
        if truck.capacity_tons == 0 {
            continue;
        }
        if options.horizon_hour.is_some_and(|horizon| eta_hour > horizon) {
            continue;
        }

        let score = delivery_score(order, eta_hour, &options.weights);

        // Strictly greater: on equal scores the truck listed first keeps the trip.
        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(Candidate {
                truck,
                pickup_hour,
                eta_hour,
                score,
                assign_tons: truck.capacity_tons.min(remaining_tons),
            });
        }
    }

    Ok(best)
}

/// Assigned versus requested tonnage for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub order_id: String,
    pub total_tons: u32,
    pub assigned_tons: u32,
}

impl Fulfillment {
    pub fn remaining_tons(&self) -> u32 {
        self.total_tons.saturating_sub(self.assigned_tons)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_tons() == 0
    }
}

/// Per-order fulfillment of a finished plan, in input order.
///
/// Unfulfilled demand is a normal planning outcome; this is how callers find it.
pub fn fulfillment(orders: &[Order], dispatches: &[Dispatch]) -> Vec<Fulfillment> {
    let mut assigned: HashMap<&str, u32> = HashMap::new();
    for dispatch in dispatches {
        *assigned.entry(dispatch.order_id.as_str()).or_default() += dispatch.assigned_tons;
    }

    orders
        .iter()
        .map(|order| Fulfillment {
            order_id: order.id.clone(),
            total_tons: order.tons,
            assigned_tons: assigned.get(order.id.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// An independent fleet with its own demand.
#[derive(Debug, Clone)]
pub struct FleetRun {
    pub name: String,
    pub orders: Vec<Order>,
    pub trucks: Vec<Truck>,
}

/// Plan several independent fleets in parallel.
///
/// Each run keeps private truck and order state; only the route lookup is
/// shared. Results are returned in the order of `runs`.
pub fn plan_fleets<L>(
    runs: &[FleetRun],
    lookup: &L,
    options: &PlanOptions,
) -> Vec<Result<Vec<Dispatch>, DispatchError>>
where
    L: DurationLookup + Sync,
{
    runs.par_iter()
        .map(|run| {
            let _span = tracing::info_span!("fleet", name = %run.name).entered();
            plan(&run.orders, &run.trucks, lookup, options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteTables;

    fn single_mine_tables() -> RouteTables {
        RouteTables::new(
            [("M", "P", 3)].into_iter().collect(),
            [("M", "M", 0), ("Yard", "M", 2)].into_iter().collect(),
        )
    }

    #[test]
    fn test_single_dispatch_scenario() {
        let orders = vec![Order::new("O-1", "M", "P", 20, 8, 5)];
        let trucks = vec![Truck::new("T-1", "M", 20, 0)];

        let plan = plan(&orders, &trucks, &single_mine_tables(), &PlanOptions::default()).unwrap();

        assert_eq!(
            plan,
            vec![Dispatch {
                order_id: "O-1".to_string(),
                truck_id: "T-1".to_string(),
                assigned_tons: 20,
                pickup_hour: 0,
                eta_hour: 3,
                delivery_score: 498.0,
            }]
        );
    }

    #[test]
    fn test_truck_state_advances_between_trips() {
        let orders = vec![Order::new("O-1", "M", "P", 50, 20, 3)];
        let trucks = vec![Truck::new("T-1", "Yard", 20, 1)];

        let plan = plan(&orders, &trucks, &single_mine_tables(), &PlanOptions::default()).unwrap();

        let trips: Vec<(u32, i64, i64)> = plan
            .iter()
            .map(|d| (d.assigned_tons, d.pickup_hour, d.eta_hour))
            .collect();
        // First trip repositions from the yard, later ones start at the mine.
        assert_eq!(trips, vec![(20, 3, 6), (20, 6, 9), (10, 9, 12)]);
    }

    #[test]
    fn test_zero_capacity_truck_is_never_selected() {
        let orders = vec![Order::new("O-1", "M", "P", 10, 8, 5)];
        let trucks = vec![Truck::new("T-0", "M", 0, 0), Truck::new("T-1", "Yard", 10, 0)];

        let plan = plan(&orders, &trucks, &single_mine_tables(), &PlanOptions::default()).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].truck_id, "T-1");
    }

    #[test]
    fn test_horizon_limits_trips() {
        let orders = vec![Order::new("O-1", "M", "P", 100, 8, 5)];
        let trucks = vec![Truck::new("T-1", "M", 20, 0)];
        let options = PlanOptions {
            horizon_hour: Some(7),
            ..PlanOptions::default()
        };

        let plan = plan(&orders, &trucks, &single_mine_tables(), &options).unwrap();

        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|d| d.eta_hour <= 7));
    }

    #[test]
    fn test_fulfillment_reports_shortfall() {
        let orders = vec![Order::new("O-1", "M", "P", 30, 8, 5), Order::new("O-2", "M", "P", 5, 8, 1)];
        let dispatches = vec![Dispatch {
            order_id: "O-1".to_string(),
            truck_id: "T-1".to_string(),
            assigned_tons: 20,
            pickup_hour: 0,
            eta_hour: 3,
            delivery_score: 497.0,
        }];

        let report = fulfillment(&orders, &dispatches);

        assert_eq!(report[0].remaining_tons(), 10);
        assert!(!report[0].is_complete());
        assert_eq!(report[1].assigned_tons, 0);
        assert_eq!(report[1].remaining_tons(), 5);
    }
}
