//! Delivery-priority objective used to rank candidate trucks.

use crate::model::Order;

/// Weights of the delivery score. Priority dominates so that any priority
/// difference outranks lateness and tonnage at realistic magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Points per priority level.
    pub priority: f64,
    /// Penalty per hour past the deadline.
    pub lateness: f64,
    /// Penalty per ton of the order.
    pub tonnage: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            priority: 100.0,
            lateness: 30.0,
            tonnage: 0.1,
        }
    }
}

/// Score of delivering `order` at `eta_hour`. Higher is better.
///
/// Arrivals before the deadline are not rewarded; only lateness is penalized.
pub fn delivery_score(order: &Order, eta_hour: i64, weights: &ScoreWeights) -> f64 {
    let lateness = (eta_hour - order.deadline_hour).max(0);
    f64::from(order.priority) * weights.priority
        - lateness as f64 * weights.lateness
        - f64::from(order.tons) * weights.tonnage
}

/// Round to one decimal place for reporting.
pub fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
