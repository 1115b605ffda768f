//! haul-dispatch: greedy truck dispatch for mine-to-plant hauling.
//!
//! Orders are assigned trip by trip to the truck that maximizes a
//! delivery-priority score, given static haul and repositioning tables.

pub mod error;
pub mod model;
pub mod traits;
pub mod routes;
pub mod route_service;
pub mod scoring;
pub mod planner;
pub mod report;
pub mod scenario;
