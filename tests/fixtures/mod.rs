//! Test fixtures for haul-dispatch.
//!
//! Provides a small two-mine, two-plant network and lookups with
//! instrumentation for asserting how the planner consults them.

#![allow(dead_code)]

pub mod mine_network;

pub use mine_network::*;
