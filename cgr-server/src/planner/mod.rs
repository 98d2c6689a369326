//! Route planner using contact graph routing.
//!
//! This module implements the core algorithm that answers: "given this
//! contact schedule, when is the earliest data sent from one node can reach
//! another, and over which contacts?"
//!
//! The search is a Dijkstra variant over contacts. A frontier with lazy
//! deletion stands in for decrease-key, and each query keeps its own state
//! so one plan serves any number of queries.

mod config;
mod frontier;
mod route;
mod search;
mod state;


pub use config::SearchConfig;
pub use frontier::{Frontier, FrontierEntry};
pub use route::{Route, RouteOutcome, SearchResult, SearchStats};
pub use search::{Planner, RouteQuery, SearchError};
