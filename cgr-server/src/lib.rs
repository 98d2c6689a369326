//! Contact graph routing server.
//!
//! Loads a delay-tolerant network contact plan and answers: "if a bundle
//! leaves this node now, when is the earliest it can reach that one, and
//! over which contacts?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod plan;
pub mod planner;
pub mod web;
