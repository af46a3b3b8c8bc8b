//! Bluegreen: a minimal blue-green deployment web service.
//!
//! Exposes a version banner at `/` and a JSON health check at `/health`.
//! The deployed version and listen port are read from the process
//! environment at startup, so two instances differing only in configuration
//! can be swapped behind a load balancer.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
