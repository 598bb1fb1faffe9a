//! rapport-server library root.
//!
//! Exposes the router and its building blocks so integration tests can
//! drive the service in-process without binding a socket.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
