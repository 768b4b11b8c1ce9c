//! HTTP binding for the customer platform backend.
//!
//! Routes, DTOs, and middleware only; all business rules live in
//! `cust_core`. The library target exists so integration tests can build
//! the application with mock collaborators.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod seed;
