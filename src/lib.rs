//! brickctl: Databricks workspace administration
//!
//! Lists, filters, starts and stops clusters, finds jobs, and lists, backs up
//! and deletes SQL queries and dashboards. Entities are addressed by free-text
//! fragments of their id or name, resolved to exactly one match.

pub mod backup;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod profile;
pub mod progress;
pub mod resolve;
