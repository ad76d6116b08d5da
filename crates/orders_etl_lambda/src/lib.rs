//! AWS-oriented adapters and handlers for the orders ETL entry points.
//!
//! Handlers depend only on the adapter traits; the S3, Athena, and process
//! implementations of those traits live next to them in `adapters`.

pub mod adapters;
pub mod handlers;
pub mod telemetry;
