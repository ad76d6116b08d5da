//! Shared orders ETL primitives.
//!
//! This crate owns the fixed job and query parameters, the event and response
//! contracts, and S3 location formatting. It excludes AWS SDK and Lambda
//! runtime concerns, which live in `orders_etl_lambda`.

pub mod config;
pub mod contract;
pub mod job;
pub mod storage_keys;
