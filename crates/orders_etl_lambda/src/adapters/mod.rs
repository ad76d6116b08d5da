use std::future::Future;

pub mod athena;
pub mod object_store;
pub mod pipeline;
pub mod query_service;
pub mod s3;

/// Drives one SDK future to completion from synchronous adapter code.
///
/// Requires the multi-threaded tokio runtime the binaries run on.
pub(crate) fn block_on_sdk<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
