use orders_etl_core::config::QueryConfig;
use orders_etl_core::contract::{
    normalize_event, required_str_field, EventError, QueryExecutionResponse,
};
use orders_etl_core::job::sales_by_status_request;
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::query_service::QueryService;

pub const BUCKET_FIELD: &str = "bucket";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryHandlerError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error("{0}")]
    Submission(String),
}

/// Submits the sales-by-status query with results under the event's bucket
/// and returns the execution id. Completion is not awaited.
pub fn handle_query_event(
    event: Value,
    config: &QueryConfig,
    service: &impl QueryService,
) -> Result<QueryExecutionResponse, QueryHandlerError> {
    let payload = normalize_event(event)?;
    let bucket = required_str_field(&payload, BUCKET_FIELD)?;

    let request = sales_by_status_request(bucket, config.work_group.as_deref());
    info!(
        component = "query_submitter",
        database = %request.database,
        output_location = %request.output_location,
        work_group = request.work_group.as_deref().unwrap_or("primary"),
        "query_submission_started"
    );

    let query_execution_id = service.start_query_execution(&request).map_err(|message| {
        error!(component = "query_submitter", error = %message, "query_submission_failed");
        QueryHandlerError::Submission(message)
    })?;

    info!(
        component = "query_submitter",
        query_execution_id = %query_execution_id,
        "query_submitted"
    );
    Ok(QueryExecutionResponse { query_execution_id })
}
