use orders_etl_core::contract::LambdaResponse;
use orders_etl_core::job::PipelineJob;
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::pipeline::EtlPipeline;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EtlTriggerError {
    #[error("{0}")]
    Pipeline(String),
}

/// Runs the orders-clean job. The event is not inspected.
///
/// Any `Ok` from the pipeline yields the fixed 200 envelope; only a pipeline
/// error changes the outcome, and it aborts the invocation.
pub fn handle_etl_event(
    _event: &Value,
    pipeline: &impl EtlPipeline,
) -> Result<LambdaResponse, EtlTriggerError> {
    let job = PipelineJob::orders_clean();
    info!(
        component = "etl_trigger",
        orders_path = %job.orders_path,
        customers_path = %job.customers_path,
        output_path = %job.output_path,
        output_format = %job.output_format,
        "pipeline_started"
    );

    if let Err(message) = pipeline.run(&job) {
        error!(component = "etl_trigger", error = %message, "pipeline_failed");
        return Err(EtlTriggerError::Pipeline(message));
    }

    info!(component = "etl_trigger", "pipeline_completed");
    Ok(LambdaResponse::etl_success())
}
