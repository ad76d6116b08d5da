use lambda_runtime::{service_fn, Error, LambdaEvent};
use orders_etl_core::config::PipelineConfig;
use orders_etl_core::contract::LambdaResponse;
use orders_etl_lambda::adapters::pipeline::CommandPipeline;
use orders_etl_lambda::handlers::etl_trigger::handle_etl_event;
use orders_etl_lambda::telemetry::init_tracing;
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    pipeline: &CommandPipeline,
) -> Result<LambdaResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let response = span.in_scope(|| handle_etl_event(&event.payload, pipeline))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = PipelineConfig::from_env();
    let pipeline = CommandPipeline::from_command_line(&config.command)
        .ok_or_else(|| Error::from("ETL_PIPELINE_COMMAND must name a program"))?;
    tracing::info!(program = pipeline.program(), "etl_lambda_ready");

    lambda_runtime::run(service_fn(|event| handle_request(event, &pipeline))).await
}
