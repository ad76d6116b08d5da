use lambda_runtime::{service_fn, Error, LambdaEvent};
use orders_etl_core::config::QueryConfig;
use orders_etl_core::contract::QueryExecutionResponse;
use orders_etl_lambda::adapters::athena::AthenaQueryService;
use orders_etl_lambda::handlers::query_submitter::handle_query_event;
use orders_etl_lambda::telemetry::init_tracing;
use serde_json::Value;

struct RuntimeDependencies {
    config: QueryConfig,
    query_service: AthenaQueryService,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<QueryExecutionResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let response = span
        .in_scope(|| handle_query_event(event.payload, &deps.config, &deps.query_service))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let deps = RuntimeDependencies {
        config: QueryConfig::from_env(),
        query_service: AthenaQueryService::from_ambient_config().await,
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
