use aws_sdk_athena::types::{QueryExecutionContext, ResultConfiguration};
use orders_etl_core::contract::QueryExecutionRequest;

use super::block_on_sdk;
use super::query_service::QueryService;

#[derive(Clone)]
pub struct AthenaQueryService {
    athena_client: aws_sdk_athena::Client,
}

impl AthenaQueryService {
    pub fn new(athena_client: aws_sdk_athena::Client) -> Self {
        Self { athena_client }
    }

    pub async fn from_ambient_config() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_athena::Client::new(&aws_config))
    }
}

impl QueryService for AthenaQueryService {
    fn start_query_execution(&self, request: &QueryExecutionRequest) -> Result<String, String> {
        let call = self
            .athena_client
            .start_query_execution()
            .query_string(&request.query_string)
            .query_execution_context(
                QueryExecutionContext::builder()
                    .database(&request.database)
                    .build(),
            )
            .result_configuration(
                ResultConfiguration::builder()
                    .output_location(&request.output_location)
                    .build(),
            )
            .set_work_group(request.work_group.clone());

        let output = block_on_sdk(async move { call.send().await })
            .map_err(|error| format!("failed to start athena query: {error}"))?;

        output
            .query_execution_id()
            .map(str::to_string)
            .ok_or_else(|| "athena returned no query execution id".to_string())
    }
}
