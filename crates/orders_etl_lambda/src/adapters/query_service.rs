use orders_etl_core::contract::QueryExecutionRequest;

pub trait QueryService {
    /// Submits the query and returns the service's execution identifier.
    fn start_query_execution(&self, request: &QueryExecutionRequest) -> Result<String, String>;
}
