use crate::contract::QueryExecutionRequest;
use crate::storage_keys::{query_results_location, ATHENA_RESULTS_PREFIX};

pub const RAW_ORDERS_PATH: &str = "data/raw/orders.csv";
pub const RAW_CUSTOMERS_PATH: &str = "data/raw/customers.csv";
pub const CLEAN_ORDERS_OUTPUT_PATH: &str = "data/clean/orders_clean";
pub const OUTPUT_FORMAT_PARQUET: &str = "parquet";

pub const ORDERS_DATABASE: &str = "default";
pub const SALES_BY_STATUS_QUERY: &str = "SELECT status, SUM(total_amount) AS total_sales
FROM default.orders_clean
GROUP BY status";

/// Arguments handed to the external ETL pipeline, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineJob {
    pub orders_path: String,
    pub customers_path: String,
    pub output_path: String,
    pub output_format: String,
}

impl PipelineJob {
    /// The job the ETL Lambda always runs.
    pub fn orders_clean() -> Self {
        Self {
            orders_path: RAW_ORDERS_PATH.to_string(),
            customers_path: RAW_CUSTOMERS_PATH.to_string(),
            output_path: CLEAN_ORDERS_OUTPUT_PATH.to_string(),
            output_format: OUTPUT_FORMAT_PARQUET.to_string(),
        }
    }

    pub fn args(&self) -> [&str; 4] {
        [
            &self.orders_path,
            &self.customers_path,
            &self.output_path,
            &self.output_format,
        ]
    }
}

pub fn sales_by_status_request(bucket: &str, work_group: Option<&str>) -> QueryExecutionRequest {
    QueryExecutionRequest {
        query_string: SALES_BY_STATUS_QUERY.to_string(),
        database: ORDERS_DATABASE.to_string(),
        output_location: query_results_location(bucket, ATHENA_RESULTS_PREFIX),
        work_group: work_group.map(str::to_string),
    }
}
