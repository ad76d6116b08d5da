use std::process::ExitCode;

use orders_etl_core::config::PublisherConfig;
use orders_etl_lambda::adapters::s3::S3ObjectStore;
use orders_etl_lambda::handlers::publisher::publish_parquet;
use orders_etl_lambda::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = PublisherConfig::from_env();
    let store = S3ObjectStore::from_ambient_config().await;
    match publish_parquet(&config, &store) {
        Ok(receipt) => {
            println!("{}", receipt.confirmation());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
