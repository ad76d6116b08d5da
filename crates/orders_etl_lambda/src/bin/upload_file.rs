use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orders_etl_lambda::adapters::s3::S3ObjectStore;
use orders_etl_lambda::handlers::uploader::upload_file;
use orders_etl_lambda::telemetry::init_tracing;

#[derive(Parser)]
#[command(
    name = "upload_file",
    about = "Upload a local file to S3 as a single object",
    long_about = "Uploads LOCAL_PATH to s3://BUCKET/KEY, overwriting any existing object.\n\
                  Credentials come from the default AWS provider chain."
)]
struct Cli {
    /// File to upload
    local_path: PathBuf,
    /// Destination bucket
    bucket: String,
    /// Destination object key
    key: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let store = S3ObjectStore::from_ambient_config().await;
    match upload_file(&cli.local_path, &cli.bucket, &cli.key, &store) {
        Ok(receipt) => {
            println!("{}", receipt.uri());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
