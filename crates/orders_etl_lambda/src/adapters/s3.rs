use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;

use super::block_on_sdk;
use super::object_store::ObjectStore;

#[derive(Clone)]
pub struct S3ObjectStore {
    s3_client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(s3_client: aws_sdk_s3::Client) -> Self {
        Self { s3_client }
    }

    pub async fn from_ambient_config() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_s3::Client::new(&aws_config))
    }

    fn send_put(&self, bucket: &str, key: &str, body: ByteStream) -> Result<(), String> {
        let request = self
            .s3_client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body);

        block_on_sdk(async move {
            request
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to write object to s3: {error}"))
        })
    }
}

impl ObjectStore for S3ObjectStore {
    fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<(), String> {
        let path = local_path.to_path_buf();
        let body = block_on_sdk(async move { ByteStream::from_path(&path).await }).map_err(
            |error| format!("failed to open '{}' for upload: {error}", local_path.display()),
        )?;
        self.send_put(bucket, key, body)
    }

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), String> {
        self.send_put(bucket, key, ByteStream::from(body))
    }
}
