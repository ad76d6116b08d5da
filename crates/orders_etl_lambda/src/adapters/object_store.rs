use std::path::Path;

pub trait ObjectStore {
    /// Streams the file at `local_path` into a single object.
    fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<(), String>;

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), String>;
}
