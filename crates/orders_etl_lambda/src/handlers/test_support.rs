use std::path::Path;
use std::sync::Mutex;

use crate::adapters::object_store::ObjectStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    UploadFile,
    PutObject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub call: StoreCall,
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

pub struct RecordingStore {
    objects: Mutex<Vec<StoredObject>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
        }
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().expect("poisoned mutex").clone()
    }

    fn record(&self, call: StoreCall, bucket: &str, key: &str, body: Vec<u8>) {
        self.objects
            .lock()
            .expect("poisoned mutex")
            .push(StoredObject {
                call,
                bucket: bucket.to_string(),
                key: key.to_string(),
                body,
            });
    }
}

impl ObjectStore for RecordingStore {
    fn upload_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<(), String> {
        let body = std::fs::read(local_path).map_err(|error| error.to_string())?;
        self.record(StoreCall::UploadFile, bucket, key, body);
        Ok(())
    }

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), String> {
        self.record(StoreCall::PutObject, bucket, key, body);
        Ok(())
    }
}

pub struct DenyingStore;

impl ObjectStore for DenyingStore {
    fn upload_file(&self, _local_path: &Path, _bucket: &str, _key: &str) -> Result<(), String> {
        Err("AccessDenied: Access Denied".to_string())
    }

    fn put_object(&self, _bucket: &str, _key: &str, _body: Vec<u8>) -> Result<(), String> {
        Err("AccessDenied: Access Denied".to_string())
    }
}
