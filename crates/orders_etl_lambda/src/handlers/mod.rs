pub mod etl_trigger;
pub mod publisher;
pub mod query_submitter;
pub mod uploader;

#[cfg(test)]
pub(crate) mod test_support;
