//! Environment-backed settings for the binaries.
//!
//! Every variable is optional and empty values count as unset, so a bare
//! environment reproduces the fixed locations the scripts were written with.

use std::path::PathBuf;

pub const DEFAULT_PIPELINE_COMMAND: &str = "etl_pipeline";
pub const DEFAULT_PARQUET_SOURCE_FILE: &str = "data/output/orders_clean.snappy.parquet";
pub const DEFAULT_PARQUET_TARGET_BUCKET: &str = "marcelo-orders-bucket";
pub const DEFAULT_PARQUET_TARGET_KEY: &str = "data/bloque4/orders_clean.snappy.parquet";

pub const PIPELINE_COMMAND_ENV: &str = "ETL_PIPELINE_COMMAND";
pub const PARQUET_SOURCE_FILE_ENV: &str = "PARQUET_SOURCE_FILE";
pub const PARQUET_TARGET_BUCKET_ENV: &str = "PARQUET_TARGET_BUCKET";
pub const PARQUET_TARGET_KEY_ENV: &str = "PARQUET_TARGET_KEY";
pub const ATHENA_WORKGROUP_ENV: &str = "ATHENA_WORKGROUP";

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub command: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_PIPELINE_COMMAND.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            command: non_empty(&lookup, PIPELINE_COMMAND_ENV)
                .unwrap_or_else(|| DEFAULT_PIPELINE_COMMAND.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    pub local_file: PathBuf,
    pub bucket: String,
    pub key: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            local_file: PathBuf::from(DEFAULT_PARQUET_SOURCE_FILE),
            bucket: DEFAULT_PARQUET_TARGET_BUCKET.to_string(),
            key: DEFAULT_PARQUET_TARGET_KEY.to_string(),
        }
    }
}

impl PublisherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            local_file: non_empty(&lookup, PARQUET_SOURCE_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.local_file),
            bucket: non_empty(&lookup, PARQUET_TARGET_BUCKET_ENV).unwrap_or(defaults.bucket),
            key: non_empty(&lookup, PARQUET_TARGET_KEY_ENV).unwrap_or(defaults.key),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    /// `None` leaves the choice to the account's primary workgroup.
    pub work_group: Option<String>,
}

impl QueryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            work_group: non_empty(&lookup, ATHENA_WORKGROUP_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn unset_environment_uses_fixed_publish_target() {
        let config = PublisherConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, PublisherConfig::default());
        assert_eq!(
            config.local_file,
            PathBuf::from("data/output/orders_clean.snappy.parquet")
        );
        assert_eq!(config.bucket, "marcelo-orders-bucket");
        assert_eq!(config.key, "data/bloque4/orders_clean.snappy.parquet");
    }

    #[test]
    fn publish_target_overrides_apply_individually() {
        let config = PublisherConfig::from_lookup(lookup_from(&[
            (PARQUET_TARGET_BUCKET_ENV, "staging-bucket"),
            (PARQUET_TARGET_KEY_ENV, ""),
        ]));
        assert_eq!(config.bucket, "staging-bucket");
        assert_eq!(config.key, DEFAULT_PARQUET_TARGET_KEY);
        assert_eq!(config.local_file, PathBuf::from(DEFAULT_PARQUET_SOURCE_FILE));
    }

    #[test]
    fn pipeline_command_defaults_and_overrides() {
        assert_eq!(
            PipelineConfig::from_lookup(lookup_from(&[])).command,
            "etl_pipeline"
        );
        assert_eq!(
            PipelineConfig::from_lookup(lookup_from(&[(PIPELINE_COMMAND_ENV, "/opt/bin/etl")]))
                .command,
            "/opt/bin/etl"
        );
    }

    #[test]
    fn blank_workgroup_counts_as_unset() {
        assert_eq!(
            QueryConfig::from_lookup(lookup_from(&[(ATHENA_WORKGROUP_ENV, "  ")])).work_group,
            None
        );
        assert_eq!(
            QueryConfig::from_lookup(lookup_from(&[(ATHENA_WORKGROUP_ENV, "analytics")]))
                .work_group
                .as_deref(),
            Some("analytics")
        );
    }
}
