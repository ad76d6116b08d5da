pub const ATHENA_RESULTS_PREFIX: &str = "athena-results";

/// Renders the key exactly as stored; `/x` and `x` are distinct objects.
pub fn s3_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

/// Athena expects a prefix location, so the result always ends with `/`.
pub fn query_results_location(bucket: &str, prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        format!("s3://{bucket}/")
    } else {
        format!("s3://{bucket}/{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_object_uri() {
        assert_eq!(
            s3_uri("marcelo-orders-bucket", "data/bloque4/orders_clean.snappy.parquet"),
            "s3://marcelo-orders-bucket/data/bloque4/orders_clean.snappy.parquet"
        );
        assert_eq!(s3_uri("b", "/leading/slash.csv"), "s3://b//leading/slash.csv");
    }

    #[test]
    fn results_location_under_bucket() {
        assert_eq!(
            query_results_location("b", ATHENA_RESULTS_PREFIX),
            "s3://b/athena-results/"
        );
        assert_eq!(
            query_results_location("b", "/nested/results/"),
            "s3://b/nested/results/"
        );
        assert_eq!(query_results_location("b", ""), "s3://b/");
    }
}
