use std::time::Duration;

pub(crate) fn retriable_status(code: u16) -> bool {
    matches!(code, 500 | 502 | 503 | 504 | 429 | 408)
}

/// Linear backoff for job polling: `base * attempt`, so early polls are
/// cheap and long-running jobs are queried progressively less often.
pub(crate) fn poll_delay(base: Duration, attempt: u32) -> Duration {
    base * attempt.max(1)
}

/// Joins layer identifiers into the `Layer_List` request value.
pub(crate) fn join_layer_list(layers: &[&str]) -> String {
    layers.join(";")
}

pub(crate) fn urljoin(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
