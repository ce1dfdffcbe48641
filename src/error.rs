use anyhow::anyhow;
use reqwest::StatusCode;

/// Error for a filter value outside its declared enumeration. Unknown
/// names/codes are not errors (they match nothing); this is reserved for the
/// fixed theme/version/region vocabularies.
pub(crate) fn invalid_filter_value(
    dimension: &str,
    value: &str,
    allowed: &[&'static str],
) -> anyhow::Error {
    anyhow!(
        "invalid {} filter value [{}]; accepted values are: {}",
        dimension,
        value,
        allowed.join(", ")
    )
}

/// ArcGIS REST error payload: `{"error":{"code":400,"message":"...","details":[...]}}`.
///
/// The GPServer reports some failures this way with HTTP 200, so callers
/// check for this body shape on every JSON reply, not only on error statuses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct LfpsErrorResponse {
    pub(crate) error: LfpsError,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct LfpsError {
    #[serde(default)]
    pub(crate) code: Option<i64>,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) details: Vec<String>,
}

pub(crate) fn format_lfps_error(
    status: StatusCode,
    url: &str,
    e: &LfpsErrorResponse,
) -> anyhow::Error {
    let message = e.error.message.as_deref().unwrap_or("");
    let code = e.error.code.unwrap_or(status.as_u16() as i64);
    let details = e.error.details.join("; ");

    if status == StatusCode::NOT_FOUND {
        return anyhow!(
            "LFPS endpoint not found (HTTP 404).\n- The service path may have changed, or your configured base URL is incorrect\n- Expected base: https://lfps.usgs.gov/arcgis/rest/services/LandfireProductService/GPServer/LandfireProductService\n\nServer message: {}\nrequest: {}",
            message,
            url
        );
    }

    anyhow!(
        "LFPS request failed: code {} for url ({})\n{}{}{}",
        code,
        url,
        message,
        if details.is_empty() { "" } else { "\n" },
        details
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_value_names_dimension_and_value() {
        let err = invalid_filter_value("theme", "weather", &["fuel", "map_zones"]);
        let msg = err.to_string();
        assert!(msg.contains("theme"));
        assert!(msg.contains("[weather]"));
        assert!(msg.contains("fuel, map_zones"));
    }

    #[test]
    fn parses_arcgis_error_body() {
        let body = r#"{"error":{"code":400,"message":"Invalid layer list","details":["Layer BADLAYER not found"]}}"#;
        let resp: LfpsErrorResponse = serde_json::from_str(body).unwrap();
        let err = format_lfps_error(StatusCode::OK, "https://example/submitJob", &resp);
        let msg = err.to_string();
        assert!(msg.contains("code 400"));
        assert!(msg.contains("Invalid layer list"));
        assert!(msg.contains("BADLAYER"));
    }
}
