//! Service endpoint and request defaults.

/// LANDFIRE Product Service base URL. The submit and job endpoints hang off
/// this path (`{base}/submitJob`, `{base}/jobs/{id}`).
pub(crate) const DEFAULT_BASE_URL: &str =
    "https://lfps.usgs.gov/arcgis/rest/services/LandfireProductService/GPServer/LandfireProductService";

/// WGS84; the only projection the service accepts for the area of interest.
pub(crate) const DEFAULT_OUTPUT_CRS: &str = "4326";

pub(crate) const DEFAULT_RESAMPLE_RES: u32 = 30;
pub(crate) const RESAMPLE_RES_MIN: u32 = 30;
pub(crate) const RESAMPLE_RES_MAX: u32 = 9999;

/// Resolves the base URL from (in order of precedence): an explicit value,
/// the `LANDFIRE_URL` environment variable, the compiled-in service URL.
pub(crate) fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var("LANDFIRE_URL").ok())
        .filter(|u| !u.trim().is_empty())
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
