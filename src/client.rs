use anyhow::{Context, Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::config::{
    DEFAULT_OUTPUT_CRS, DEFAULT_RESAMPLE_RES, RESAMPLE_RES_MAX, RESAMPLE_RES_MIN, resolve_base_url,
};
use crate::error::{LfpsErrorResponse, format_lfps_error};
use crate::job::{JobReply, OutputFileReply, SubmitReply};
use crate::search::ProductSearch;
use crate::util::{join_layer_list, poll_delay, retriable_status};

/// Accessor for LANDFIRE data.
///
/// Submits a clip-and-deliver job for a set of layers over a bounding box,
/// polls the job until completion, then downloads the zipped archive.
#[derive(Debug, Clone)]
pub struct Landfire {
    /// Area of interest, `"min_x min_y max_x max_y"` in EPSG:4326.
    bbox: String,
    /// Output coordinate reference system, as a well-known integer ID.
    output_crs: String,
    /// Resampling resolution in meters, 30..=9999.
    resample_res: u32,

    base_url: String,
    retry_max: usize,
    poll_base: Duration,
    progress: bool,

    http: HttpClient,
}

impl Landfire {
    /// Creates an accessor for the given bounding box
    /// (`"min_x min_y max_x max_y"`, see [`crate::geospatial`] for helpers).
    ///
    /// The service base URL can be overridden with the `LANDFIRE_URL`
    /// environment variable or [`Landfire::with_base_url`].
    pub fn new(bbox: impl Into<String>) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("landfire-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("landfire-rs")),
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(300))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            bbox: bbox.into(),
            output_crs: DEFAULT_OUTPUT_CRS.to_string(),
            resample_res: DEFAULT_RESAMPLE_RES,
            base_url: resolve_base_url(None),
            retry_max: 10,
            poll_base: Duration::from_secs(2),
            progress: true,
            http,
        })
    }

    /// Output CRS in well-known integer ID (EPSG) form; defaults to `4326`.
    pub fn with_output_crs(mut self, output_crs: impl Into<String>) -> Self {
        self.output_crs = output_crs.into();
        self
    }

    /// Resampling resolution in meters; defaults to 30.
    pub fn with_resample_res(mut self, resample_res: u32) -> Result<Self> {
        if !(RESAMPLE_RES_MIN..=RESAMPLE_RES_MAX).contains(&resample_res) {
            bail!(
                "resample_res must be between {} and {} meters",
                RESAMPLE_RES_MIN,
                RESAMPLE_RES_MAX
            );
        }
        self.resample_res = resample_res;
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = resolve_base_url(Some(base_url.into()));
        self
    }

    pub fn with_retry_max(mut self, retry_max: usize) -> Self {
        self.retry_max = retry_max;
        self
    }

    /// Base delay for the linear polling backoff; defaults to 2 seconds.
    pub fn with_poll_base(mut self, poll_base: Duration) -> Self {
        self.poll_base = poll_base;
        self
    }

    /// Whether to report job status and show a download progress bar.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Requests `layers` clipped to the bounding box and downloads the
    /// resulting zipped GeoTIFF archive to `target` (must end in `.zip`).
    ///
    /// Layer identifiers are validated against the product catalog before
    /// anything is sent; use [`ProductSearch::layers`] to discover them.
    pub fn request_data(&self, layers: &[&str], target: &Path) -> Result<PathBuf> {
        self.validate_layers(layers)?;
        let target = validate_output_path(target)?;

        let submit_url = format!("{}/submitJob", self.base_url);
        let reply: SubmitReply = self.api_json(&submit_url, &self.base_params(layers))?;

        let job_id = reply.job_id.ok_or_else(|| {
            anyhow!("unable to obtain a job ID for the request; verify your request parameters")
        })?;
        self.log(&format!("Job {} submitted, processing request", job_id));

        let job_url = format!("{}/jobs/{}", self.base_url, job_id);
        let mut last_message = String::new();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            // Don't wait before the first status check.
            if attempt > 1 {
                thread::sleep(poll_delay(self.poll_base, attempt));
            }

            let reply: JobReply = self.api_json(&job_url, &[("f", "json")])?;
            if reply.latest_message() != last_message {
                last_message = reply.latest_message().to_string();
                self.log(&format!("Job status: {} ({})", reply.job_status, last_message));
            }

            match reply.job_status.as_str() {
                "esriJobSucceeded" => {
                    let results_url = reply.output_file_url(&job_url)?;
                    let result: OutputFileReply =
                        self.api_json(&results_url, &[("f", "json")])?;
                    let zip_url = result.zip_url(&self.base_url)?;

                    self.log(&format!("Downloading data to {}", target.display()));
                    self.download(&zip_url, &target)?;
                    self.log(&format!("Data written to {}", target.display()));
                    return Ok(target);
                }
                "esriJobSubmitted" | "esriJobExecuting" | "esriJobWaiting" | "esriJobNew" => {}
                other => bail!(
                    "job processing failed: status was {} and last message was `{}`",
                    other,
                    reply.latest_message()
                ),
            }
        }
    }

    fn validate_layers(&self, layers: &[&str]) -> Result<()> {
        if layers.is_empty() {
            bail!("no layers requested");
        }
        // Sorted full-catalog layer list.
        let known: Vec<&str> = ProductSearch::new().layers();
        let unknown: Vec<&str> = layers
            .iter()
            .copied()
            .filter(|layer| known.binary_search(layer).is_err())
            .collect();
        if !unknown.is_empty() {
            bail!(
                "specified layers do not match layers available from the LANDFIRE API: {}",
                unknown.join(", ")
            );
        }
        Ok(())
    }

    fn base_params(&self, layers: &[&str]) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("Layer_List", join_layer_list(layers)),
            ("Area_Of_Interest", self.bbox.clone()),
            ("Output_Projection", self.output_crs.clone()),
            ("f", "JSON".to_string()),
        ];
        // The service rejects an explicit 30 here; omit it for the default.
        if self.resample_res != DEFAULT_RESAMPLE_RES {
            params.push(("Resample_Resolution", self.resample_res.to_string()));
        }
        params
    }

    fn download(&self, url: &str, target: &Path) -> Result<()> {
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
        }

        let resp = self.robust_request(|| self.http.get(url).send())?;
        let mut resp = resp.error_for_status().context("download request failed")?;

        let pb = if self.progress {
            let pb = match resp.content_length() {
                Some(len) => {
                    let pb = ProgressBar::new(len);
                    pb.set_style(
                        ProgressStyle::with_template(
                            "{spinner:.green} {bytes}/{total_bytes} ({bytes_per_sec}) {wide_bar} {eta}",
                        )
                        .unwrap()
                        .progress_chars("=>-"),
                    );
                    pb
                }
                None => ProgressBar::new_spinner(),
            };
            Some(pb)
        } else {
            None
        };

        let mut out = std::fs::File::create(target)
            .with_context(|| format!("failed to open {}", target.display()))?;
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = match resp.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => return Err(e).context("download interrupted"),
            };
            out.write_all(&buf[..n])?;
            if let Some(pb) = &pb {
                pb.inc(n as u64);
            }
        }
        out.flush()?;

        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }
        Ok(())
    }

    fn api_json<TResp: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> Result<TResp> {
        let resp = self.robust_request(|| self.http.get(url).query(params).send())?;

        let status = resp.status();
        let text = resp.text().unwrap_or_default();

        // The GPServer reports some failures in an error body with HTTP 200,
        // so look for the error shape before checking the status code.
        if let Ok(err_json) = serde_json::from_str::<LfpsErrorResponse>(&text) {
            return Err(format_lfps_error(status, url, &err_json).into());
        }
        if !status.is_success() {
            bail!(
                "API request failed: HTTP {} for url ({})\n{}",
                status,
                url,
                text
            );
        }

        serde_json::from_str::<TResp>(&text)
            .with_context(|| format!("failed to parse API JSON (url={}, status={})", url, status))
    }

    fn robust_request<F>(&self, mut f: F) -> Result<Response>
    where
        F: FnMut() -> std::result::Result<Response, reqwest::Error>,
    {
        let mut tries = 0usize;
        loop {
            match f() {
                Ok(resp) => {
                    if retriable_status(resp.status().as_u16()) {
                        tries += 1;
                        if tries >= self.retry_max {
                            return Ok(resp);
                        }
                        thread::sleep(self.poll_base);
                        continue;
                    }
                    return Ok(resp);
                }
                Err(err) => {
                    tries += 1;
                    if tries >= self.retry_max {
                        return Err(err).context("could not connect")?;
                    }
                    // timeouts / transient connection errors
                    thread::sleep(self.poll_base);
                }
            }
        }
    }

    fn log(&self, msg: &str) {
        if self.progress {
            eprintln!("{}", msg);
        }
    }
}

fn validate_output_path(target: &Path) -> Result<PathBuf> {
    if target.extension().and_then(|e| e.to_str()) != Some("zip") {
        bail!(
            "{} is not a valid output path; the file name must end in `.zip`",
            target.display()
        );
    }
    Ok(target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BBOX: &str = "-107.70894965 46.56799094 -106.02718124 47.34869094";

    #[test]
    fn resample_res_range_check() {
        assert!(Landfire::new(BBOX).unwrap().with_resample_res(29).is_err());
        assert!(Landfire::new(BBOX).unwrap().with_resample_res(10_000).is_err());
        assert!(Landfire::new(BBOX).unwrap().with_resample_res(30).is_ok());
        assert!(Landfire::new(BBOX).unwrap().with_resample_res(9999).is_ok());
    }

    #[test]
    fn rejects_unknown_layers() {
        let lf = Landfire::new(BBOX).unwrap();
        let err = lf.validate_layers(&["map_zones", "BADLAYER"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("BADLAYER"));
        assert!(!msg.contains("map_zones,"));
    }

    #[test]
    fn accepts_catalog_layers() {
        let lf = Landfire::new(BBOX).unwrap();
        assert!(lf.validate_layers(&["map_zones", "220F40_22"]).is_ok());
        assert!(lf.validate_layers(&[]).is_err());
    }

    #[test]
    fn output_path_must_be_zip() {
        assert!(validate_output_path(Path::new("out/data.zip")).is_ok());
        assert!(validate_output_path(Path::new("out/data.tif")).is_err());
        assert!(validate_output_path(Path::new("out/data")).is_err());
    }

    #[test]
    fn base_params_omit_default_resample() {
        let lf = Landfire::new(BBOX).unwrap();
        let params = lf.base_params(&["map_zones"]);
        assert!(params.contains(&("Layer_List", "map_zones".to_string())));
        assert!(params.contains(&("Area_Of_Interest", BBOX.to_string())));
        assert!(params.contains(&("Output_Projection", "4326".to_string())));
        assert!(params.contains(&("f", "JSON".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "Resample_Resolution"));
    }

    #[test]
    fn base_params_include_non_default_resample() {
        let lf = Landfire::new(BBOX).unwrap().with_resample_res(90).unwrap();
        let params = lf.base_params(&["map_zones", "220F40_22"]);
        assert!(params.contains(&("Resample_Resolution", "90".to_string())));
        assert!(params.contains(&("Layer_List", "map_zones;220F40_22".to_string())));
    }
}
