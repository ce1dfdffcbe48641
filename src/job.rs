use anyhow::{Result, anyhow};

use crate::util::urljoin;

/// Reply from `submitJob`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct SubmitReply {
    #[serde(default, rename = "jobId")]
    pub(crate) job_id: Option<String>,
    #[serde(default, rename = "jobStatus")]
    pub(crate) job_status: Option<String>,
}

/// Reply from polling `jobs/{id}`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct JobReply {
    #[serde(rename = "jobStatus")]
    pub(crate) job_status: String,
    #[serde(default)]
    pub(crate) messages: Vec<JobMessage>,
    #[serde(default)]
    pub(crate) results: Option<JobResults>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct JobMessage {
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct JobResults {
    #[serde(default, rename = "Output_File")]
    pub(crate) output_file: Option<JobResultParam>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct JobResultParam {
    #[serde(rename = "paramUrl")]
    pub(crate) param_url: String,
}

impl JobReply {
    /// Most recent processing message, for status logging and errors.
    pub(crate) fn latest_message(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.description.as_str())
            .unwrap_or("no message yet")
    }

    /// Absolute URL of the `Output_File` result parameter.
    pub(crate) fn output_file_url(&self, job_url: &str) -> Result<String> {
        let param = self
            .results
            .as_ref()
            .and_then(|r| r.output_file.as_ref())
            .ok_or_else(|| anyhow!("missing Output_File result in job reply"))?;
        Ok(format!(
            "{}/{}",
            job_url.trim_end_matches('/'),
            param.param_url.trim_start_matches('/')
        ))
    }
}

/// Reply from the `Output_File` result parameter endpoint:
/// `{"paramName":"Output_File","dataType":"GPDataFile","value":{"url":...}}`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct OutputFileReply {
    value: OutputFileValue,
}

#[derive(Debug, serde::Deserialize)]
struct OutputFileValue {
    #[serde(default)]
    url: Option<String>,
}

impl OutputFileReply {
    /// Absolute URL of the zipped archive.
    pub(crate) fn zip_url(&self, base_url: &str) -> Result<String> {
        let url = self
            .value
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| anyhow!("missing download url in Output_File reply"))?;
        Ok(urljoin(base_url, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_reply() {
        let body = r#"{"jobId":"j2c9bd85a11324adb8b763747f2eafebb","jobStatus":"esriJobSubmitted"}"#;
        let reply: SubmitReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.job_id.as_deref(), Some("j2c9bd85a11324adb8b763747f2eafebb"));
        assert_eq!(reply.job_status.as_deref(), Some("esriJobSubmitted"));
    }

    #[test]
    fn job_reply_resolves_output_file_url() {
        let body = r#"{
            "jobId": "jabc",
            "jobStatus": "esriJobSucceeded",
            "results": {"Output_File": {"paramUrl": "results/Output_File"}},
            "messages": [
                {"type": "esriJobMessageTypeInformative", "description": "Job Finished"}
            ]
        }"#;
        let reply: JobReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.latest_message(), "Job Finished");
        assert_eq!(
            reply.output_file_url("https://lfps.usgs.gov/arcgis/rest/services/LandfireProductService/GPServer/LandfireProductService/jobs/jabc").unwrap(),
            "https://lfps.usgs.gov/arcgis/rest/services/LandfireProductService/GPServer/LandfireProductService/jobs/jabc/results/Output_File"
        );
    }

    #[test]
    fn job_reply_without_results_errors() {
        let body = r#"{"jobStatus":"esriJobSucceeded"}"#;
        let reply: JobReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.latest_message(), "no message yet");
        assert!(reply.output_file_url("https://example/jobs/jabc").is_err());
    }

    #[test]
    fn output_file_reply_resolves_zip_url() {
        let body = r#"{
            "paramName": "Output_File",
            "dataType": "GPDataFile",
            "value": {"url": "https://lfps.usgs.gov/arcgis/rest/directories/arcgisjobs/jabc/scratch/jabc.zip"}
        }"#;
        let reply: OutputFileReply = serde_json::from_str(body).unwrap();
        assert_eq!(
            reply.zip_url("https://lfps.usgs.gov/whatever").unwrap(),
            "https://lfps.usgs.gov/arcgis/rest/directories/arcgisjobs/jabc/scratch/jabc.zip"
        );
    }
}
