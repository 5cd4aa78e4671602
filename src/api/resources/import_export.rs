//
//  gitlab-cli
//  api/resources/import_export.rs
//

//! Project export and import.
//!
//! Exports are asynchronous on the server: schedule one, poll its status,
//! then download the archive (or have the server upload it somewhere with
//! [`ExportUpload`]). Imports take a local archive as a multipart upload.

use std::path::Path;

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::{Error, Result};
use crate::api::file_response::FileResponse;
use crate::api::params::{body_from, merge_body, BodyMap, Params, ResourceId};
use crate::api::record::Record;

/// Destination for a server-side export upload.
///
/// When given, the server PUTs (or POSTs) the finished archive to `url`
/// instead of holding it for download.
#[derive(Debug, Clone)]
pub struct ExportUpload {
    pub url: String,
    /// Defaults to `PUT` when unset.
    pub http_method: Option<String>,
}

impl ExportUpload {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_method: None,
        }
    }

    fn into_body(self) -> BodyMap {
        let mut upload = BodyMap::new();
        upload.insert("url".into(), json!(self.url));
        upload.insert(
            "http_method".into(),
            json!(self.http_method.unwrap_or_else(|| "PUT".to_string())),
        );
        body_from(&[("upload", serde_json::Value::Object(upload))])
    }
}

impl GitlabClient {
    /// Schedules an export of a project.
    pub async fn export_project(
        &self,
        project: impl Into<ResourceId>,
        upload: Option<ExportUpload>,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/projects/{}/export", project.into().to_segment());
        let body = match upload {
            Some(upload) => merge_body(options, upload.into_body()),
            None => options,
        };
        let body = (!body.is_empty()).then_some(&body);
        self.post(&path, body).await?.into_record()
    }

    /// Gets the status of a project export.
    pub async fn export_project_status(&self, project: impl Into<ResourceId>) -> Result<Record> {
        let path = format!("/projects/{}/export", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Downloads a finished project export archive.
    pub async fn export_project_download(
        &self,
        project: impl Into<ResourceId>,
    ) -> Result<FileResponse> {
        let path = format!("/projects/{}/export/download", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_file()
    }

    /// Imports a project archive from `file`, creating it at `target_path`.
    ///
    /// `options` may carry `namespace`, `name`, `overwrite` and the like;
    /// they are sent as form fields alongside the archive.
    pub async fn import_project(
        &self,
        file: impl AsRef<Path>,
        target_path: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let file = file.as_ref();
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|err| Error::Config(format!("cannot read {}: {err}", file.display())))?;
        let filename = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "export.tar.gz".to_string());

        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(filename),
            )
            .text("path", target_path.to_string());
        for (key, value) in options {
            let text = match value {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            };
            form = form.text(key, text);
        }

        self.post_multipart("/projects/import", form)
            .await?
            .into_record()
    }

    /// Gets the status of a project import.
    pub async fn import_project_status(&self, project: impl Into<ResourceId>) -> Result<Record> {
        let path = format!("/projects/{}/import", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_defaults_to_put() {
        let body = ExportUpload::new("https://example.com/in").into_body();
        let upload = body.get("upload").unwrap();
        assert_eq!(upload["url"], "https://example.com/in");
        assert_eq!(upload["http_method"], "PUT");
    }

    #[test]
    fn upload_honors_explicit_method() {
        let mut upload = ExportUpload::new("https://example.com/in");
        upload.http_method = Some("POST".to_string());
        let body = upload.into_body();
        assert_eq!(body.get("upload").unwrap()["http_method"], "POST");
    }
}
