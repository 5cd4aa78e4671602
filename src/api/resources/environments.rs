//
//  gitlab-cli
//  api/resources/environments.rs
//

//! Project environment operations.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists a project's environments.
    pub async fn environments(
        &self,
        project: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/environments", project.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Gets a single environment.
    pub async fn environment(&self, project: impl Into<ResourceId>, id: u64) -> Result<Record> {
        let path = format!("/projects/{}/environments/{id}", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Creates an environment; `options` may set `external_url`.
    pub async fn create_environment(
        &self,
        project: impl Into<ResourceId>,
        name: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/projects/{}/environments", project.into().to_segment());
        let body = body_from(&[("name", json!(name))]);
        self.post(&path, Some(&merge_body(body, options)))
            .await?
            .into_record()
    }

    /// Updates an environment's name or external URL.
    pub async fn edit_environment(
        &self,
        project: impl Into<ResourceId>,
        id: u64,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/projects/{}/environments/{id}", project.into().to_segment());
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Deletes an environment.
    pub async fn delete_environment(&self, project: impl Into<ResourceId>, id: u64) -> Result<()> {
        let path = format!("/projects/{}/environments/{id}", project.into().to_segment());
        self.delete(&path).await?;
        Ok(())
    }

    /// Stops an environment.
    pub async fn stop_environment(&self, project: impl Into<ResourceId>, id: u64) -> Result<Record> {
        let path = format!(
            "/projects/{}/environments/{id}/stop",
            project.into().to_segment()
        );
        self.post(&path, None).await?.into_record()
    }
}
