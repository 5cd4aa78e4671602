//
//  gitlab-cli
//  api/resources/pipeline_triggers.rs
//

//! Pipeline trigger management and triggering.
//!
//! [`run_trigger`][GitlabClient::run_trigger] is the one unauthenticated
//! operation in the API: the trigger token in the body replaces the private
//! token, and no `PRIVATE-TOKEN` header or `sudo` parameter is sent.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists a project's pipeline triggers.
    pub async fn triggers(&self, project: impl Into<ResourceId>) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/triggers", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_collection()
    }

    /// Gets a single trigger.
    pub async fn trigger(&self, project: impl Into<ResourceId>, trigger_id: u64) -> Result<Record> {
        let path = format!(
            "/projects/{}/triggers/{trigger_id}",
            project.into().to_segment()
        );
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Creates a trigger with a description.
    pub async fn create_trigger(
        &self,
        project: impl Into<ResourceId>,
        description: &str,
    ) -> Result<Record> {
        let path = format!("/projects/{}/triggers", project.into().to_segment());
        let body = body_from(&[("description", json!(description))]);
        self.post(&path, Some(&body)).await?.into_record()
    }

    /// Updates a trigger.
    pub async fn update_trigger(
        &self,
        project: impl Into<ResourceId>,
        trigger_id: u64,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/triggers/{trigger_id}",
            project.into().to_segment()
        );
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Takes ownership of a trigger.
    pub async fn trigger_take_ownership(
        &self,
        project: impl Into<ResourceId>,
        trigger_id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/triggers/{trigger_id}/take_ownership",
            project.into().to_segment()
        );
        self.post(&path, None).await?.into_record()
    }

    /// Removes a trigger.
    pub async fn remove_trigger(
        &self,
        project: impl Into<ResourceId>,
        trigger_id: u64,
    ) -> Result<()> {
        let path = format!(
            "/projects/{}/triggers/{trigger_id}",
            project.into().to_segment()
        );
        self.delete(&path).await?;
        Ok(())
    }

    /// Runs a trigger, starting a pipeline for `ref_name`.
    ///
    /// Authenticated by the trigger `token` in the body, not the private
    /// token. `variables` become CI variables for the pipeline.
    pub async fn run_trigger(
        &self,
        project: impl Into<ResourceId>,
        token: &str,
        ref_name: &str,
        variables: BodyMap,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/trigger/pipeline",
            project.into().to_segment()
        );
        let body = body_from(&[
            ("token", json!(token)),
            ("ref", json!(ref_name)),
            ("variables", json!(variables)),
        ]);
        self.post_unauthenticated(&path, Some(&body))
            .await?
            .into_record()
    }
}
