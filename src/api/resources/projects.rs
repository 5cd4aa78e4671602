//
//  gitlab-cli
//  api/resources/projects.rs
//

//! Project CRUD operations.
//!
//! Projects are addressable by numeric ID or by namespaced path
//! (`group/project`); paths are percent-encoded into a single segment.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists projects visible to the authenticated user.
    pub async fn projects(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/projects", &options).await?.into_collection()
    }

    /// Gets a single project.
    ///
    /// ```rust,no_run
    /// # async fn example(client: gitlab_cli::GitlabClient) -> gitlab_cli::api::Result<()> {
    /// let by_id = client.project(3).await?;
    /// let by_path = client.project("gitlab-org/gitlab").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn project(&self, id: impl Into<ResourceId>) -> Result<Record> {
        let path = format!("/projects/{}", id.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Creates a project.
    pub async fn create_project(&self, name: &str, options: BodyMap) -> Result<Record> {
        let body = body_from(&[("name", json!(name))]);
        self.post("/projects", Some(&merge_body(body, options)))
            .await?
            .into_record()
    }

    /// Updates a project.
    pub async fn edit_project(
        &self,
        id: impl Into<ResourceId>,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/projects/{}", id.into().to_segment());
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Deletes a project.
    pub async fn delete_project(&self, id: impl Into<ResourceId>) -> Result<Record> {
        let path = format!("/projects/{}", id.into().to_segment());
        self.delete(&path).await?.into_record()
    }
}
