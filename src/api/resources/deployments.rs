//
//  gitlab-cli
//  api/resources/deployments.rs
//

//! Project deployment queries.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists a project's deployments.
    pub async fn deployments(
        &self,
        project: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/deployments", project.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Gets a single deployment.
    pub async fn deployment(&self, project: impl Into<ResourceId>, id: u64) -> Result<Record> {
        let path = format!("/projects/{}/deployments/{id}", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }
}
