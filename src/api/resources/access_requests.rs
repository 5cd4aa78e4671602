//
//  gitlab-cli
//  api/resources/access_requests.rs
//

//! Access requests for projects and groups.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists pending access requests for a project.
    pub async fn project_access_requests(
        &self,
        project: impl Into<ResourceId>,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/access_requests", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_collection()
    }

    /// Lists pending access requests for a group.
    pub async fn group_access_requests(
        &self,
        group: impl Into<ResourceId>,
    ) -> Result<PaginatedCollection> {
        let path = format!("/groups/{}/access_requests", group.into().to_segment());
        self.get(&path, &Params::new()).await?.into_collection()
    }

    /// Requests access to a project for the authenticated user.
    pub async fn request_project_access(&self, project: impl Into<ResourceId>) -> Result<Record> {
        let path = format!("/projects/{}/access_requests", project.into().to_segment());
        self.post(&path, None).await?.into_record()
    }

    /// Requests access to a group for the authenticated user.
    pub async fn request_group_access(&self, group: impl Into<ResourceId>) -> Result<Record> {
        let path = format!("/groups/{}/access_requests", group.into().to_segment());
        self.post(&path, None).await?.into_record()
    }

    /// Approves a project access request; `options` may set `access_level`
    /// (the server defaults to 30, developer).
    pub async fn approve_project_access_request(
        &self,
        project: impl Into<ResourceId>,
        user_id: u64,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/access_requests/{user_id}/approve",
            project.into().to_segment()
        );
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Approves a group access request; `options` may set `access_level`.
    pub async fn approve_group_access_request(
        &self,
        group: impl Into<ResourceId>,
        user_id: u64,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!(
            "/groups/{}/access_requests/{user_id}/approve",
            group.into().to_segment()
        );
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Denies a project access request. The response body is empty.
    pub async fn deny_project_access_request(
        &self,
        project: impl Into<ResourceId>,
        user_id: u64,
    ) -> Result<()> {
        let path = format!(
            "/projects/{}/access_requests/{user_id}",
            project.into().to_segment()
        );
        self.delete(&path).await?;
        Ok(())
    }

    /// Denies a group access request. The response body is empty.
    pub async fn deny_group_access_request(
        &self,
        group: impl Into<ResourceId>,
        user_id: u64,
    ) -> Result<()> {
        let path = format!(
            "/groups/{}/access_requests/{user_id}",
            group.into().to_segment()
        );
        self.delete(&path).await?;
        Ok(())
    }
}
