//
//  gitlab-cli
//  api/resources/events.rs
//

//! Contribution event feeds.
//!
//! All three listings take the same filter options: `action`, `target_type`,
//! `before`, `after` and `sort`.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{Params, ResourceId};

impl GitlabClient {
    /// Lists the authenticated user's events.
    pub async fn events(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/events", &options).await?.into_collection()
    }

    /// Lists another user's contribution events.
    pub async fn user_events(
        &self,
        user: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/users/{}/events", user.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Lists a project's visible events.
    pub async fn project_events(
        &self,
        project: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/events", project.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }
}
