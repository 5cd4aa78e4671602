//
//  gitlab-cli
//  api/resources/epics.rs
//

//! Group epics.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists a group's epics.
    pub async fn epics(
        &self,
        group: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/groups/{}/epics", group.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Gets a single epic by its group-local iid.
    pub async fn epic(&self, group: impl Into<ResourceId>, epic_iid: u64) -> Result<Record> {
        let path = format!("/groups/{}/epics/{epic_iid}", group.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Creates an epic titled `title`.
    pub async fn create_epic(
        &self,
        group: impl Into<ResourceId>,
        title: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/groups/{}/epics", group.into().to_segment());
        let body = merge_body(options, body_from(&[("title", json!(title))]));
        self.post(&path, Some(&body)).await?.into_record()
    }

    /// Updates an epic.
    pub async fn edit_epic(
        &self,
        group: impl Into<ResourceId>,
        epic_iid: u64,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/groups/{}/epics/{epic_iid}", group.into().to_segment());
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Deletes an epic. The response body is empty.
    pub async fn delete_epic(&self, group: impl Into<ResourceId>, epic_iid: u64) -> Result<()> {
        let path = format!("/groups/{}/epics/{epic_iid}", group.into().to_segment());
        self.delete(&path).await?;
        Ok(())
    }
}
