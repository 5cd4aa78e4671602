//
//  gitlab-cli
//  api/resources/protected_tags.rs
//

//! Protected tags. Tag names may be wildcards like `v*`.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, url_encode, BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists a project's protected tags.
    pub async fn protected_tags(
        &self,
        project: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/protected_tags", project.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Gets a single protected tag or wildcard.
    pub async fn protected_tag(
        &self,
        project: impl Into<ResourceId>,
        name: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/protected_tags/{}",
            project.into().to_segment(),
            url_encode(name)
        );
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Protects a tag or wildcard; `options` may set `create_access_level`.
    pub async fn protect_repository_tag(
        &self,
        project: impl Into<ResourceId>,
        name: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/projects/{}/protected_tags", project.into().to_segment());
        let body = merge_body(options, body_from(&[("name", json!(name))]));
        self.post(&path, Some(&body)).await?.into_record()
    }

    /// Unprotects a tag or wildcard. The response body is empty.
    pub async fn unprotect_repository_tag(
        &self,
        project: impl Into<ResourceId>,
        name: &str,
    ) -> Result<()> {
        let path = format!(
            "/projects/{}/protected_tags/{}",
            project.into().to_segment(),
            url_encode(name)
        );
        self.delete(&path).await?;
        Ok(())
    }
}
