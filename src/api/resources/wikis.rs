//
//  gitlab-cli
//  api/resources/wikis.rs
//

//! Project wiki page operations.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, url_encode, BodyMap, Params, ResourceId};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists a project's wiki pages.
    ///
    /// Pass `with_content=1` in `options` to include page bodies.
    pub async fn wikis(
        &self,
        project: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/wikis", project.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Gets a wiki page by slug.
    pub async fn wiki(&self, project: impl Into<ResourceId>, slug: &str) -> Result<Record> {
        let path = format!(
            "/projects/{}/wikis/{}",
            project.into().to_segment(),
            url_encode(slug)
        );
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Creates a wiki page.
    ///
    /// `options` may set `format` (`markdown`, `rdoc`, `asciidoc`).
    pub async fn create_wiki(
        &self,
        project: impl Into<ResourceId>,
        title: &str,
        content: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!("/projects/{}/wikis", project.into().to_segment());
        let body = body_from(&[("title", json!(title)), ("content", json!(content))]);
        self.post(&path, Some(&merge_body(body, options)))
            .await?
            .into_record()
    }

    /// Updates a wiki page; at least one of `title`, `content`, `format`
    /// must be present in `options`.
    pub async fn update_wiki(
        &self,
        project: impl Into<ResourceId>,
        slug: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/wikis/{}",
            project.into().to_segment(),
            url_encode(slug)
        );
        self.put(&path, Some(&options)).await?.into_record()
    }

    /// Deletes a wiki page.
    pub async fn delete_wiki(&self, project: impl Into<ResourceId>, slug: &str) -> Result<()> {
        let path = format!(
            "/projects/{}/wikis/{}",
            project.into().to_segment(),
            url_encode(slug)
        );
        self.delete(&path).await?;
        Ok(())
    }
}
