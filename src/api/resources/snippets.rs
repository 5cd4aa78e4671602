//
//  gitlab-cli
//  api/resources/snippets.rs
//

//! Personal snippets for the authenticated user.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{BodyMap, Params};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists the authenticated user's snippets.
    pub async fn user_snippets(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/snippets", &options).await?.into_collection()
    }

    /// Gets a single snippet.
    pub async fn user_snippet(&self, id: u64) -> Result<Record> {
        self.get(&format!("/snippets/{id}"), &Params::new())
            .await?
            .into_record()
    }

    /// Fetches a snippet's raw content as plain text.
    pub async fn user_snippet_raw(&self, id: u64) -> Result<String> {
        self.get(&format!("/snippets/{id}/raw"), &Params::new())
            .await?
            .into_text()
    }

    /// Creates a snippet; `options` carries `title`, `file_name`, `content`,
    /// `visibility` and friends.
    pub async fn create_user_snippet(&self, options: BodyMap) -> Result<Record> {
        self.post("/snippets", Some(&options)).await?.into_record()
    }

    /// Updates a snippet.
    pub async fn edit_user_snippet(&self, id: u64, options: BodyMap) -> Result<Record> {
        self.put(&format!("/snippets/{id}"), Some(&options))
            .await?
            .into_record()
    }

    /// Deletes a snippet. The response body is empty.
    pub async fn delete_user_snippet(&self, id: u64) -> Result<()> {
        self.delete(&format!("/snippets/{id}")).await?;
        Ok(())
    }

    /// Lists all public snippets.
    pub async fn public_snippets(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/snippets/public", &options)
            .await?
            .into_collection()
    }

    /// Gets the user agent details of a snippet's creation. Admin only.
    pub async fn snippet_user_agent_details(&self, id: u64) -> Result<Record> {
        self.get(&format!("/snippets/{id}/user_agent_detail"), &Params::new())
            .await?
            .into_record()
    }
}
