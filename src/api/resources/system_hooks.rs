//
//  gitlab-cli
//  api/resources/system_hooks.rs
//

//! System hook administration. Admin only.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, BodyMap, Params};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists system hooks.
    pub async fn hooks(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/hooks", &options).await?.into_collection()
    }

    /// Tests a hook; the server fires it and returns hook data.
    pub async fn hook(&self, id: u64) -> Result<Record> {
        self.get(&format!("/hooks/{id}"), &Params::new())
            .await?
            .into_record()
    }

    /// Registers a new system hook for `url`.
    pub async fn add_hook(&self, url: &str, options: BodyMap) -> Result<Record> {
        let body = merge_body(options, body_from(&[("url", json!(url))]));
        self.post("/hooks", Some(&body)).await?.into_record()
    }

    /// Removes a system hook.
    pub async fn delete_hook(&self, id: u64) -> Result<Record> {
        self.delete(&format!("/hooks/{id}")).await?.into_record()
    }
}
