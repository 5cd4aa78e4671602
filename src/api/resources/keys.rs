//
//  gitlab-cli
//  api/resources/keys.rs
//

//! SSH key lookup by ID. Admin only.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::params::Params;
use crate::api::record::Record;

impl GitlabClient {
    /// Gets an SSH key and its owner by key ID.
    pub async fn key(&self, id: u64) -> Result<Record> {
        self.get(&format!("/keys/{id}"), &Params::new())
            .await?
            .into_record()
    }
}
