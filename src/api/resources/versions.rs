//
//  gitlab-cli
//  api/resources/versions.rs
//

//! Server version lookup.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::params::Params;
use crate::api::record::Record;

impl GitlabClient {
    /// Gets the server's version and revision.
    pub async fn version(&self) -> Result<Record> {
        self.get("/version", &Params::new()).await?.into_record()
    }
}
