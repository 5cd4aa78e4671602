//
//  gitlab-cli
//  api/resources/namespaces.rs
//

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::Params;

impl GitlabClient {
    /// Lists namespaces visible to the authenticated user; `options` may set
    /// `search` to filter by name or path.
    pub async fn namespaces(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/namespaces", &options).await?.into_collection()
    }
}
