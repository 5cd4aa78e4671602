//
//  gitlab-cli
//  api/resources/features.rs
//

//! Feature flag administration.

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{url_encode, BodyMap, Params};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists all defined feature flags.
    pub async fn features(&self) -> Result<PaginatedCollection> {
        self.get("/features", &Params::new())
            .await?
            .into_collection()
    }

    /// Sets a feature flag's gate value. `value` may be a boolean or a
    /// percentage-of-time number.
    pub async fn set_feature(&self, name: &str, value: serde_json::Value) -> Result<Record> {
        let path = format!("/features/{}", url_encode(name));
        let mut body = BodyMap::new();
        body.insert("value".to_string(), value);
        self.post(&path, Some(&body)).await?.into_record()
    }

    /// Deletes a feature flag. The response body is empty.
    pub async fn delete_feature(&self, name: &str) -> Result<()> {
        self.delete(&format!("/features/{}", url_encode(name)))
            .await?;
        Ok(())
    }
}
