//
//  gitlab-cli
//  api/resources/users.rs
//

//! User, SSH key, and email operations.
//!
//! Covers the `/users`, `/user`, `/user/keys`, `/user/emails`, and
//! `/session` endpoints. Methods acting on the authenticated user
//! (`current_user`, `ssh_keys`, `emails`) have per-user counterparts taking
//! an explicit user ID.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, merge_body, BodyMap, Params};
use crate::api::record::Record;

impl GitlabClient {
    /// Lists users.
    ///
    /// Supports the usual `page`/`per_page` options.
    ///
    /// ```rust,no_run
    /// # async fn example(client: gitlab_cli::GitlabClient) -> gitlab_cli::api::Result<()> {
    /// use gitlab_cli::api::Params;
    ///
    /// let users = client.users(Params::new().set("per_page", 40)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn users(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/users", &options).await?.into_collection()
    }

    /// Searches users by email or username.
    pub async fn user_search(&self, query: &str, options: Params) -> Result<PaginatedCollection> {
        let options = options.set("search", query);
        self.get("/users", &options).await?.into_collection()
    }

    /// Gets a single user by ID.
    pub async fn user(&self, id: u64) -> Result<Record> {
        self.get(&format!("/users/{id}"), &Params::new())
            .await?
            .into_record()
    }

    /// Gets the authenticated user.
    pub async fn current_user(&self) -> Result<Record> {
        self.get("/user", &Params::new()).await?.into_record()
    }

    /// Creates a new user. Admin only.
    ///
    /// `email`, `password`, and `username` are all required by the API; the
    /// display name defaults to the email unless `options` carries a `name`.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        username: &str,
        options: BodyMap,
    ) -> Result<Record> {
        let body = body_from(&[
            ("email", json!(email)),
            ("password", json!(password)),
            ("username", json!(username)),
            ("name", json!(email)),
        ]);
        self.post("/users", Some(&merge_body(body, options)))
            .await?
            .into_record()
    }

    /// Updates a user. Admin only.
    pub async fn edit_user(&self, id: u64, options: BodyMap) -> Result<Record> {
        self.put(&format!("/users/{id}"), Some(&options))
            .await?
            .into_record()
    }

    /// Deletes a user. Admin only.
    pub async fn delete_user(&self, id: u64) -> Result<Record> {
        self.delete(&format!("/users/{id}")).await?.into_record()
    }

    /// Blocks a user; returns whether the state changed.
    pub async fn block_user(&self, id: u64) -> Result<bool> {
        self.post(&format!("/users/{id}/block"), None)
            .await?
            .into_bool()
    }

    /// Unblocks a user; returns whether the state changed.
    pub async fn unblock_user(&self, id: u64) -> Result<bool> {
        self.post(&format!("/users/{id}/unblock"), None)
            .await?
            .into_bool()
    }

    /// Creates a session, returning the user record with a private token.
    ///
    /// Requires a configured endpoint but no token.
    pub async fn session(&self, email: &str, password: &str) -> Result<Record> {
        let body = body_from(&[("email", json!(email)), ("password", json!(password))]);
        self.post("/session", Some(&body)).await?.into_record()
    }

    /// Lists the authenticated user's activity events.
    pub async fn activities(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/user/activities", &options)
            .await?
            .into_collection()
    }

    /// Lists the authenticated user's SSH keys.
    pub async fn ssh_keys(&self, options: Params) -> Result<PaginatedCollection> {
        self.get("/user/keys", &options).await?.into_collection()
    }

    /// Lists a specific user's SSH keys. Admin only.
    pub async fn user_ssh_keys(&self, user_id: u64, options: Params) -> Result<PaginatedCollection> {
        self.get(&format!("/users/{user_id}/keys"), &options)
            .await?
            .into_collection()
    }

    /// Gets one of the authenticated user's SSH keys.
    pub async fn ssh_key(&self, id: u64) -> Result<Record> {
        self.get(&format!("/user/keys/{id}"), &Params::new())
            .await?
            .into_record()
    }

    /// Adds an SSH key for the authenticated user.
    pub async fn create_ssh_key(&self, title: &str, key: &str) -> Result<Record> {
        let body = body_from(&[("title", json!(title)), ("key", json!(key))]);
        self.post("/user/keys", Some(&body)).await?.into_record()
    }

    /// Adds an SSH key for a specific user. Admin only.
    pub async fn create_user_ssh_key(&self, user_id: u64, title: &str, key: &str) -> Result<Record> {
        let body = body_from(&[("title", json!(title)), ("key", json!(key))]);
        self.post(&format!("/users/{user_id}/keys"), Some(&body))
            .await?
            .into_record()
    }

    /// Removes one of the authenticated user's SSH keys.
    pub async fn delete_ssh_key(&self, id: u64) -> Result<Record> {
        self.delete(&format!("/user/keys/{id}")).await?.into_record()
    }

    /// Removes a specific user's SSH key. Admin only.
    pub async fn delete_user_ssh_key(&self, user_id: u64, key_id: u64) -> Result<Record> {
        self.delete(&format!("/users/{user_id}/keys/{key_id}"))
            .await?
            .into_record()
    }

    /// Lists the authenticated user's email addresses.
    pub async fn emails(&self) -> Result<PaginatedCollection> {
        self.get("/user/emails", &Params::new())
            .await?
            .into_collection()
    }

    /// Lists a specific user's email addresses. Admin only.
    pub async fn user_emails(&self, user_id: u64) -> Result<PaginatedCollection> {
        self.get(&format!("/users/{user_id}/emails"), &Params::new())
            .await?
            .into_collection()
    }

    /// Gets a single email address by ID.
    pub async fn email(&self, id: u64) -> Result<Record> {
        self.get(&format!("/user/emails/{id}"), &Params::new())
            .await?
            .into_record()
    }

    /// Adds an email address for the authenticated user.
    pub async fn add_email(&self, email: &str) -> Result<Record> {
        let body = body_from(&[("email", json!(email))]);
        self.post("/user/emails", Some(&body)).await?.into_record()
    }

    /// Adds an email address for a specific user. Admin only.
    pub async fn add_user_email(&self, user_id: u64, email: &str) -> Result<Record> {
        let body = body_from(&[("email", json!(email))]);
        self.post(&format!("/users/{user_id}/emails"), Some(&body))
            .await?
            .into_record()
    }

    /// Removes one of the authenticated user's email addresses.
    pub async fn delete_email(&self, id: u64) -> Result<Record> {
        self.delete(&format!("/user/emails/{id}"))
            .await?
            .into_record()
    }

    /// Removes a specific user's email address. Admin only.
    pub async fn delete_user_email(&self, user_id: u64, email_id: u64) -> Result<Record> {
        self.delete(&format!("/users/{user_id}/emails/{email_id}"))
            .await?
            .into_record()
    }
}
