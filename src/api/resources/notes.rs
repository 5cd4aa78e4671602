//
//  gitlab-cli
//  api/resources/notes.rs
//

//! Note (comment) operations for projects, issues, snippets, merge
//! requests, and group epics.

use serde_json::json;

use crate::api::client::GitlabClient;
use crate::api::error::Result;
use crate::api::pagination::PaginatedCollection;
use crate::api::params::{body_from, Params, ResourceId};
use crate::api::record::Record;

fn note_body(body: &str) -> crate::api::params::BodyMap {
    body_from(&[("body", json!(body))])
}

impl GitlabClient {
    /// Lists a project's wall notes.
    pub async fn notes(
        &self,
        project: impl Into<ResourceId>,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/projects/{}/notes", project.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Lists the notes on an issue.
    pub async fn issue_notes(
        &self,
        project: impl Into<ResourceId>,
        issue: u64,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!(
            "/projects/{}/issues/{issue}/notes",
            project.into().to_segment()
        );
        self.get(&path, &options).await?.into_collection()
    }

    /// Lists the notes on a snippet.
    pub async fn snippet_notes(
        &self,
        project: impl Into<ResourceId>,
        snippet: u64,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!(
            "/projects/{}/snippets/{snippet}/notes",
            project.into().to_segment()
        );
        self.get(&path, &options).await?.into_collection()
    }

    /// Lists the notes on a merge request.
    pub async fn merge_request_notes(
        &self,
        project: impl Into<ResourceId>,
        merge_request: u64,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!(
            "/projects/{}/merge_requests/{merge_request}/notes",
            project.into().to_segment()
        );
        self.get(&path, &options).await?.into_collection()
    }

    /// Lists the notes on a group epic.
    pub async fn epic_notes(
        &self,
        group: impl Into<ResourceId>,
        epic: u64,
        options: Params,
    ) -> Result<PaginatedCollection> {
        let path = format!("/groups/{}/epics/{epic}/notes", group.into().to_segment());
        self.get(&path, &options).await?.into_collection()
    }

    /// Gets a single wall note.
    pub async fn note(&self, project: impl Into<ResourceId>, id: u64) -> Result<Record> {
        let path = format!("/projects/{}/notes/{id}", project.into().to_segment());
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Gets a single issue note.
    pub async fn issue_note(
        &self,
        project: impl Into<ResourceId>,
        issue: u64,
        id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/issues/{issue}/notes/{id}",
            project.into().to_segment()
        );
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Gets a single snippet note.
    pub async fn snippet_note(
        &self,
        project: impl Into<ResourceId>,
        snippet: u64,
        id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/snippets/{snippet}/notes/{id}",
            project.into().to_segment()
        );
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Gets a single merge request note.
    pub async fn merge_request_note(
        &self,
        project: impl Into<ResourceId>,
        merge_request: u64,
        id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/merge_requests/{merge_request}/notes/{id}",
            project.into().to_segment()
        );
        self.get(&path, &Params::new()).await?.into_record()
    }

    /// Creates a wall note.
    pub async fn create_note(&self, project: impl Into<ResourceId>, body: &str) -> Result<Record> {
        let path = format!("/projects/{}/notes", project.into().to_segment());
        self.post(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Creates a note on an issue.
    pub async fn create_issue_note(
        &self,
        project: impl Into<ResourceId>,
        issue: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/issues/{issue}/notes",
            project.into().to_segment()
        );
        self.post(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Creates a note on a snippet.
    pub async fn create_snippet_note(
        &self,
        project: impl Into<ResourceId>,
        snippet: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/snippets/{snippet}/notes",
            project.into().to_segment()
        );
        self.post(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Creates a note on a merge request.
    pub async fn create_merge_request_note(
        &self,
        project: impl Into<ResourceId>,
        merge_request: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/merge_requests/{merge_request}/notes",
            project.into().to_segment()
        );
        self.post(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Creates a note on a group epic.
    pub async fn create_epic_note(
        &self,
        group: impl Into<ResourceId>,
        epic: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!("/groups/{}/epics/{epic}/notes", group.into().to_segment());
        self.post(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Edits a wall note.
    pub async fn edit_note(
        &self,
        project: impl Into<ResourceId>,
        id: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!("/projects/{}/notes/{id}", project.into().to_segment());
        self.put(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Edits an issue note.
    pub async fn edit_issue_note(
        &self,
        project: impl Into<ResourceId>,
        issue: u64,
        id: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/issues/{issue}/notes/{id}",
            project.into().to_segment()
        );
        self.put(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Edits a snippet note.
    pub async fn edit_snippet_note(
        &self,
        project: impl Into<ResourceId>,
        snippet: u64,
        id: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/snippets/{snippet}/notes/{id}",
            project.into().to_segment()
        );
        self.put(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Edits a merge request note.
    pub async fn edit_merge_request_note(
        &self,
        project: impl Into<ResourceId>,
        merge_request: u64,
        id: u64,
        body: &str,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/merge_requests/{merge_request}/notes/{id}",
            project.into().to_segment()
        );
        self.put(&path, Some(&note_body(body))).await?.into_record()
    }

    /// Deletes a wall note.
    pub async fn delete_note(&self, project: impl Into<ResourceId>, id: u64) -> Result<Record> {
        let path = format!("/projects/{}/notes/{id}", project.into().to_segment());
        self.delete(&path).await?.into_record()
    }

    /// Deletes an issue note.
    pub async fn delete_issue_note(
        &self,
        project: impl Into<ResourceId>,
        issue: u64,
        id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/issues/{issue}/notes/{id}",
            project.into().to_segment()
        );
        self.delete(&path).await?.into_record()
    }

    /// Deletes a snippet note.
    pub async fn delete_snippet_note(
        &self,
        project: impl Into<ResourceId>,
        snippet: u64,
        id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/snippets/{snippet}/notes/{id}",
            project.into().to_segment()
        );
        self.delete(&path).await?.into_record()
    }

    /// Deletes a merge request note.
    pub async fn delete_merge_request_note(
        &self,
        project: impl Into<ResourceId>,
        merge_request: u64,
        id: u64,
    ) -> Result<Record> {
        let path = format!(
            "/projects/{}/merge_requests/{merge_request}/notes/{id}",
            project.into().to_segment()
        );
        self.delete(&path).await?.into_record()
    }
}
