//
//  gitlab-cli
//  api/resources/mod.rs
//

//! # Resource Modules
//!
//! One module per API resource family, each extending [`GitlabClient`] with
//! methods that map a signature onto an HTTP verb, a URL template, and a
//! query/body payload. Path parameters are escaped via
//! [`url_encode`][crate::api::url_encode] before interpolation; everything
//! else is delegated to the transport in [`crate::api::client`].
//!
//! These modules contain no business logic — they are the mechanical surface
//! of the API.

pub mod access_requests;
pub mod deployments;
pub mod environments;
pub mod epics;
pub mod events;
pub mod features;
pub mod import_export;
pub mod keys;
pub mod namespaces;
pub mod notes;
pub mod pipeline_triggers;
pub mod projects;
pub mod protected_tags;
pub mod snippets;
pub mod system_hooks;
pub mod users;
pub mod versions;
pub mod wikis;

pub use import_export::ExportUpload;

#[allow(unused_imports)]
use super::client::GitlabClient;
