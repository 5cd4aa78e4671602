//
//  gitlab-cli
//  api/mod.rs
//

//! # API Client Layer
//!
//! Everything needed to talk to a GitLab instance:
//!
//! - [`client`]: the HTTP transport ([`GitlabClient`]) and the [`Parsed`]
//!   response shape
//! - [`record`]: attribute-style access over parsed JSON objects
//! - [`pagination`]: `Link`-header cursors and [`PaginatedCollection`]
//! - [`file_response`]: binary download payloads
//! - [`params`]: query/body helpers and path escaping
//! - [`error`]: the typed error taxonomy
//! - [`resources`]: one module of `GitlabClient` methods per API resource
//!   family
//!
//! The client is the facade: building one [`GitlabClient`] gives access to
//! every resource method.

pub mod client;
pub mod error;
pub mod file_response;
pub mod pagination;
pub mod params;
pub mod record;
pub mod resources;

pub use client::{GitlabClient, Parsed, PRIVATE_TOKEN_HEADER};
pub use error::{Error, ResponseError, Result};
pub use file_response::FileResponse;
pub use pagination::{PageLinks, PaginatedCollection};
pub use params::{body_from, merge_body, url_encode, BodyMap, Params, ResourceId};
pub use record::{Record, RecordError};
pub use resources::ExportUpload;
