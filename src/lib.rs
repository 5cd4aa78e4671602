//
//  gitlab-cli
//  lib.rs
//

//! # GitLab CLI Library
//!
//! A client library for the GitLab REST API v4, plus the core of the `gl`
//! command-line tool.
//!
//! ## Overview
//!
//! [`GitlabClient`] is the whole callable surface: one value aggregating
//! every resource family (users, projects, notes, wikis, snippets, epics,
//! pipeline triggers, and the rest) as inherent async methods. Responses
//! come back as dynamic [`Record`]s and [`PaginatedCollection`]s rather than
//! per-endpoint structs, so the library tracks the server's schema instead
//! of pinning one.
//!
//! ## Module Structure
//!
//! - [`api`]: the HTTP client, response wrappers, error taxonomy, and all
//!   resource methods
//! - [`config`]: endpoint/token configuration from file, environment, and
//!   flags
//! - [`cli`]: clap command definitions for the `gl` binary
//! - [`output`]: table and JSON rendering
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitlab_cli::{Config, GitlabClient};
//!
//! # async fn example() -> gitlab_cli::api::Result<()> {
//! let config = Config::default()
//!     .with_endpoint("https://gitlab.example.com/api/v4")
//!     .with_private_token("secret");
//! let client = GitlabClient::new(config)?;
//!
//! let user = client.current_user().await?;
//! println!("{}", user.get_str("username")?);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod output;

pub use api::{Error, GitlabClient, PaginatedCollection, Parsed, Record};
pub use cli::Cli;
pub use config::Config;

/// Name of the CLI binary.
pub const APP_NAME: &str = "gl";

/// Crate version, from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI, following Unix conventions so scripts can detect
/// the outcome class without parsing stderr.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication missing, invalid, or insufficient.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist or is not visible.
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled at a confirmation prompt.
    pub const CANCELLED: i32 = 16;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;
}
