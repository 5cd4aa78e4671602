//
//  gitlab-cli
//  cli/api.rs
//

//! Direct API access command
//!
//! Makes a raw request against the configured endpoint, for API paths not
//! covered by other commands or for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Get a project
//! gl api /projects/gitlab-org%2Fgitlab
//!
//! # Create an issue with POST
//! gl api -X POST /projects/3/issues -F title="Bug report"
//!
//! # Walk every page of a listing
//! gl api /users --paginate
//! ```

use anyhow::{bail, Result};
use clap::Args;
use reqwest::Method;

use crate::api::{PaginatedCollection, Params, Parsed};

use super::{parse_fields, render, GlobalOptions};

/// Make raw API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path relative to the endpoint (e.g. /projects/3/issues)
    pub path: String,

    /// HTTP method (GET, POST, PUT, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request fields as key=value; query parameters for GET, body fields
    /// otherwise (value parsed as YAML)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Follow next-page links and combine all pages
    #[arg(long)]
    pub paginate: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.build_client()?;
        let writer = global.writer();
        let method = self.parse_method()?;

        let parsed = if method == Method::GET {
            let mut query = Params::new();
            for (key, value) in parse_fields(&self.field)? {
                let text = match value {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                };
                query = query.set(key, text);
            }
            client.get(&self.path, &query).await?
        } else {
            let body = parse_fields(&self.field)?;
            let body = (!body.is_empty()).then_some(&body);
            client
                .request(method, &self.path, &Params::new(), body)
                .await?
        };

        if self.paginate {
            if let Parsed::Collection(collection) = parsed {
                let records = collection.auto_paginate(&client).await?;
                let combined = PaginatedCollection::new(records, Default::default());
                return writer.write_collection(&combined);
            }
        }

        render(parsed, &writer)
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }
}
