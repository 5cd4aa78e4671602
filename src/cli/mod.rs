//
//  gitlab-cli
//  cli/mod.rs
//

//! CLI command definitions using clap derive macros

mod api;
mod completion;
mod info;
mod users;

pub use api::ApiCommand;
pub use completion::CompletionCommand;
pub use info::InfoCommand;
pub use users::UsersCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{BodyMap, GitlabClient, Parsed};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// GitLab CLI - Work with the GitLab API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "gl",
    version,
    about = "Work with the GitLab API from the command line",
    long_about = "gl is a CLI for the GitLab REST API.\n\n\
                  It brings users, projects, and raw API access to your terminal.",
    propagate_version = true,
    after_help = "Use 'gl <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API endpoint URL, e.g. https://gitlab.example.com/api/v4
    #[arg(long, global = true, env = "GITLAB_API_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Private token for authentication
    #[arg(long, global = true, env = "GITLAB_API_PRIVATE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Username to perform operations as (admin only)
    #[arg(long, global = true)]
    pub sudo: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

impl GlobalOptions {
    /// Builds an API client from the config file, environment, and these
    /// flags, later sources winning.
    pub fn build_client(&self) -> Result<GitlabClient> {
        let mut config = Config::load()?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(token) = &self.token {
            config.private_token = Some(token.clone());
        }
        if let Some(sudo) = &self.sudo {
            config.sudo = Some(sudo.clone());
        }
        Ok(GitlabClient::new(config)?)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.output)
    }

    /// Asks the user to confirm a destructive action; `--yes` skips the
    /// prompt.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    #[command(visible_alias = "user")]
    Users(UsersCommand),

    /// Make raw API requests
    Api(ApiCommand),

    /// Show the configured endpoint and authentication state
    Info(InfoCommand),

    /// Generate a shell completion script
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Parses `key=value` field arguments into a request body. Values are read
/// as YAML, so `active=true` is a boolean and `id=3` a number; anything that
/// fails to parse stays a plain string.
pub(crate) fn parse_fields(fields: &[String]) -> Result<BodyMap> {
    let mut body = BodyMap::new();
    for field in fields {
        let (key, raw) = field
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid field format: {field}. Expected key=value"))?;
        let value = serde_yaml::from_str::<serde_json::Value>(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        body.insert(key.to_string(), value);
    }
    Ok(body)
}

/// Renders one parsed API result in the selected format.
pub(crate) fn render(parsed: Parsed, writer: &OutputWriter) -> Result<()> {
    match parsed {
        Parsed::Record(record) => writer.write_record(&record)?,
        Parsed::Collection(collection) => writer.write_collection(&collection)?,
        Parsed::File(file) => {
            let name = file.filename().unwrap_or("download");
            std::fs::write(name, file.data())?;
            writer.write_success(&format!("Saved {name}"));
        }
        Parsed::Value(value) => match value {
            serde_json::Value::String(text) => println!("{text}"),
            other => crate::output::write_json(&other)?,
        },
        Parsed::Empty => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_fields_yaml_values() {
        let body = parse_fields(&[
            "active=true".to_string(),
            "id=3".to_string(),
            "name=John Smith".to_string(),
        ])
        .unwrap();
        assert_eq!(body.get("active"), Some(&json!(true)));
        assert_eq!(body.get("id"), Some(&json!(3)));
        assert_eq!(body.get("name"), Some(&json!("John Smith")));
    }

    #[test]
    fn test_parse_fields_rejects_bare_key() {
        assert!(parse_fields(&["no-equals".to_string()]).is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
