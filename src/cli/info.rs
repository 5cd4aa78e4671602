//
//  gitlab-cli
//  cli/info.rs
//

//! Configuration inspection command

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::output::print_field;

use super::GlobalOptions;

/// Show the configured endpoint and authentication state
#[derive(Args, Debug)]
pub struct InfoCommand {}

impl InfoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(endpoint) = &global.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(token) = &global.token {
            config.private_token = Some(token.clone());
        }

        let color = console::colors_enabled();
        print_field(
            "Endpoint",
            config.endpoint.as_deref().unwrap_or("(not set)"),
            color,
        );
        print_field(
            "Private token",
            if config.private_token.is_some() {
                "(set)"
            } else {
                "(not set)"
            },
            color,
        );
        print_field(
            "Sudo",
            global
                .sudo
                .as_deref()
                .or(config.sudo.as_deref())
                .unwrap_or("(none)"),
            color,
        );
        if let Some(path) = Config::config_path() {
            print_field("Config file", &path.display().to_string(), color);
        }

        Ok(())
    }
}
