//
//  gitlab-cli
//  cli/users.rs
//

//! User management commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::Params;

use super::{parse_fields, GlobalOptions};

/// Manage users
#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List users
    #[command(visible_alias = "ls")]
    List {
        /// Filter by username or email
        #[arg(long)]
        search: Option<String>,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Show a user, or the authenticated user when no ID is given
    Get {
        /// User ID
        id: Option<u64>,
    },

    /// Create a user (admin only)
    Create {
        /// Email address
        email: String,

        /// Initial password
        password: String,

        /// Username
        username: String,

        /// Extra attributes as key=value (value parsed as YAML)
        #[arg(long, short = 'F', action = clap::ArgAction::Append)]
        field: Vec<String>,
    },

    /// Update a user's attributes (admin only)
    Edit {
        /// User ID
        id: u64,

        /// Attributes as key=value (value parsed as YAML)
        #[arg(long, short = 'F', action = clap::ArgAction::Append)]
        field: Vec<String>,
    },

    /// Delete a user (admin only)
    #[command(visible_alias = "rm")]
    Delete {
        /// User ID
        id: u64,
    },

    /// Block a user (admin only)
    Block {
        /// User ID
        id: u64,
    },

    /// Unblock a user (admin only)
    Unblock {
        /// User ID
        id: u64,
    },
}

impl UsersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.build_client()?;
        let writer = global.writer();

        match &self.command {
            UsersSubcommand::List {
                search,
                page,
                per_page,
            } => {
                let options = Params::new()
                    .set_opt("search", search.as_deref())
                    .set_opt("page", *page)
                    .set_opt("per_page", *per_page);
                let users = client.users(options).await?;
                writer.write_collection(&users)?;
            }
            UsersSubcommand::Get { id } => {
                let user = match id {
                    Some(id) => client.user(*id).await?,
                    None => client.current_user().await?,
                };
                writer.write_record(&user)?;
            }
            UsersSubcommand::Create {
                email,
                password,
                username,
                field,
            } => {
                let options = parse_fields(field)?;
                let user = client.create_user(email, password, username, options).await?;
                writer.write_success(&format!(
                    "Created user {}",
                    user.get_str("username").unwrap_or(username)
                ));
                writer.write_record(&user)?;
            }
            UsersSubcommand::Edit { id, field } => {
                let options = parse_fields(field)?;
                let user = client.edit_user(*id, options).await?;
                writer.write_record(&user)?;
            }
            UsersSubcommand::Delete { id } => {
                if !global.confirm(&format!("Delete user {id}?"))? {
                    writer.write_error("Cancelled");
                    return Ok(());
                }
                client.delete_user(*id).await?;
                writer.write_success(&format!("Deleted user {id}"));
            }
            UsersSubcommand::Block { id } => {
                client.block_user(*id).await?;
                writer.write_success(&format!("Blocked user {id}"));
            }
            UsersSubcommand::Unblock { id } => {
                client.unblock_user(*id).await?;
                writer.write_success(&format!("Unblocked user {id}"));
            }
        }

        Ok(())
    }
}
