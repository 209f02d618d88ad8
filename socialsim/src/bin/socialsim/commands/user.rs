use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Subcommand};
use socialsim::{Client, ProfileUpdate, SKILL_COUNT, Skills, validators::is_valid_email};

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::{ProfileView, UserListView};

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Create Profiles",
        commands: &[
            "socialsim user create alice --name \"Alice A\" --email a@x.com --skills Rust SQL Go Lua Zig",
        ],
    },
    ExampleGroup {
        title: "Inspect Profiles",
        commands: &[
            "socialsim user list                     # Every registered profile",
            "socialsim user show alice               # One profile",
            "socialsim --output json user show alice",
        ],
    },
    ExampleGroup {
        title: "Edit Profiles",
        commands: &[
            "socialsim user edit alice --email alice@example.org",
            "socialsim user edit alice --skills Rust C Python Bash Nix",
        ],
    },
];

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new profile
    Create(CreateUserArgs),

    /// Show one profile
    Show {
        /// Username to look up
        username: String,
    },

    /// List every profile
    List,

    /// Change name, email or skills of a profile
    Edit(EditUserArgs),
}

#[derive(Args)]
pub struct CreateUserArgs {
    /// Unique username
    pub username: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Exactly five skills, in order
    #[arg(long, num_args = SKILL_COUNT, value_name = "SKILL", required = true)]
    pub skills: Vec<String>,
}

#[derive(Args)]
pub struct EditUserArgs {
    /// Profile to edit
    pub username: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Five replacement skills, in order
    #[arg(long, num_args = SKILL_COUNT, value_name = "SKILL")]
    pub skills: Option<Vec<String>>,
}

pub fn handle_user_commands(command: UserCommands, client: &Client, output: &OutputManager) -> Result<()> {
    match command {
        UserCommands::Create(args) => {
            if !is_valid_email(&args.email) {
                bail!("'{}' is not a valid email address", args.email);
            }
            let skills = skills_from(args.skills)?;
            let user = client
                .users()
                .create_user(args.username.trim(), &args.name, &args.email, skills)?;
            output.success(&format!("Profile created for @{} (user id {})", user.username, user.user_id));
            output.display(&ProfileView(user))?;
        }
        UserCommands::Show { username } => {
            let user = client
                .users()
                .find_user(&username)?
                .with_context(|| format!("user @{username} not found"))?;
            output.display(&ProfileView(user))?;
        }
        UserCommands::List => {
            let users = client.users().list_users()?;
            output.display(&UserListView(users.into_values().collect()))?;
        }
        UserCommands::Edit(args) => {
            let updates = edit_requests(args.name, args.email, args.skills)?;
            if updates.is_empty() {
                bail!("nothing to update; pass --name, --email or --skills");
            }
            let mut user = None;
            for update in updates {
                user = Some(client.users().apply_update(&args.username, update)?);
            }
            output.success(&format!("Profile @{} updated", args.username));
            if let Some(user) = user {
                output.display(&ProfileView(user))?;
            }
        }
    }
    Ok(())
}

fn edit_requests(
    name: Option<String>,
    email: Option<String>,
    skills: Option<Vec<String>>,
) -> Result<Vec<ProfileUpdate>> {
    let mut updates = Vec::new();
    if let Some(name) = name {
        updates.push(ProfileUpdate::Name(name));
    }
    if let Some(email) = email {
        if !is_valid_email(&email) {
            bail!("'{email}' is not a valid email address");
        }
        updates.push(ProfileUpdate::Email(email));
    }
    if let Some(skills) = skills {
        updates.push(ProfileUpdate::Skills(skills_from(skills)?));
    }
    Ok(updates)
}

pub fn skills_from(values: Vec<String>) -> Result<Skills> {
    let skills: Result<Skills, Vec<String>> = values.try_into();
    skills.map_err(|values| anyhow!("expected {SKILL_COUNT} skills, got {}", values.len()))
}
