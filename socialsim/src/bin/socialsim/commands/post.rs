use anyhow::{Context, Result};
use clap::Subcommand;
use socialsim::{Client, LedgerEntry, PostId};

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::{PostDetailView, PostListView};

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Publish",
        commands: &["socialsim post create --author alice \"hello world\""],
    },
    ExampleGroup {
        title: "Read",
        commands: &[
            "socialsim post list                     # Whole ledger in id order",
            "socialsim post list --author alice      # One author's posts",
            "socialsim post show 11                  # Post with likes and comments",
        ],
    },
];

#[derive(Subcommand)]
pub enum PostCommands {
    /// Publish a post
    Create {
        /// Author username
        #[arg(long)]
        author: String,

        /// Post text
        content: String,
    },

    /// Show a post with its likes and comments
    Show {
        /// Post id
        post_id: PostId,
    },

    /// List posts in id order
    List {
        /// Only posts by this author
        #[arg(long)]
        author: Option<String>,
    },
}

pub fn handle_post_commands(command: PostCommands, client: &Client, output: &OutputManager) -> Result<()> {
    match command {
        PostCommands::Create { author, content } => {
            if !client.users().contains(&author)? {
                output.warning(&format!("@{author} has no profile; posting anyway"));
            }
            let entry = client.posts().create_post(&author, &content)?;
            output.success(&format!("Post {} created", entry.id));
            output.display(&PostListView(vec![entry]))?;
        }
        PostCommands::Show { post_id } => {
            let post = client
                .posts()
                .get_post(post_id)?
                .with_context(|| format!("post {post_id} not found"))?;
            let reactions = client.reactions().get_reactions(post_id)?;
            output.display(&PostDetailView {
                entry: LedgerEntry { id: post_id, post },
                reactions,
            })?;
        }
        PostCommands::List { author } => {
            let entries = match author {
                Some(author) => client.posts().posts_by(&author)?,
                None => client
                    .posts()
                    .list_posts()?
                    .into_iter()
                    .map(|(id, post)| LedgerEntry { id, post })
                    .collect(),
            };
            output.display(&PostListView(entries))?;
        }
    }
    Ok(())
}
