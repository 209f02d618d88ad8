use anyhow::{Result, bail};
use clap::Args;
use socialsim::{Client, PostId};

use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const LIKE_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Like",
    commands: &["socialsim like 3 --user alice             # Second like by alice is a no-op"],
}];

pub const COMMENT_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Comment",
    commands: &["socialsim comment 3 --user bob \"nice post\""],
}];

#[derive(Args)]
pub struct LikeArgs {
    /// Post to like
    pub post_id: PostId,

    /// Username reacting
    #[arg(long = "user")]
    pub username: String,
}

#[derive(Args)]
pub struct CommentArgs {
    /// Post to comment on
    pub post_id: PostId,

    /// Username reacting
    #[arg(long = "user")]
    pub username: String,

    /// Comment text
    pub text: String,
}

/// The reaction index trusts its callers, so both ends are checked here.
fn ensure_targets(client: &Client, post_id: PostId, username: &str) -> Result<()> {
    if client.posts().get_post(post_id)?.is_none() {
        bail!("post {post_id} not found");
    }
    if !client.users().contains(username)? {
        bail!("user @{username} not found; create a profile first");
    }
    Ok(())
}

pub fn handle_like(args: LikeArgs, client: &Client, output: &OutputManager) -> Result<()> {
    ensure_targets(client, args.post_id, &args.username)?;
    if client.reactions().add_like(args.post_id, &args.username)? {
        output.success(&format!("{} liked the post!", args.username));
    } else {
        output.warning("You already liked this post!");
    }
    Ok(())
}

pub fn handle_comment(args: CommentArgs, client: &Client, output: &OutputManager) -> Result<()> {
    ensure_targets(client, args.post_id, &args.username)?;
    client.reactions().add_comment(args.post_id, &args.username, &args.text)?;
    output.success("Comment added!");
    Ok(())
}
