use anyhow::Result;
use clap::Args;
use socialsim::Client;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::AnalyticsView;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Engagement",
    commands: &[
        "socialsim analytics alice",
        "socialsim --output compact analytics admin",
    ],
}];

#[derive(Args)]
pub struct AnalyticsArgs {
    /// Author to summarize
    pub username: String,
}

pub fn handle_analytics(args: AnalyticsArgs, client: &Client, output: &OutputManager) -> Result<()> {
    if !client.users().contains(&args.username)? {
        output.warning(&format!("@{} has no profile", args.username));
    }
    let analytics = client.analytics();
    let view = AnalyticsView {
        analytics: analytics.user_analytics(&args.username)?,
        posts: analytics.post_engagement(&args.username)?,
    };
    output.display(&view)
}
