use comfy_table::{Cell, Table};
use serde::Serialize;
use socialsim::{LedgerEntry, PostEngagement, ReactionRecord, User, UserAnalytics};

use crate::{
    output::{GlobalOptions, TableDisplay, add_table_header, header_cells, themed_table},
    theme::GLYPHS,
};

#[derive(Serialize)]
#[serde(transparent)]
pub struct ProfileView(pub User);

impl TableDisplay for ProfileView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let user = &self.0;
        let mut table = themed_table(options);
        table.add_row(vec![Cell::new("Username"), Cell::new(&user.username)]);
        table.add_row(vec![Cell::new("User ID"), Cell::new(user.user_id)]);
        table.add_row(vec![Cell::new("Name"), Cell::new(&user.name)]);
        table.add_row(vec![Cell::new("Email"), Cell::new(&user.email)]);
        table.add_row(vec![Cell::new("Skills"), Cell::new(user.skills.join(", "))]);
        table
    }

    fn to_compact(&self) -> String {
        format!("#{} @{} {} <{}>", self.0.user_id, self.0.username, self.0.name, self.0.email)
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct UserListView(pub Vec<User>);

impl TableDisplay for UserListView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options);
        add_table_header(&mut table, options, &["ID", "Username", "Name", "Email"]);
        for user in &self.0 {
            table.add_row(vec![
                Cell::new(user.user_id),
                Cell::new(&user.username),
                Cell::new(&user.name),
                Cell::new(&user.email),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!("Users: {}", self.0.len())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct PostListView(pub Vec<LedgerEntry>);

impl TableDisplay for PostListView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options);
        add_table_header(&mut table, options, &["ID", "Author", "Posted", "Content"]);
        for entry in &self.0 {
            table.add_row(vec![
                Cell::new(entry.id),
                Cell::new(format!("@{}", entry.post.username)),
                Cell::new(&entry.post.created_at),
                Cell::new(&entry.post.content),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!("Posts: {}", self.0.len())
    }
}

#[derive(Serialize)]
pub struct PostDetailView {
    #[serde(flatten)]
    pub entry: LedgerEntry,
    pub reactions: ReactionRecord,
}

impl TableDisplay for PostDetailView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let post = &self.entry.post;
        let likes = &self.reactions.likes;
        let mut table = themed_table(options);
        table.add_row(vec![Cell::new("Post"), Cell::new(self.entry.id)]);
        table.add_row(vec![Cell::new("Author"), Cell::new(format!("@{}", post.username))]);
        table.add_row(vec![Cell::new("Content"), Cell::new(&post.content)]);
        table.add_row(vec![Cell::new("Posted"), Cell::new(&post.created_at)]);
        table.add_row(vec![Cell::new(format!("{} Likes", GLYPHS.like)), Cell::new(likes.len())]);
        if !likes.is_empty() {
            let likers: Vec<String> = likes.iter().map(|liker| format!("@{liker}")).collect();
            table.add_row(vec![Cell::new("Liked by"), Cell::new(likers.join(", "))]);
        }
        table.add_row(vec![
            Cell::new(format!("{} Comments", GLYPHS.comment)),
            Cell::new(self.reactions.comments.len()),
        ]);
        for comment in &self.reactions.comments {
            table.add_row(vec![Cell::new(format!("@{}", comment.username)), Cell::new(&comment.text)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "#{} @{} likes={} comments={}",
            self.entry.id,
            self.entry.post.username,
            self.reactions.likes.len(),
            self.reactions.comments.len()
        )
    }
}

#[derive(Serialize)]
pub struct AnalyticsView {
    #[serde(flatten)]
    pub analytics: UserAnalytics,
    pub posts: Vec<PostEngagement>,
}

impl TableDisplay for AnalyticsView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let stats = &self.analytics;
        let mut table = themed_table(options);
        table.add_row(vec![Cell::new("Username"), Cell::new(&stats.username)]);
        table.add_row(vec![Cell::new("Total Posts"), Cell::new(stats.total_posts)]);
        table.add_row(vec![Cell::new("Total Likes Received"), Cell::new(stats.total_likes)]);
        table.add_row(vec![Cell::new("Total Comments Received"), Cell::new(stats.total_comments)]);
        if let Some(post_id) = stats.most_engaged_post_id {
            table.add_row(vec![Cell::new("Most Engaged Post ID"), Cell::new(post_id)]);
            table.add_row(vec![Cell::new("Engagement Count"), Cell::new(stats.most_engaged_count)]);
        }
        if !self.posts.is_empty() {
            table.add_row(header_cells(options, &["Post ID", "Likes", "Comments", "Engagement"]));
            for row in &self.posts {
                table.add_row(vec![
                    Cell::new(row.post_id),
                    Cell::new(row.likes),
                    Cell::new(row.comments),
                    Cell::new(row.total()),
                ]);
            }
        }
        table
    }

    fn to_compact(&self) -> String {
        let stats = &self.analytics;
        let top = stats
            .most_engaged_post_id
            .map(|id| format!(" top=#{id}({})", stats.most_engaged_count))
            .unwrap_or_default();
        let rows: Vec<String> = self
            .posts
            .iter()
            .map(|row| format!("#{}={}", row.post_id, row.total()))
            .collect();
        let per_post = if rows.is_empty() {
            String::new()
        } else {
            format!(" [{}]", rows.join(" "))
        };
        format!(
            "@{} posts={} likes={} comments={}{top}{per_post}",
            stats.username, stats.total_posts, stats.total_likes, stats.total_comments
        )
    }
}
