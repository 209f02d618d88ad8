//! Interactive menu shell.
//!
//! Menus map a typed token to a tagged action. The session only remembers who
//! is logged in; every action re-reads what it needs from the store.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::Rng;
use socialsim::{
    Client, LedgerEntry, PostId, ProfileUpdate, SocialError, Skills,
    types::PostLedgerRecord,
    validators::{is_valid_email, is_valid_username},
};

use crate::output::OutputManager;
use crate::prompt::Prompter;
use crate::views::{AnalyticsView, PostDetailView, ProfileView};

/// How many random posts "React to Post" offers.
const REACT_SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateProfile,
    Login,
    ViewProfile,
    EditProfile,
    CreatePost,
    ReactToPost,
    ShowPostDetails,
    Analytics,
    Logout,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Skills,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChoice {
    Like,
    Comment,
}

pub struct MenuEntry<A> {
    pub token: &'static str,
    pub label: &'static str,
    pub action: A,
}

const fn entry<A>(token: &'static str, label: &'static str, action: A) -> MenuEntry<A> {
    MenuEntry { token, label, action }
}

pub const GUEST_MENU: &[MenuEntry<MenuAction>] = &[
    entry("1", "Create Profile", MenuAction::CreateProfile),
    entry("2", "Login", MenuAction::Login),
    entry("3", "Exit", MenuAction::Exit),
];

pub const USER_MENU: &[MenuEntry<MenuAction>] = &[
    entry("1", "View Profile", MenuAction::ViewProfile),
    entry("2", "Edit Profile", MenuAction::EditProfile),
    entry("3", "Create Post", MenuAction::CreatePost),
    entry("4", "React to Post", MenuAction::ReactToPost),
    entry("5", "Show Post Details", MenuAction::ShowPostDetails),
    entry("6", "My Analytics", MenuAction::Analytics),
    entry("7", "Logout", MenuAction::Logout),
    entry("8", "Exit", MenuAction::Exit),
];

pub const EDIT_MENU: &[MenuEntry<EditField>] = &[
    entry("1", "Name", EditField::Name),
    entry("2", "Email", EditField::Email),
    entry("3", "Skills", EditField::Skills),
    entry("4", "Exit", EditField::Done),
];

pub const REACTION_MENU: &[MenuEntry<ReactionChoice>] = &[
    entry("1", "Like", ReactionChoice::Like),
    entry("2", "Comment", ReactionChoice::Comment),
];

pub fn resolve<A: Copy>(menu: &[MenuEntry<A>], token: &str) -> Option<A> {
    let token = token.trim();
    menu.iter().find(|entry| entry.token == token).map(|entry| entry.action)
}

enum Flow {
    Continue,
    Exit,
}

/// Runs the shell on the process's stdin/stdout.
pub fn run_shell(client: &Client, output: &OutputManager) -> Result<()> {
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    Shell::new(client, output, prompter, rand::thread_rng()).run()
}

pub struct Shell<'a, R, W, G> {
    client: &'a Client,
    output: &'a OutputManager,
    prompter: Prompter<R, W>,
    rng: G,
    session: Option<String>,
}

impl<'a, R, W, G> Shell<'a, R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(client: &'a Client, output: &'a OutputManager, prompter: Prompter<R, W>, rng: G) -> Self {
        Self {
            client,
            output,
            prompter,
            rng,
            session: None,
        }
    }

    /// Loops over the menus until Exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.output.heading("WELCOME TO SOCIAL MEDIA APP");

        loop {
            let menu = if self.session.is_some() { USER_MENU } else { GUEST_MENU };

            self.output.subheading("Main Menu");
            if let Some(username) = &self.session {
                self.output.info(&format!("Logged in as: @{username}"));
            }
            self.print_menu(menu);

            let Some(choice) = self.prompter.ask("\nChoose: ")? else {
                break;
            };
            let Some(action) = resolve(menu, &choice) else {
                self.output.error("Invalid choice!");
                continue;
            };
            if let Flow::Exit = self.dispatch(action)? {
                break;
            }
        }

        self.output.info("Goodbye!");
        Ok(())
    }

    #[cfg(test)]
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    fn print_menu<A>(&self, menu: &[MenuEntry<A>]) {
        for entry in menu {
            self.output.menu_item(entry.token, entry.label);
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        match (action, self.session.clone()) {
            (MenuAction::CreateProfile, _) => self.create_profile()?,
            (MenuAction::Login, _) => self.login()?,
            (MenuAction::Exit, _) => return Ok(Flow::Exit),
            (_, None) => self.output.error("Please login first!"),
            (MenuAction::ViewProfile, Some(username)) => self.view_profile(&username)?,
            (MenuAction::EditProfile, Some(username)) => self.edit_profile(&username)?,
            (MenuAction::CreatePost, Some(username)) => self.create_post(&username)?,
            (MenuAction::ReactToPost, Some(username)) => self.react_to_post(&username)?,
            (MenuAction::ShowPostDetails, Some(_)) => self.show_post_details()?,
            (MenuAction::Analytics, Some(username)) => self.analytics(&username)?,
            (MenuAction::Logout, Some(username)) => {
                self.output.info(&format!("Goodbye, @{username}!"));
                self.session = None;
            }
        }
        Ok(Flow::Continue)
    }

    fn create_profile(&mut self) -> Result<()> {
        self.output.subheading("Create Profile");

        let username = loop {
            let Some(candidate) = self.prompter.ask_cancellable("Username (or 'back' to cancel): ")? else {
                return Ok(());
            };
            if is_valid_username(&candidate) && !self.client.users().contains(&candidate)? {
                break candidate;
            }
            self.output
                .error("Username exists or empty! Please try again or 'back' to cancel.");
        };
        let Some(name) = self.prompter.ask("Name: ")? else {
            return Ok(());
        };
        let Some(email) = self.ask_email("Email: ")? else {
            return Ok(());
        };
        let Some(skills) = self.ask_skills()? else {
            return Ok(());
        };

        match self.client.users().create_user(&username, &name, &email, skills) {
            Ok(user) => {
                self.output
                    .success(&format!("Profile Created Successfully! Welcome, {}!", user.username));
                self.session = Some(user.username);
            }
            Err(err @ SocialError::DuplicateUsername { .. }) => self.output.error(&err.to_string()),
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn login(&mut self) -> Result<()> {
        self.output.subheading("Login");
        let Some(username) = self.prompter.ask_cancellable("Username (or 'back' to cancel): ")? else {
            return Ok(());
        };
        if !self.client.users().contains(&username)? {
            self.output.error("User not found! Please create a profile first.");
            return Ok(());
        }
        self.output.success(&format!("Welcome back, {username}!"));
        self.session = Some(username);
        Ok(())
    }

    fn view_profile(&mut self, username: &str) -> Result<()> {
        match self.client.users().find_user(username)? {
            Some(user) => {
                self.output.heading("YOUR PROFILE");
                self.output.display(&ProfileView(user))?;
            }
            None => self.profile_missing(username),
        }
        Ok(())
    }

    fn edit_profile(&mut self, username: &str) -> Result<()> {
        let Some(mut user) = self.client.users().find_user(username)? else {
            self.profile_missing(username);
            return Ok(());
        };
        let mut changed = false;

        loop {
            self.output.subheading("Edit Profile");
            self.print_menu(EDIT_MENU);
            let Some(choice) = self.prompter.ask("Choose: ")? else {
                break;
            };
            let update = match resolve(EDIT_MENU, &choice) {
                Some(EditField::Done) => break,
                Some(EditField::Name) => self.prompter.ask("New name: ")?.map(ProfileUpdate::Name),
                Some(EditField::Email) => self.ask_email("New email: ")?.map(ProfileUpdate::Email),
                Some(EditField::Skills) => self.edit_skills(&user.skills)?.map(ProfileUpdate::Skills),
                None => {
                    self.output.error("Invalid choice!");
                    continue;
                }
            };
            if let Some(update) = update {
                user = self.client.users().apply_update(username, update)?;
                changed = true;
            }
        }

        if changed {
            self.output.success("Profile updated successfully!");
        }
        Ok(())
    }

    fn create_post(&mut self, username: &str) -> Result<()> {
        let Some(content) = self.prompter.ask("\nWrite your post: ")? else {
            return Ok(());
        };
        let entry = self.client.posts().create_post(username, &content)?;
        self.output
            .success(&format!("Post Created Successfully! (Post ID {})", entry.id));
        Ok(())
    }

    fn react_to_post(&mut self, username: &str) -> Result<()> {
        let posts = self.client.posts().list_posts()?;
        if posts.is_empty() {
            self.output.warning("There are no posts yet.");
            return Ok(());
        }

        self.output.subheading("Random Posts");
        for post_id in self.client.posts().sample_ids(REACT_SAMPLE_SIZE, &mut self.rng)? {
            let post = &posts[&post_id];
            self.output
                .bullet(&format!("Post ID {post_id} by @{}: {}", post.username, post.content));
        }

        let Some(post_id) = self.ask_post_id("\nSelect Post ID (or 'back' to cancel): ", &posts)? else {
            return Ok(());
        };

        self.print_menu(REACTION_MENU);
        let Some(choice) = self.prompter.ask("Choose: ")? else {
            return Ok(());
        };
        match resolve(REACTION_MENU, &choice) {
            Some(ReactionChoice::Like) => {
                if self.client.reactions().add_like(post_id, username)? {
                    self.output.success(&format!("{username} liked the post!"));
                } else {
                    self.output.warning("You already liked this post!");
                }
            }
            Some(ReactionChoice::Comment) => {
                let Some(text) = self.prompter.ask("Your comment: ")? else {
                    return Ok(());
                };
                self.client.reactions().add_comment(post_id, username, &text)?;
                self.output.success("Comment added!");
            }
            None => self.output.error("Invalid choice!"),
        }
        Ok(())
    }

    fn show_post_details(&mut self) -> Result<()> {
        let posts = self.client.posts().list_posts()?;
        let Some(post_id) = self.ask_post_id("\nEnter Post ID (or 'back' to cancel): ", &posts)? else {
            return Ok(());
        };
        let Some(post) = posts.get(&post_id).cloned() else {
            return Ok(());
        };
        let reactions = self.client.reactions().get_reactions(post_id)?;
        self.output.display(&PostDetailView {
            entry: LedgerEntry { id: post_id, post },
            reactions,
        })
    }

    fn analytics(&mut self, username: &str) -> Result<()> {
        let analytics = self.client.analytics();
        let view = AnalyticsView {
            analytics: analytics.user_analytics(username)?,
            posts: analytics.post_engagement(username)?,
        };
        self.output.heading("USER ANALYTICS");
        self.output.display(&view)
    }

    /// Re-prompts until the answer names a post in `posts`. `None` on `back`.
    fn ask_post_id(&mut self, prompt: &str, posts: &PostLedgerRecord) -> Result<Option<PostId>> {
        loop {
            let Some(answer) = self.prompter.ask_cancellable(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<PostId>() {
                Ok(post_id) if posts.contains_key(&post_id) => return Ok(Some(post_id)),
                _ => self.output.error("Invalid Post ID!"),
            }
        }
    }

    fn ask_email(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            let Some(email) = self.prompter.ask_cancellable(prompt)? else {
                return Ok(None);
            };
            if is_valid_email(&email) {
                return Ok(Some(email));
            }
            self.output
                .error("Invalid email address. Please try again or 'back' to cancel.");
        }
    }

    fn ask_skills(&mut self) -> Result<Option<Skills>> {
        let mut skills = Skills::default();
        for (index, slot) in skills.iter_mut().enumerate() {
            let Some(skill) = self.prompter.ask(&format!("Skill {}: ", index + 1))? else {
                return Ok(None);
            };
            *slot = skill;
        }
        Ok(Some(skills))
    }

    /// Empty answers keep the current skill; `back` abandons the whole edit.
    fn edit_skills(&mut self, current: &Skills) -> Result<Option<Skills>> {
        let mut skills = current.clone();
        for (index, slot) in skills.iter_mut().enumerate() {
            let prompt = format!(
                "Skill {} (current: {slot}). To keep the same, press Enter (or 'back' to cancel all changes): ",
                index + 1
            );
            let Some(answer) = self.prompter.ask_cancellable(&prompt)? else {
                return Ok(None);
            };
            if !answer.is_empty() {
                *slot = answer;
            }
        }
        Ok(Some(skills))
    }

    fn profile_missing(&mut self, username: &str) {
        self.output
            .error(&format!("Profile @{username} no longer exists; logging out."));
        self.session = None;
    }
}
