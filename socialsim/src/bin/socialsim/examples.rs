use crate::commands::{analytics, post, react, user};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "user",
            groups: user::EXAMPLES,
        },
        CommandExample {
            name: "post",
            groups: post::EXAMPLES,
        },
        CommandExample {
            name: "like",
            groups: react::LIKE_EXAMPLES,
        },
        CommandExample {
            name: "comment",
            groups: react::COMMENT_EXAMPLES,
        },
        CommandExample {
            name: "analytics",
            groups: analytics::EXAMPLES,
        },
    ]
}
