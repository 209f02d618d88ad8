pub mod analytics;
pub mod post;
pub mod react;
pub mod seed;
pub mod shell;
pub mod user;
