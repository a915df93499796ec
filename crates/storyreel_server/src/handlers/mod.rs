//! Request handlers.

mod chat;
mod health;
mod project;
mod story;

pub use chat::{ChatTurnRequest, ChatTurnResponse, get_chat, post_chat_message, put_chat};
pub use health::health;
pub use project::{
    CreateProjectRequest, UpdateProjectRequest, create_project, delete_project, get_project,
    list_projects, update_project,
};
pub use story::list_stories;
