//! Storyreel: AI-assisted storyboard authoring.
//!
//! A user describes a video concept, converses with an AI assistant to
//! refine a storyboard, and the resulting project, chat history, and
//! storyboard screens are persisted as files on disk. This facade crate
//! re-exports the workspace's public API.
//!
//! # Crates
//!
//! - [`storyreel_extract`]: the extraction pipeline that turns free-form
//!   AI output into validated storyboard screens
//! - [`storyreel_flow`]: the conversational-flow engine client and
//!   response unwrapping
//! - [`storyreel_storage`]: filesystem persistence
//! - [`storyreel_server`]: the HTTP route layer
//! - [`storyreel_core`] / [`storyreel_error`]: shared types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

pub use storyreel_core::{
    ChatMessage, ExtractionResult, Project, ProjectRequirements, Role, ScreenType, StoryRecord,
    StoryboardScreen, VideoType,
};
pub use storyreel_error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use storyreel_extract::{extract_storyboard, format_stories, format_story};
pub use storyreel_flow::{FlowClient, FlowConfig, unwrap_reply};
pub use storyreel_server::{AppState, ServerConfig, serve};
pub use storyreel_storage::ProjectStore;
