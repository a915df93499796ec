//! Core data types for the Storyreel storyboard service.
//!
//! This crate defines the domain model shared across the workspace:
//! storyboard screens and their type enumeration, the extraction result
//! shape, the flat story record served to clients, chat messages, and the
//! project/requirements records persisted on disk.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod project;
mod result;
mod screen;
mod story;

pub use message::{ChatMessage, Role};
pub use project::{
    HowToDemoRequirements, KnowledgeSharingRequirements, ProductReleaseRequirements, Project,
    ProjectRequirements, VideoType,
};
pub use result::ExtractionResult;
pub use screen::{ScreenType, StoryboardScreen};
pub use story::StoryRecord;
