//! Error types for the Storyreel storyboard service.
//!
//! This crate provides the foundation error types used throughout the
//! Storyreel workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyreel_error::{StoryreelResult, ConfigError};
//!
//! fn load_settings() -> StoryreelResult<String> {
//!     Err(ConfigError::new("STORYREEL_FLOW_ID not set"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod flow;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use extract::{ExtractError, ExtractErrorKind};
pub use flow::{FlowError, FlowErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
