//! Storyboard extraction pipeline for AI-generated text.
//!
//! Assistant replies mix prose, markdown, and JSON freely. This crate turns
//! that free-form text into validated storyboard screens:
//!
//! - **Block location**: three ordered strategies find candidate JSON
//!   substrings (fenced code blocks, bracketed arrays in prose, whole-text
//!   fallback), each cleaned of fences and trailing prose.
//! - **Safe parsing**: JSON decoding that reports failure instead of
//!   propagating it.
//! - **Normalization + validation**: free-form screen-type synonyms are
//!   rewritten onto the fixed enumeration, then each record is checked
//!   against the screen schema.
//! - **Orchestration**: one call composing the above, returning raw records,
//!   validated screens, and diagnostics independently.
//! - **Formatting**: projection of validated screens into the flat story
//!   record the rest of the system stores and displays.
//!
//! Every entry point is a total function over untrusted model output: no
//! input panics or propagates an error to the caller's caller.
//!
//! # Example
//!
//! ```
//! use storyreel_extract::extract_storyboard;
//!
//! let fence = "```";
//! let reply = format!(
//!     "Here's your storyboard:\n\n{fence}json\n[{{\"screen_number\": 1, \
//!      \"voiceover_text\": \"Hi.\", \"target_duration_sec\": 5, \
//!      \"screen_type\": \"talking head\"}}]\n{fence}\n"
//! );
//!
//! let result = extract_storyboard(&reply, true);
//! assert!(result.success);
//! assert_eq!(result.validated_data.unwrap().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod format;
mod locate;
mod parse;
mod validate;

pub use extract::extract_storyboard;
pub use format::{format_stories, format_story};
pub use locate::{clean_json_candidate, locate_json_blocks};
pub use parse::parse_json_safely;
pub use validate::{normalize_screen_type, validate_screens};
