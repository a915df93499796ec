//! Filesystem persistence for Storyreel.
//!
//! Each project lives in its own directory under the store's base path:
//!
//! ```text
//! data/
//! └── projects/
//!     └── 6f9c.../
//!         ├── project.json        (manifest, incl. story IDs)
//!         ├── chat.json           (conversation history)
//!         └── stories/
//!             ├── story_1723456789123_1.json
//!             └── story_1723456789123_2.json
//! ```
//!
//! All writes go through a temp-file + rename so a crash never leaves a
//! half-written record behind.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::ProjectStore;
