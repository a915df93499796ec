//! HTTP route layer for the Storyreel storyboard service.
//!
//! Thin glue over the workspace crates: project CRUD, chat history
//! save/load, the chat-turn endpoint (flow call, reply unwrapping, optional
//! storyboard extraction), and story listing. All domain logic lives in
//! `storyreel_extract`, `storyreel_flow`, and `storyreel_storage`; handlers
//! only translate between HTTP and those crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod handlers;
mod router;
mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::router;
pub use state::AppState;

use std::sync::Arc;

/// Bind and serve the API until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server loop fails.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<(), std::io::Error> {
    let app = router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Storyreel API listening");
    axum::serve(listener, app).await
}
