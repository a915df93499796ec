//! Shared application state.

use storyreel_flow::FlowClient;
use storyreel_storage::ProjectStore;

/// State shared by every request handler.
///
/// Both members are stateless between calls, so a single instance behind an
/// `Arc` serves all requests without locking.
pub struct AppState {
    /// Filesystem persistence for projects, chats, and stories
    pub store: ProjectStore,
    /// Client for the upstream conversational-flow engine
    pub flow: FlowClient,
}

impl AppState {
    /// Bundle the store and flow client into shared state.
    pub fn new(store: ProjectStore, flow: FlowClient) -> Self {
        Self { store, flow }
    }
}
