//! Application state.
//!
//! Every shared resource is constructed once at startup and injected here;
//! handlers receive it via `State<Arc<AppState>>`. Nothing in this struct is
//! request-mutable: the catalog pool and the upstream client carry their own
//! internal synchronization.

use plexgate_core::Config;
use plexgate_db::PartCatalog;
use plexgate_storage::StorageSigner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Read-only view over the Plex library database.
    pub catalog: PartCatalog,
    /// Presigned URL generation for media objects.
    pub signer: Arc<dyn StorageSigner>,
    /// Shared client for the relay path.
    pub upstream: reqwest::Client,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
