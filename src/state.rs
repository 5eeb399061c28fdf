use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::AdminError;
use crate::observability::metrics::Metrics;
use crate::store::drafts::DraftStore;
use crate::store::session::SessionStore;
use crate::sync::debounce::Debouncer;

/// Everything a host application needs to drive the admin flows. Built once
/// at startup; the persisted stores are read from the configured data dir.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub session: SessionStore,
    pub drafts: Arc<DraftStore>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn init(config: Config) -> Result<Self, AdminError> {
        let metrics = Metrics::new();
        let api = ApiClient::new(&config, metrics.clone())?;
        let session = SessionStore::load(config.data_dir.join("session.json"))?;
        let drafts = Arc::new(DraftStore::load(config.data_dir.join("draft_assignments.json"))?);

        metrics.draft_assignments.set(drafts.len() as i64);

        Ok(Self {
            config,
            api,
            session,
            drafts,
            metrics,
        })
    }

    /// One debouncer per search box, all sharing the configured window.
    pub fn search_debouncer(&self) -> Debouncer {
        Debouncer::from_millis(self.config.search_debounce_ms)
    }

    /// Logout wipes the persisted session. Drafts stay: they are intents,
    /// not credentials.
    pub fn logout(&mut self) -> Result<(), AdminError> {
        tracing::info!("session cleared");
        self.session.clear()
    }
}
