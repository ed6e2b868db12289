//! HTTP dataset client

use crate::{parse_dataset, FetchConfig, FetchError};
use gdp_core::ValidDataset;
use gdp_state::AppState;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

// ============================================================================
// DATA CLIENT
// ============================================================================

/// One-shot loader for the GDP dataset
pub struct DataClient {
    config: FetchConfig,
    state: AppState,
}

impl DataClient {
    pub fn with_config(state: AppState, config: FetchConfig) -> Self {
        Self { config, state }
    }

    /// Start loading (spawns async task)
    pub fn load(self) {
        spawn_local(async move {
            self.run().await;
        });
    }

    async fn run(self) {
        self.state.set_loading();
        tracing::info!("Fetching dataset: {}", self.config.url);

        match fetch_dataset(&self.config.url).await {
            Ok(dataset) => self.state.set_loaded(dataset),
            Err(e) => {
                tracing::error!("Dataset load failed: {}", e);
                self.state.set_failed(format!("Could not load GDP data: {}", e));
            }
        }
    }
}

/// Fetch, parse and validate the dataset at `url`
pub async fn fetch_dataset(url: &str) -> Result<ValidDataset, FetchError> {
    let response = Request::get(url).send().await?;

    if !response.ok() {
        return Err(FetchError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }

    let body = response.text().await?;
    parse_dataset(&body)
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Hook to load the dataset into `state`
pub fn use_dataset(state: AppState, url: Option<String>) {
    let config = FetchConfig::default().with_override(url);
    DataClient::with_config(state, config).load();
}
