use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::shared::config::Config;
use crate::usecases::u501_nasa_media::svs_api_client::SvsApiClient;

pub type SharedState = Arc<AppState>;

/// Read-only state shared by every request.
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
    pub svs: SvsApiClient,
    /// Plain client for calls back into this process's own API.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> anyhow::Result<SharedState> {
        let svs = SvsApiClient::new(&config.nasa.base_url, config.nasa.timeout_secs)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Arc::new(Self {
            config,
            db,
            svs,
            http,
        }))
    }
}
