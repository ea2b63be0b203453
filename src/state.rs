use crate::config::Config;
use crate::services::telegram::{ReportNotifier, TelegramNotifier};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn ReportNotifier>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let notifier = Arc::new(TelegramNotifier::new(
            config.telegram_api_url.clone(),
            config.telegram.clone(),
        ));
        Self { config, notifier }
    }
}

pub type SharedState = Arc<AppState>;
