use std::sync::Arc;
use crate::domain::services::record_store::RecordStore;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<RecordStore>,
    pub templates: Arc<Tera>,
}
