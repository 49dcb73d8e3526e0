use crate::repositories::sessions::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
}
