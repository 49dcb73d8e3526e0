use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::repositories::sessions::SessionStore;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::{get, post};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub mod comparison;
pub mod pk_session;

pub struct RequestContext {
    pub sessions: Arc<dyn SessionStore>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/pk-session", post(pk_session::controller))
        .route("/api/pk-session/view", get(comparison::view))
}

async fn index() -> &'static str {
    "Running pk-session-service v0.1"
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            sessions: state.sessions.clone(),
        })
    }
}

impl Context for RequestContext {
    fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings)?;
    let app = router().with_state(state);
    let listener = TcpListener::bind((settings.app_host, settings.app_port)).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
