//! Development server for the Anachrovox front end.
//!
//! Serves the static browser client and exposes the registered roles as JSON
//! so the client can show what the host will be primed with.

pub mod logging;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use role::{RoleDescription, RoleError, RoleRegistry};
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

pub use logging::init_logging;

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub roles: Arc<RoleRegistry>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Role errors rendered as JSON responses.
pub struct ApiError(RoleError);

impl From<RoleError> for ApiError {
    fn from(err: RoleError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RoleError::UnknownRole(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

async fn list_roles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.roles.names())
}

async fn describe_role(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RoleDescription>, ApiError> {
    debug!(%name, "role requested");
    let role = state.roles.get(&name).inspect_err(|e| warn!("{e}"))?;
    Ok(Json(role.describe()))
}

/// Build the router serving `root` and the role endpoints.
pub fn app(root: impl Into<PathBuf>, roles: Arc<RoleRegistry>) -> Router {
    let root = root.into();
    Router::new()
        .route("/roles", get(list_roles))
        .route("/roles/{name}", get(describe_role))
        .route_service("/", ServeFile::new(root.join("index.html")))
        .nest_service("/lib", ServeDir::new(root.join("lib")))
        .fallback_service(ServeDir::new(root))
        .with_state(AppState { roles })
}
