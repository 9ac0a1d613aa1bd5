use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppConfigResponse {
    pub name: String,
    pub version: String,
    pub root_path: String,
}

/// Public runtime descriptor for clients.
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Response<AppConfigResponse>, ApiError> {
    Ok(Response::OK(AppConfigResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
    }))
}
