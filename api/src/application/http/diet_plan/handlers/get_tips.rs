use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriplan_core::domain::diet_plan::ports::DietPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetTipsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/tips",
    tag = "diet-plans",
    summary = "Get nutrition and lifestyle tips",
    description = "Returns the fixed set of lifestyle tips",
    responses(
        (status = 200, body = GetTipsResponse)
    )
)]
pub async fn get_tips(State(state): State<AppState>) -> Result<Response<GetTipsResponse>, ApiError> {
    let tips = state.service.get_tips().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetTipsResponse { data: tips }))
}
