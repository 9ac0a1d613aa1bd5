use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriplan_core::domain::diet_plan::{entities::DayPlan, ports::DietPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetWeeklyScheduleResponse {
    pub data: Vec<DayPlan>,
}

#[utoipa::path(
    get,
    path = "/weekly-schedule",
    tag = "diet-plans",
    summary = "Get the weekly meal schedule",
    description = "Returns the fixed Monday through Sunday meal schedule",
    responses(
        (status = 200, body = GetWeeklyScheduleResponse)
    )
)]
pub async fn get_weekly_schedule(
    State(state): State<AppState>,
) -> Result<Response<GetWeeklyScheduleResponse>, ApiError> {
    let schedule = state
        .service
        .get_weekly_schedule()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWeeklyScheduleResponse { data: schedule }))
}
