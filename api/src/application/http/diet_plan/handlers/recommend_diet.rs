use axum::extract::State;

use crate::application::http::{
    diet_plan::validators::RecommendDietRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use nutriplan_core::domain::diet_plan::{
    entities::DietRecommendation, ports::DietPlanService, value_objects::RecommendDietInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendDietResponse {
    pub data: DietRecommendation,
}

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "diet-plans",
    summary = "Generate a diet recommendation",
    description = "Computes the daily calorie target and meal plan bundle for a profile",
    request_body = RecommendDietRequest,
    responses(
        (status = 200, body = RecommendDietResponse),
        (status = 400, description = "Invalid profile")
    )
)]
pub async fn recommend_diet(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendDietRequest>,
) -> Result<Response<RecommendDietResponse>, ApiError> {
    let recommendation = state
        .service
        .recommend_diet(RecommendDietInput {
            age: payload.age,
            gender: payload.gender,
            activity: payload.activity,
            goal: payload.goal,
            diet_preference: payload.diet_preference,
            current_weight_kg: payload.current_weight_kg,
            target_weight_kg: payload.target_weight_kg,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendDietResponse {
        data: recommendation,
    }))
}
