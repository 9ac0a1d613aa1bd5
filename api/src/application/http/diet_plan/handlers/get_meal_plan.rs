use axum::extract::{Query, State};

use crate::application::http::{
    diet_plan::validators::GetMealPlanParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use nutriplan_core::domain::diet_plan::{
    entities::profile::{DietPreference, FitnessGoal},
    ports::DietPlanService,
    value_objects::GetMealPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMealPlanResponse {
    pub preference: DietPreference,
    pub goal: FitnessGoal,
    pub meals: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/meal-plans",
    tag = "diet-plans",
    summary = "Get a sample meal plan",
    description = "Returns the sample meal list for a diet preference and fitness goal",
    params(GetMealPlanParams),
    responses(
        (status = 200, body = GetMealPlanResponse)
    )
)]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    Query(params): Query<GetMealPlanParams>,
) -> Result<Response<GetMealPlanResponse>, ApiError> {
    let meals = state
        .service
        .get_meal_plan(GetMealPlanInput {
            preference: params.preference,
            goal: params.goal,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealPlanResponse {
        preference: params.preference,
        goal: params.goal,
        meals,
    }))
}
