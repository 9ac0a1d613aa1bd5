use super::handlers::{
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
    get_tips::{__path_get_tips, get_tips},
    get_weekly_schedule::{__path_get_weekly_schedule, get_weekly_schedule},
    recommend_diet::{__path_recommend_diet, recommend_diet},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend_diet, get_meal_plan, get_weekly_schedule, get_tips))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/diet-plans/recommendations",
                state.args.server.root_path
            ),
            post(recommend_diet),
        )
        .route(
            &format!("{}/diet-plans/meal-plans", state.args.server.root_path),
            get(get_meal_plan),
        )
        .route(
            &format!(
                "{}/diet-plans/weekly-schedule",
                state.args.server.root_path
            ),
            get(get_weekly_schedule),
        )
        .route(
            &format!("{}/diet-plans/tips", state.args.server.root_path),
            get(get_tips),
        )
}
