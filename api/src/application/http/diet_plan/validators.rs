use nutriplan_core::domain::diet_plan::entities::profile::{
    ActivityLevel, DietPreference, FitnessGoal, Gender,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendDietRequest {
    #[validate(range(min = 10, max = 100, message = "age must be between 10 and 100"))]
    pub age: u8,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: FitnessGoal,
    pub diet_preference: DietPreference,
    #[validate(range(
        min = 30.0,
        max = 200.0,
        message = "current_weight_kg must be between 30 and 200"
    ))]
    pub current_weight_kg: f64,
    #[validate(range(
        min = 30.0,
        max = 200.0,
        message = "target_weight_kg must be between 30 and 200"
    ))]
    pub target_weight_kg: f64,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetMealPlanParams {
    pub preference: DietPreference,
    pub goal: FitnessGoal,
}
