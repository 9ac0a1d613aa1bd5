use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::diet_plan::entities::profile::DietPreference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietRecommendation {
    pub id: Uuid,
    pub daily_calories: i32,
    pub diet_type: String,
    pub diet_preference: DietPreference,
    pub sample_meals: Vec<String>,
    pub weekly_schedule: Vec<DayPlan>,
    pub tips: Vec<String>,
    pub weight_goal: WeightGoalSummary,
    pub created_at: DateTime<Utc>,
}

/// One entry of the fixed weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayPlan {
    pub day: String,
    pub plan: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightDirection {
    Lose,
    Gain,
    Maintain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightGoalSummary {
    pub direction: WeightDirection,
    pub delta_kg: f64,
    pub message: String,
}

impl DietRecommendation {
    pub fn new(
        daily_calories: i32,
        diet_type: String,
        diet_preference: DietPreference,
        sample_meals: Vec<String>,
        weekly_schedule: Vec<DayPlan>,
        tips: Vec<String>,
        weight_goal: WeightGoalSummary,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            daily_calories,
            diet_type,
            diet_preference,
            sample_meals,
            weekly_schedule,
            tips,
            weight_goal,
            created_at: now,
        }
    }
}
