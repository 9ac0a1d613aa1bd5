use crate::domain::diet_plan::entities::profile::{
    ActivityLevel, DietPreference, FitnessGoal, Gender,
};

#[derive(Debug, Clone)]
pub struct RecommendDietInput {
    pub age: u8,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: FitnessGoal,
    pub diet_preference: DietPreference,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
}

#[derive(Debug, Clone)]
pub struct GetMealPlanInput {
    pub preference: DietPreference,
    pub goal: FitnessGoal,
}
