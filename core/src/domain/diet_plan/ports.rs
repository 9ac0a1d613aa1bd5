use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::{DayPlan, DietRecommendation, profile::{DietPreference, FitnessGoal}},
        value_objects::{GetMealPlanInput, RecommendDietInput},
    },
};

/// Catalog trait for the static meal, schedule, and tip tables
#[cfg_attr(test, mockall::automock)]
pub trait MealCatalog: Send + Sync {
    fn sample_meals(
        &self,
        preference: DietPreference,
        goal: FitnessGoal,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn weekly_schedule(&self) -> impl Future<Output = Result<Vec<DayPlan>, CoreError>> + Send;

    fn tips(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Service trait for diet plan business logic
#[cfg_attr(test, mockall::automock)]
pub trait DietPlanService: Send + Sync {
    fn recommend_diet(
        &self,
        input: RecommendDietInput,
    ) -> impl Future<Output = Result<DietRecommendation, CoreError>> + Send;

    fn get_meal_plan(
        &self,
        input: GetMealPlanInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_weekly_schedule(
        &self,
    ) -> impl Future<Output = Result<Vec<DayPlan>, CoreError>> + Send;

    fn get_tips(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
