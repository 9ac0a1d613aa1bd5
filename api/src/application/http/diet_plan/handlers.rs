pub mod get_meal_plan;
pub mod get_tips;
pub mod get_weekly_schedule;
pub mod recommend_diet;
