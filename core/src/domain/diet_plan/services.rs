use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{
        entities::{DayPlan, DietRecommendation},
        helpers::{compute_daily_calories, summarize_weight_goal},
        ports::{DietPlanService, MealCatalog},
        value_objects::{GetMealPlanInput, RecommendDietInput},
    },
};

impl<MC> DietPlanService for Service<MC>
where
    MC: MealCatalog,
{
    async fn recommend_diet(
        &self,
        input: RecommendDietInput,
    ) -> Result<DietRecommendation, CoreError> {
        let daily_calories = compute_daily_calories(input.gender, input.activity, input.goal);

        let sample_meals = self
            .meal_catalog
            .sample_meals(input.diet_preference, input.goal)
            .await?;
        let weekly_schedule = self.meal_catalog.weekly_schedule().await?;
        let tips = self.meal_catalog.tips().await?;

        let weight_goal = summarize_weight_goal(input.current_weight_kg, input.target_weight_kg);

        tracing::debug!(
            age = input.age,
            daily_calories,
            goal = ?input.goal,
            "computed diet recommendation"
        );

        Ok(DietRecommendation::new(
            daily_calories,
            input.goal.diet_type().to_string(),
            input.diet_preference,
            sample_meals,
            weekly_schedule,
            tips,
            weight_goal,
        ))
    }

    async fn get_meal_plan(&self, input: GetMealPlanInput) -> Result<Vec<String>, CoreError> {
        self.meal_catalog
            .sample_meals(input.preference, input.goal)
            .await
    }

    async fn get_weekly_schedule(&self) -> Result<Vec<DayPlan>, CoreError> {
        self.meal_catalog.weekly_schedule().await
    }

    async fn get_tips(&self) -> Result<Vec<String>, CoreError> {
        self.meal_catalog.tips().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_plan::entities::profile::{
        ActivityLevel, DietPreference, FitnessGoal, Gender,
    };
    use crate::domain::diet_plan::entities::diet_recommendation::WeightDirection;
    use crate::infrastructure::catalog::StaticMealCatalog;

    fn input() -> RecommendDietInput {
        RecommendDietInput {
            age: 25,
            gender: Gender::Male,
            activity: ActivityLevel::Low,
            goal: FitnessGoal::WeightLoss,
            diet_preference: DietPreference::Vegetarian,
            current_weight_kg: 60.0,
            target_weight_kg: 55.0,
        }
    }

    #[tokio::test]
    async fn recommend_diet_assembles_full_bundle() {
        let service = Service::new(StaticMealCatalog::new());

        let recommendation = service.recommend_diet(input()).await.unwrap();

        assert_eq!(recommendation.daily_calories, 1700);
        assert_eq!(
            recommendation.diet_type,
            "Low-carb, high-protein diet with more vegetables and fiber."
        );
        assert_eq!(recommendation.diet_preference, DietPreference::Vegetarian);
        assert_eq!(recommendation.sample_meals.len(), 3);
        assert_eq!(recommendation.weekly_schedule.len(), 7);
        assert_eq!(recommendation.tips.len(), 4);
        assert_eq!(recommendation.weight_goal.direction, WeightDirection::Lose);
        assert_eq!(recommendation.weight_goal.delta_kg, 5.0);
    }

    #[tokio::test]
    async fn sample_meals_ignore_gender_activity_and_weights() {
        let service = Service::new(StaticMealCatalog::new());

        let first = service.recommend_diet(input()).await.unwrap();

        let mut other = input();
        other.age = 60;
        other.gender = Gender::Female;
        other.activity = ActivityLevel::High;
        other.current_weight_kg = 90.0;
        other.target_weight_kg = 100.0;
        let second = service.recommend_diet(other).await.unwrap();

        assert_eq!(first.sample_meals, second.sample_meals);
        assert_ne!(first.daily_calories, second.daily_calories);
    }

    #[tokio::test]
    async fn get_meal_plan_matches_recommendation_meals() {
        let service = Service::new(StaticMealCatalog::new());

        let recommendation = service.recommend_diet(input()).await.unwrap();
        let meals = service
            .get_meal_plan(GetMealPlanInput {
                preference: DietPreference::Vegetarian,
                goal: FitnessGoal::WeightLoss,
            })
            .await
            .unwrap();

        assert_eq!(recommendation.sample_meals, meals);
    }

    #[tokio::test]
    async fn schedule_and_tips_are_input_independent() {
        let service = Service::new(StaticMealCatalog::new());

        let schedule = service.get_weekly_schedule().await.unwrap();
        let tips = service.get_tips().await.unwrap();
        let recommendation = service.recommend_diet(input()).await.unwrap();

        assert_eq!(recommendation.weekly_schedule, schedule);
        assert_eq!(recommendation.tips, tips);
    }
}
