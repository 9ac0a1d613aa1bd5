use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::{
            DayPlan,
            profile::{DietPreference, FitnessGoal},
        },
        ports::MealCatalog,
    },
};

const VEGETARIAN_WEIGHT_LOSS: [&str; 3] = [
    "Breakfast: Oats with fruits and green tea",
    "Lunch: Grilled paneer with vegetables",
    "Dinner: Lentil soup and salad",
];

const VEGETARIAN_WEIGHT_GAIN: [&str; 3] = [
    "Breakfast: Milk, banana, and peanut butter toast",
    "Lunch: Rice, dal, paneer curry, and yogurt",
    "Dinner: Roti with sabzi and milkshake",
];

const VEGETARIAN_MAINTAIN: [&str; 3] = [
    "Breakfast: Whole grains with milk and fruits",
    "Lunch: Rice, dal, sabzi, and salad",
    "Dinner: Light meal with soup and chapati",
];

const NON_VEGETARIAN_WEIGHT_LOSS: [&str; 3] = [
    "Breakfast: Egg whites with toast and green tea",
    "Lunch: Grilled chicken with veggies",
    "Dinner: Soup and boiled eggs",
];

const NON_VEGETARIAN_WEIGHT_GAIN: [&str; 3] = [
    "Breakfast: Eggs, milk, and peanut butter toast",
    "Lunch: Rice, chicken curry, and yogurt",
    "Dinner: Fish curry with rice and milkshake",
];

const NON_VEGETARIAN_MAINTAIN: [&str; 3] = [
    "Breakfast: Eggs and whole grains with fruits",
    "Lunch: Balanced meal with rice, dal, and grilled chicken",
    "Dinner: Soup and chapati with omelette",
];

const VEGAN_WEIGHT_LOSS: [&str; 3] = [
    "Breakfast: Oats with almond milk and fruits",
    "Lunch: Quinoa salad with tofu",
    "Dinner: Lentil soup and stir-fried veggies",
];

const VEGAN_WEIGHT_GAIN: [&str; 3] = [
    "Breakfast: Smoothie with oats, banana, and soy milk",
    "Lunch: Rice, beans, and tofu curry",
    "Dinner: Vegan burrito and almond milkshake",
];

const VEGAN_MAINTAIN: [&str; 3] = [
    "Breakfast: Peanut butter toast with almond milk",
    "Lunch: Brown rice, lentils, and veggies",
    "Dinner: Soup and tofu stir fry",
];

const WEEKLY_SCHEDULE: [(&str, &str); 7] = [
    ("Monday", "Oats, rice bowl with protein source, salad"),
    ("Tuesday", "Smoothie, grilled protein meal, soup"),
    ("Wednesday", "Upma, lentils, and veggies"),
    ("Thursday", "Fruit smoothie, chapati with protein, and salad"),
    ("Friday", "Poha, protein rice bowl, and soup"),
    ("Saturday", "Sandwich, rice with dal, and steamed veggies"),
    ("Sunday", "Cheat day! Enjoy one favorite meal moderately"),
];

const TIPS: [&str; 4] = [
    "Stay hydrated: drink 2-3 liters of water daily.",
    "Include seasonal vegetables and fruits.",
    "Eat every 3-4 hours to maintain energy.",
    "Exercise or walk at least 30 minutes daily.",
];

/// `MealCatalog` adapter backed by embedded constant tables.
#[derive(Debug, Clone, Default)]
pub struct StaticMealCatalog;

impl StaticMealCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl MealCatalog for StaticMealCatalog {
    async fn sample_meals(
        &self,
        preference: DietPreference,
        goal: FitnessGoal,
    ) -> Result<Vec<String>, CoreError> {
        let meals = match (preference, goal) {
            (DietPreference::Vegetarian, FitnessGoal::WeightLoss) => VEGETARIAN_WEIGHT_LOSS,
            (DietPreference::Vegetarian, FitnessGoal::WeightGain) => VEGETARIAN_WEIGHT_GAIN,
            (DietPreference::Vegetarian, FitnessGoal::Maintain) => VEGETARIAN_MAINTAIN,
            (DietPreference::NonVegetarian, FitnessGoal::WeightLoss) => NON_VEGETARIAN_WEIGHT_LOSS,
            (DietPreference::NonVegetarian, FitnessGoal::WeightGain) => NON_VEGETARIAN_WEIGHT_GAIN,
            (DietPreference::NonVegetarian, FitnessGoal::Maintain) => NON_VEGETARIAN_MAINTAIN,
            (DietPreference::Vegan, FitnessGoal::WeightLoss) => VEGAN_WEIGHT_LOSS,
            (DietPreference::Vegan, FitnessGoal::WeightGain) => VEGAN_WEIGHT_GAIN,
            (DietPreference::Vegan, FitnessGoal::Maintain) => VEGAN_MAINTAIN,
        };

        Ok(meals.iter().map(|meal| meal.to_string()).collect())
    }

    async fn weekly_schedule(&self) -> Result<Vec<DayPlan>, CoreError> {
        Ok(WEEKLY_SCHEDULE
            .iter()
            .map(|(day, plan)| DayPlan {
                day: day.to_string(),
                plan: plan.to_string(),
            })
            .collect())
    }

    async fn tips(&self) -> Result<Vec<String>, CoreError> {
        Ok(TIPS.iter().map(|tip| tip.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFERENCES: [DietPreference; 3] = [
        DietPreference::Vegetarian,
        DietPreference::NonVegetarian,
        DietPreference::Vegan,
    ];

    const GOALS: [FitnessGoal; 3] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::WeightGain,
        FitnessGoal::Maintain,
    ];

    #[tokio::test]
    async fn every_combination_has_three_non_empty_meals() {
        let catalog = StaticMealCatalog::new();

        for preference in PREFERENCES {
            for goal in GOALS {
                let meals = catalog.sample_meals(preference, goal).await.unwrap();
                assert_eq!(meals.len(), 3, "{preference:?}/{goal:?}");
                assert!(meals.iter().all(|meal| !meal.is_empty()));
            }
        }
    }

    #[tokio::test]
    async fn meal_lists_differ_across_preferences() {
        let catalog = StaticMealCatalog::new();

        let vegetarian = catalog
            .sample_meals(DietPreference::Vegetarian, FitnessGoal::WeightLoss)
            .await
            .unwrap();
        let vegan = catalog
            .sample_meals(DietPreference::Vegan, FitnessGoal::WeightLoss)
            .await
            .unwrap();

        assert_ne!(vegetarian, vegan);
    }

    #[tokio::test]
    async fn weekly_schedule_covers_the_week_in_order() {
        let catalog = StaticMealCatalog::new();

        let schedule = catalog.weekly_schedule().await.unwrap();
        let days: Vec<&str> = schedule.iter().map(|entry| entry.day.as_str()).collect();

        assert_eq!(
            days,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
        assert!(schedule.iter().all(|entry| !entry.plan.is_empty()));
    }

    #[tokio::test]
    async fn four_fixed_tips() {
        let catalog = StaticMealCatalog::new();

        let tips = catalog.tips().await.unwrap();

        assert_eq!(tips.len(), 4);
        assert!(tips[0].contains("hydrated"));
    }
}
