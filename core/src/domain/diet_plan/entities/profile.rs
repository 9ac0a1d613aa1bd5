use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitnessGoal {
    WeightLoss,
    WeightGain,
    Maintain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl Gender {
    /// Base daily calories before activity and goal adjustments.
    pub fn base_calories(&self) -> i32 {
        match self {
            Gender::Male => 2500,
            Gender::Female => 2000,
        }
    }
}

impl ActivityLevel {
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            ActivityLevel::Low => -300,
            ActivityLevel::Moderate => 0,
            ActivityLevel::High => 300,
        }
    }
}

impl FitnessGoal {
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            FitnessGoal::WeightLoss => -500,
            FitnessGoal::WeightGain => 500,
            FitnessGoal::Maintain => 0,
        }
    }

    pub fn diet_type(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => {
                "Low-carb, high-protein diet with more vegetables and fiber."
            }
            FitnessGoal::WeightGain => {
                "High-protein, calorie-dense meals with frequent snacks."
            }
            FitnessGoal::Maintain => "Balanced diet with moderate carbs, fats, and proteins.",
        }
    }
}
