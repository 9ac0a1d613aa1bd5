use crate::domain::diet_plan::entities::{
    diet_recommendation::{WeightDirection, WeightGoalSummary},
    profile::{ActivityLevel, FitnessGoal, Gender},
};

/// Daily calorie target: gender base plus the activity and goal deltas.
pub fn compute_daily_calories(gender: Gender, activity: ActivityLevel, goal: FitnessGoal) -> i32 {
    gender.base_calories() + activity.calorie_adjustment() + goal.calorie_adjustment()
}

/// Summarize the gap between current and target weight.
pub fn summarize_weight_goal(current_weight_kg: f64, target_weight_kg: f64) -> WeightGoalSummary {
    let delta = target_weight_kg - current_weight_kg;

    if delta < 0.0 {
        let delta_kg = delta.abs();
        WeightGoalSummary {
            direction: WeightDirection::Lose,
            delta_kg,
            message: format!(
                "You aim to lose {} kg. Stay consistent with controlled calories and exercise.",
                format_kg(delta_kg)
            ),
        }
    } else if delta > 0.0 {
        WeightGoalSummary {
            direction: WeightDirection::Gain,
            delta_kg: delta,
            message: format!(
                "You aim to gain {} kg. Add extra protein and calorie-dense foods.",
                format_kg(delta)
            ),
        }
    } else {
        WeightGoalSummary {
            direction: WeightDirection::Maintain,
            delta_kg: 0.0,
            message: "Your target weight matches your current weight. Focus on maintaining balance."
                .to_string(),
        }
    }
}

/// Whole kilograms render without a decimal point, fractional ones with one.
fn format_kg(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_low_weight_loss_is_1700() {
        let calories =
            compute_daily_calories(Gender::Male, ActivityLevel::Low, FitnessGoal::WeightLoss);
        assert_eq!(calories, 1700);
    }

    #[test]
    fn female_high_weight_gain_is_2800() {
        let calories =
            compute_daily_calories(Gender::Female, ActivityLevel::High, FitnessGoal::WeightGain);
        assert_eq!(calories, 2800);
    }

    #[test]
    fn moderate_maintain_keeps_base_calories() {
        assert_eq!(
            compute_daily_calories(Gender::Male, ActivityLevel::Moderate, FitnessGoal::Maintain),
            2500
        );
        assert_eq!(
            compute_daily_calories(
                Gender::Female,
                ActivityLevel::Moderate,
                FitnessGoal::Maintain
            ),
            2000
        );
    }

    #[test]
    fn calorie_extremes() {
        assert_eq!(
            compute_daily_calories(Gender::Female, ActivityLevel::Low, FitnessGoal::WeightLoss),
            1200
        );
        assert_eq!(
            compute_daily_calories(Gender::Male, ActivityLevel::High, FitnessGoal::WeightGain),
            3300
        );
    }

    #[test]
    fn lose_direction_matches_negative_delta() {
        let summary = summarize_weight_goal(60.0, 55.0);
        assert_eq!(summary.direction, WeightDirection::Lose);
        assert_eq!(summary.delta_kg, 5.0);
        assert!(summary.message.contains("lose 5 kg"));
    }

    #[test]
    fn gain_direction_matches_positive_delta() {
        let summary = summarize_weight_goal(55.0, 62.5);
        assert_eq!(summary.direction, WeightDirection::Gain);
        assert_eq!(summary.delta_kg, 7.5);
        assert!(summary.message.contains("gain 7.5 kg"));
    }

    #[test]
    fn equal_weights_maintain() {
        let summary = summarize_weight_goal(70.0, 70.0);
        assert_eq!(summary.direction, WeightDirection::Maintain);
        assert_eq!(summary.delta_kg, 0.0);
        assert!(summary.message.contains("maintaining balance"));
    }
}
