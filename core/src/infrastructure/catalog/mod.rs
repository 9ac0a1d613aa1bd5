pub mod static_meal_catalog;

pub use static_meal_catalog::StaticMealCatalog;
