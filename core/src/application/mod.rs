use crate::domain::common::services::Service;
use crate::infrastructure::catalog::StaticMealCatalog;

pub type NutriplanService = Service<StaticMealCatalog>;

/// Wire the domain service to its default adapters.
pub fn create_service() -> NutriplanService {
    Service::new(StaticMealCatalog::new())
}
