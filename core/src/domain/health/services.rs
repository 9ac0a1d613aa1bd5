use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::MealCatalog,
    health::ports::HealthCheckService,
};

impl<MC> HealthCheckService for Service<MC>
where
    MC: MealCatalog,
{
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(self.started_at.elapsed().as_millis() as u64)
    }
}
