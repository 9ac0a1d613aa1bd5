use crate::application::http::{diet_plan::router::DietPlanApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriplan API"
    ),
    nest(
        (path = "/diet-plans", api = DietPlanApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
