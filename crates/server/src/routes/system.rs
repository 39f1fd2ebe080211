use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness plus the completion settings the server started with
#[get("/health")]
pub async fn health(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        success: true,
        model: state.config.llm_model.clone(),
        credential_configured: state.config.openai_api_key.is_some(),
    }))
}
