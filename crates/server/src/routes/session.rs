use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use docsum_common::DocsumError;
use tracing::info;

use crate::state::AppState;
use crate::types::{ErrorResponse, GenerateRequest, GenerateResponse, SessionView};

/// Start a new session with default state
#[post("/session")]
pub async fn create_session(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let session_id = state.sessions.create().await;
    let session = state.sessions.read(&session_id).await;

    info!("Session created: {}", session_id);

    Ok(HttpResponse::Ok().json(SessionView::new(session_id, &session)))
}

/// Current session state for rendering
#[get("/session/{session_id}")]
pub async fn get_session(
    path: web::Path<String>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let session_id = path.into_inner();
    let session = state.sessions.read(&session_id).await;

    Ok(HttpResponse::Ok().json(SessionView::new(session_id, &session)))
}

/// Run one generation; blocks until the completion service answers
#[post("/session/{session_id}/generate")]
pub async fn generate(
    path: web::Path<String>,
    req: web::Json<GenerateRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let session_id = path.into_inner();

    match state
        .workflow
        .execute(&session_id, &req.text, req.selection())
        .await
    {
        Ok(outcome) => Ok(HttpResponse::Ok().json(GenerateResponse {
            success: true,
            notice: outcome.notice.map(str::to_string),
            session: SessionView::new(session_id, &outcome.session),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Render a failed generation for the page
fn error_response(err: &DocsumError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = match err {
        DocsumError::InvalidInput(msg) => ErrorResponse::warning(msg.clone()),
        other => ErrorResponse::error(format!("에러 발생: {}", other)),
    };

    HttpResponse::build(status).json(body)
}
