use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{get, web, HttpResponse};
use docsum_document::{markup_to_docx, DOCX_MIME};
use tracing::info;

use crate::state::AppState;
use crate::types::ErrorResponse;

/// ASCII name for clients that ignore `filename*`
const FALLBACK_FILE_NAME: &str = "docsum.docx";

/// Export the session's current text as DOCX.
/// The document is rebuilt from the session on every request.
#[get("/session/{session_id}/download")]
pub async fn download(
    path: web::Path<String>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let session_id = path.into_inner();
    let session = state.sessions.read(&session_id).await;

    if !session.has_result() {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::error(
            "다운로드할 정리 결과가 없습니다.",
        )));
    }

    let bytes = markup_to_docx(&session.generated_text)
        .map_err(actix_web::error::ErrorInternalServerError)?;

    info!(
        "Download for session {}: {} ({} bytes)",
        session_id,
        session.file_name,
        bytes.len()
    );

    Ok(HttpResponse::Ok()
        .content_type(DOCX_MIME)
        .insert_header(attachment(&session.file_name))
        .body(bytes))
}

/// Content-Disposition carrying a UTF-8 filename
fn attachment(file_name: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![
            DispositionParam::Filename(FALLBACK_FILE_NAME.to_string()),
            DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_string()),
                language_tag: None,
                value: file_name.as_bytes().to_vec(),
            }),
        ],
    }
}
