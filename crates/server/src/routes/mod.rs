mod download;
mod session;
mod system;

use actix_web::web;

/// Register every API route under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(session::create_session)
            .service(session::get_session)
            .service(session::generate)
            .service(download::download)
            .service(system::health),
    );
}
